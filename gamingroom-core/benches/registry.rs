use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gamingroom_core::GameService;

fn populated(count: usize) -> GameService {
    let mut service = GameService::new();
    for index in 0..count {
        service.add_game(&format!("game-{index}"));
    }
    service
}

fn bench_create_or_get(c: &mut Criterion) {
    let mut service = populated(1_000);

    c.bench_function("add_game existing name, 1000 games", |b| {
        b.iter(|| service.add_game(black_box("game-999")))
    });

    c.bench_function("get_game by id, 1000 games", |b| {
        b.iter(|| service.get_game(black_box(1_000)))
    });

    c.bench_function("get_game_by_name missing, 1000 games", |b| {
        b.iter(|| service.get_game_by_name(black_box("missing")))
    });
}

criterion_group!(benches, bench_create_or_get);
criterion_main!(benches);
