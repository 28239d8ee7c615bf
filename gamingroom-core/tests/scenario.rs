//! End-to-end walk through the registry's public API

use std::sync::Arc;

use gamingroom_core::{GameService, RegistryError, Roster};

#[test]
fn test_chess_and_checkers_scenario() {
    let mut service = GameService::new();

    let g1 = service.add_game("Chess");
    assert_eq!((g1.id(), g1.name()), (1, "Chess"));

    let g2 = service.add_game("Chess");
    assert!(Arc::ptr_eq(&g1, &g2));

    let g3 = service.add_game("Checkers");
    assert_eq!((g3.id(), g3.name()), (2, "Checkers"));

    assert_eq!(service.game_count(), 2);
    assert!(Arc::ptr_eq(&service.get_game(2).unwrap(), &g3));
    assert!(service.get_game_by_name("Backgammon").is_none());
    assert_eq!(g3.to_string(), "Entity [id=2, name=Checkers]");
}

#[test]
fn test_independent_registries_do_not_share_state() {
    let mut first = GameService::new();
    let mut second = GameService::new();

    first.add_game("Chess");
    first.add_game("Go");
    let go = second.add_game("Go");

    assert_eq!(go.id(), 1);
    assert_eq!(first.game_count(), 2);
    assert_eq!(second.game_count(), 1);
}

#[test]
fn test_checked_index_access() {
    let mut service = GameService::new();
    assert_eq!(
        service.try_game_at(0).unwrap_err(),
        RegistryError::IndexOutOfBounds { index: 0, len: 0 }
    );

    service.add_game("Chess");
    assert_eq!(service.try_game_at(0).unwrap().name(), "Chess");
}

#[test]
fn test_roster_populates_registry_and_snapshot_serializes() {
    let roster = Roster::from_toml_str(
        r#"
        games = ["Chess", "Checkers", "Chess"]
        teams = ["Red", "Blue"]
        players = ["Red"]
        "#,
    )
    .unwrap();

    let mut service = GameService::new();
    assert_eq!(roster.apply(&mut service), 5);

    let rendered = toml::to_string(&service.snapshot()).unwrap();
    assert!(rendered.contains("name = \"Checkers\""));
    assert!(rendered.contains("[[players]]"));
    assert_eq!(service.get_player_by_name("Red").unwrap().id(), 1);
    assert_eq!(service.get_team_by_name("Red").unwrap().id(), 1);
}
