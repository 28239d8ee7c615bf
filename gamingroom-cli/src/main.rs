//! Gaming Room registry binary
//!
//! Populates the process-wide registry from a roster and command-line names,
//! then prints it.

use anyhow::{Context, Result};
use clap::Parser;
use gamingroom_core::{GameService, Roster};
use tracing::info;

mod config;

use crate::config::{Config, OutputFormat};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(std::io::stderr)
        .init();

    let mut roster = match &config.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("loading roster {}", path.display()))?,
        None => Roster::default(),
    };
    roster.extend(config.cli_roster());

    let mut service = GameService::shared();
    let created = roster.apply(&mut service);
    info!(
        created,
        games = service.game_count(),
        teams = service.team_count(),
        players = service.player_count(),
        "Registry populated"
    );

    match config.format {
        OutputFormat::Text => print_text(&service),
        OutputFormat::Toml => {
            let rendered = toml::to_string(&service.snapshot()).context("rendering snapshot")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn print_text(service: &GameService) {
    println!("Games ({}):", service.game_count());
    for game in service.games() {
        println!("  {}", game);
    }
    println!("Teams ({}):", service.team_count());
    for team in service.teams() {
        println!("  {}", team);
    }
    println!("Players ({}):", service.player_count());
    for player in service.players() {
        println!("  {}", player);
    }
}
