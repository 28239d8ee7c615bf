use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use gamingroom_core::Roster;
use std::path::PathBuf;
use tracing::Level;

/// How the populated registry is printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Entity [id=.., name=..]` line per entity
    Text,
    /// TOML snapshot of all collections
    Toml,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "gamingroom")]
#[command(about = "Gaming Room entity registry")]
#[command(long_about = "Registers games, teams and players by name and prints the resulting registry.

Names come from an optional TOML roster followed by any --game, --team and
--player flags. Repeated names resolve to the entity created first.")]
pub struct Config {
    /// TOML roster with `games`, `teams` and `players` name lists
    #[arg(long, env = "GAMINGROOM_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Game to register (repeatable)
    #[arg(long = "game", value_name = "NAME")]
    pub games: Vec<String>,

    /// Team to register (repeatable)
    #[arg(long = "team", value_name = "NAME")]
    pub teams: Vec<String>,

    /// Player to register (repeatable)
    #[arg(long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Output format
    #[arg(long, env = "GAMINGROOM_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GAMINGROOM_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("invalid log level '{}'", self.log_level))
    }

    /// Names given on the command line, as a roster
    pub fn cli_roster(&self) -> Roster {
        Roster {
            games: self.games.clone(),
            teams: self.teams.clone(),
            players: self.players.clone(),
        }
    }
}
