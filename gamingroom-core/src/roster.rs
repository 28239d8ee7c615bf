//! TOML rosters of entity names
//!
//! A roster lists the games, teams and players to register:
//!
//! ```toml
//! games = ["Chess", "Checkers"]
//! teams = ["Red"]
//! players = ["Alice", "Bob"]
//! ```
//!
//! Every section is optional. Applying a roster goes through the normal
//! create-or-get path, so names already present are left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::registry::GameService;

/// Error type for loading rosters
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse roster: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Names of entities to register, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Roster {
    pub games: Vec<String>,
    pub teams: Vec<String>,
    pub players: Vec<String>,
}

impl Roster {
    /// Parse a roster from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, RosterError> {
        toml::from_str(source).map_err(RosterError::Parse)
    }

    /// Read and parse a roster file
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let source = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Append another roster's names after this one's
    pub fn extend(&mut self, other: Roster) {
        self.games.extend(other.games);
        self.teams.extend(other.teams);
        self.players.extend(other.players);
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty() && self.teams.is_empty() && self.players.is_empty()
    }

    /// Register every name with `service`
    ///
    /// # Returns
    ///
    /// The number of entities that did not exist before.
    pub fn apply(&self, service: &mut GameService) -> usize {
        let (games, teams, players) = (service.game_count(), service.team_count(), service.player_count());

        for name in &self.games {
            service.add_game(name);
        }
        for name in &self.teams {
            service.add_team(name);
        }
        for name in &self.players {
            service.add_player(name);
        }

        let created = service.game_count().saturating_sub(games)
            + service.team_count().saturating_sub(teams)
            + service.player_count().saturating_sub(players);
        info!(created, "Applied roster");
        created
    }
}
