//! Create-or-get registry for games, teams and players
//!
//! `GameService` owns three independent collections, each with its own id
//! counter starting at 1. Names are the lookup key within a collection: adding
//! a name that already exists hands back the stored instance instead of
//! allocating a new id.
//!
//! Applications normally construct a `GameService` and pass it around. A
//! process-wide instance is also available through [`GameService::shared`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, trace};

use crate::entity::{Entity, EntityId, EntityRecord, Game, Player, Team};

/// Process-wide registry, created on first access
static SHARED: Lazy<Mutex<GameService>> = Lazy::new(|| Mutex::new(GameService::new()));

/// Errors returned by checked registry accessors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Index {index} is out of bounds for {len} entities")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Insertion-ordered entities of one kind plus the next id to hand out
#[derive(Debug)]
pub(crate) struct Collection<T> {
    entities: Vec<Arc<T>>,
    next_id: EntityId,
}

impl<T: Entity> Collection<T> {
    pub(crate) fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Return the entity called `name`, creating it if absent
    pub(crate) fn add(&mut self, name: &str) -> Arc<T> {
        if let Some(existing) = self.find_by_name(name) {
            trace!(kind = T::KIND, id = existing.record().id(), entity = name, "Reusing existing entity");
            return existing;
        }

        let id = self.next_id;
        self.next_id += 1;

        let entity = Arc::new(T::from_record(EntityRecord::new(id, name)));
        self.entities.push(Arc::clone(&entity));
        debug!(kind = T::KIND, id, entity = name, "Created entity");
        entity
    }

    pub(crate) fn find_by_id(&self, id: EntityId) -> Option<Arc<T>> {
        self.entities
            .iter()
            .find(|entity| entity.record().id() == id)
            .cloned()
    }

    pub(crate) fn find_by_name(&self, name: &str) -> Option<Arc<T>> {
        self.entities
            .iter()
            .find(|entity| entity.record().name() == name)
            .cloned()
    }

    /// Positional access; panics when `index` is out of range
    #[cfg(test)]
    pub(crate) fn at(&self, index: usize) -> Arc<T> {
        Arc::clone(&self.entities[index])
    }

    pub(crate) fn try_at(&self, index: usize) -> Result<Arc<T>, RegistryError> {
        self.entities
            .get(index)
            .cloned()
            .ok_or(RegistryError::IndexOutOfBounds {
                index,
                len: self.entities.len(),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.entities.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.entities.iter()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entities.iter().map(|entity| T::clone(entity)).collect()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned copy of every collection, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub games: Vec<Game>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
}

/// Registry of games, teams and players
#[derive(Debug, Default)]
pub struct GameService {
    games: Collection<Game>,
    teams: Collection<Team>,
    players: Collection<Player>,
}

impl GameService {
    /// Create an empty, independent registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock and return the process-wide registry
    ///
    /// The instance is created on the first call and lives until the process
    /// exits; every call yields the same instance. Holding the guard keeps
    /// other callers out, so each create-or-get runs as one unit.
    pub fn shared() -> MutexGuard<'static, GameService> {
        SHARED.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the process-wide registry with an empty one (mainly for testing)
    pub fn reset_shared() {
        *Self::shared() = Self::new();
    }

    /// Return the game called `name`, creating it with the next game id if absent
    ///
    /// Calling this twice with the same name returns the same instance and does
    /// not consume an id.
    pub fn add_game(&mut self, name: &str) -> Arc<Game> {
        self.games.add(name)
    }

    /// Find a game by id
    ///
    /// # Returns
    ///
    /// `Some(game)` if a game with this id was created, `None` otherwise.
    pub fn get_game(&self, id: EntityId) -> Option<Arc<Game>> {
        self.games.find_by_id(id)
    }

    /// Find a game by exact, case-sensitive name
    pub fn get_game_by_name(&self, name: &str) -> Option<Arc<Game>> {
        self.games.find_by_name(name)
    }

    /// Game at insertion position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.game_count()`.
    #[cfg(test)]
    pub(crate) fn game_at(&self, index: usize) -> Arc<Game> {
        self.games.at(index)
    }

    /// Checked form of positional access
    pub fn try_game_at(&self, index: usize) -> Result<Arc<Game>, RegistryError> {
        self.games.try_at(index)
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Games in creation order
    pub fn games(&self) -> impl Iterator<Item = &Arc<Game>> + '_ {
        self.games.iter()
    }

    /// Return the team called `name`, creating it with the next team id if absent
    pub fn add_team(&mut self, name: &str) -> Arc<Team> {
        self.teams.add(name)
    }

    pub fn get_team(&self, id: EntityId) -> Option<Arc<Team>> {
        self.teams.find_by_id(id)
    }

    pub fn get_team_by_name(&self, name: &str) -> Option<Arc<Team>> {
        self.teams.find_by_name(name)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn teams(&self) -> impl Iterator<Item = &Arc<Team>> + '_ {
        self.teams.iter()
    }

    /// Return the player called `name`, creating it with the next player id if absent
    pub fn add_player(&mut self, name: &str) -> Arc<Player> {
        self.players.add(name)
    }

    pub fn get_player(&self, id: EntityId) -> Option<Arc<Player>> {
        self.players.find_by_id(id)
    }

    pub fn get_player_by_name(&self, name: &str) -> Option<Arc<Player>> {
        self.players.find_by_name(name)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> impl Iterator<Item = &Arc<Player>> + '_ {
        self.players.iter()
    }

    /// Copy all three collections out of the registry
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            games: self.games.to_vec(),
            teams: self.teams.to_vec(),
            players: self.players.to_vec(),
        }
    }
}
