//! Core types for the Gaming Room registry
//!
//! This crate provides the in-memory registry used by the gaming room:
//! - `Entity`: the `{id, name}` shape shared by `Game`, `Team` and `Player`
//! - `GameService`: create-or-get registry with one id space per kind
//! - `Roster`: TOML lists of names to register in bulk

pub mod entity;
pub mod registry;
pub mod roster;

// Re-export main types for convenience
pub use entity::{Entity, EntityId, EntityRecord, Game, Player, Team};
pub use registry::{GameService, RegistryError, RegistrySnapshot};
pub use roster::{Roster, RosterError};
