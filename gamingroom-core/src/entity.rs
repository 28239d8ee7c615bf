//! Entity model shared by games, teams and players
//!
//! Every entity is an `{id, name}` pair. The three kinds wrap the same record
//! and differ only in type, which keeps their id spaces from ever mixing.

use std::fmt;

use serde::Serialize;

/// Identifier assigned by the registry, unique within one collection
pub type EntityId = u64;

/// Common id/name record underlying every entity kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRecord {
    id: EntityId,
    name: String,
}

impl EntityRecord {
    /// Create a record. No validation is performed on the name.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EntityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity [id={}, name={}]", self.id, self.name)
    }
}

/// An entity kind the registry knows how to store
///
/// Implementations are plain wrappers around an [`EntityRecord`]; the registry
/// builds them through [`Entity::from_record`] and reads names and ids back
/// through [`Entity::record`].
pub trait Entity: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Kind label used in log output
    const KIND: &'static str;

    /// Wrap a freshly assigned record
    fn from_record(record: EntityRecord) -> Self;

    /// Borrow the underlying record
    fn record(&self) -> &EntityRecord;
}

macro_rules! entity_kind {
    ($(#[$meta:meta])* $kind:ident, $label:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $kind {
            record: EntityRecord,
        }

        impl $kind {
            pub fn new(id: EntityId, name: impl Into<String>) -> Self {
                Self {
                    record: EntityRecord::new(id, name),
                }
            }

            pub fn id(&self) -> EntityId {
                self.record.id()
            }

            pub fn name(&self) -> &str {
                self.record.name()
            }
        }

        impl Entity for $kind {
            const KIND: &'static str = $label;

            fn from_record(record: EntityRecord) -> Self {
                Self { record }
            }

            fn record(&self) -> &EntityRecord {
                &self.record
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.record, f)
            }
        }
    };
}

entity_kind!(
    /// A game hosted in the gaming room
    Game,
    "game"
);

entity_kind!(
    /// A team that can take part in games
    Team,
    "team"
);

entity_kind!(
    /// An individual player
    Player,
    "player"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = EntityRecord::new(7, "Chess");
        assert_eq!(record.id(), 7);
        assert_eq!(record.name(), "Chess");
    }

    #[test]
    fn test_display_format() {
        let game = Game::new(1, "Chess");
        assert_eq!(game.to_string(), "Entity [id=1, name=Chess]");

        let team = Team::new(3, "Red");
        assert_eq!(format!("{}", team), "Entity [id=3, name=Red]");
    }

    #[test]
    fn test_construction_accepts_empty_name() {
        let player = Player::new(1, "");
        assert_eq!(player.name(), "");
        assert_eq!(player.to_string(), "Entity [id=1, name=]");
    }

    #[test]
    fn test_from_record_keeps_fields() {
        let team = Team::from_record(EntityRecord::new(4, "Blue"));
        assert_eq!(team.id(), 4);
        assert_eq!(team.record().name(), "Blue");
        assert_eq!(Team::KIND, "team");
    }
}
