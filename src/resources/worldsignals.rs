//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is the session's shared scoreboard: the coin
//! pickup count, the entities other systems need to find (hero, door, key)
//! and presence flags such as `"quit_game"`. HUD text reads from it through
//! [`SignalBinding`](crate::components::signalbinding::SignalBinding).
//!
//! Session shutdown replaces it with an empty one.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

/// Integer key holding the coins collected this session.
pub const COIN_COUNT: &str = "coins";
/// Flag raised when the host loop should stop.
pub const QUIT_GAME: &str = "quit_game";
/// Integer key counting sessions shut down since launch. Survives shutdown.
pub const SESSIONS_ENDED: &str = "sessions_ended";

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
    /// Entities of interest for the current session.
    pub entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `by` to an integer signal (missing counts as 0). Returns the new value.
    pub fn increment_integer(&mut self, key: &str, by: i32) -> i32 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += by;
        *value
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Get an entity by key.
    pub fn get_entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
    /// Set an entity by key.
    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }

    /// Coins collected this session.
    pub fn coin_count(&self) -> i32 {
        self.get_integer(COIN_COUNT).unwrap_or(0)
    }
}
