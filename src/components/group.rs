//! Entity kind tag.
//!
//! Every entity the session spawns carries a [`Group`]. Collision rules are
//! expressed between groups, and session teardown sweeps everything tagged
//! with one.

use bevy_ecs::prelude::Component;

/// Group name for the player character.
pub const HERO: &str = "hero";
/// Group name for level platforms (including the ground).
pub const PLATFORMS: &str = "platforms";
/// Group name for patrolling enemies.
pub const SPIDERS: &str = "spiders";
/// Group name for collectible coins.
pub const COINS: &str = "coins";
/// Group name for the invisible sensors that bound spider patrols.
pub const ENEMY_WALLS: &str = "enemy_walls";
/// Group name for inert level props (door, key).
pub const DECORATION: &str = "decoration";
/// Group name for the level backdrop.
pub const BACKGROUND: &str = "background";
/// Group name for screen-space HUD entities.
pub const HUD: &str = "hud";
/// Group name for session-scoped observers (input handlers).
pub const HANDLERS: &str = "handlers";

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(pub &'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
