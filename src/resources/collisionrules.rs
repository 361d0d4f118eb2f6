//! Ordered collision rules between entity groups.
//!
//! The [`collision_system`](crate::systems::collision::collision_system)
//! walks the rules in insertion order every frame. A rule either separates
//! solid bodies or reports an overlap to the session through
//! [`OverlapEvent`](crate::events::collision::OverlapEvent).

use bevy_ecs::prelude::Resource;

use crate::components::group::{COINS, ENEMY_WALLS, HERO, PLATFORMS, SPIDERS};

/// Session callback attached to an overlap rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapHandler {
    /// Hero touches a coin.
    CoinPickup,
    /// Hero touches a spider.
    Combat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResponse {
    /// Push the bodies apart and raise their contact flags.
    Collide,
    /// Leave positions alone and notify the handler.
    Overlap(OverlapHandler),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRule {
    pub group_a: &'static str,
    pub group_b: &'static str,
    pub response: CollisionResponse,
}

impl CollisionRule {
    pub fn collide(group_a: &'static str, group_b: &'static str) -> Self {
        Self {
            group_a,
            group_b,
            response: CollisionResponse::Collide,
        }
    }

    pub fn overlap(group_a: &'static str, group_b: &'static str, handler: OverlapHandler) -> Self {
        Self {
            group_a,
            group_b,
            response: CollisionResponse::Overlap(handler),
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionRules {
    pub rules: Vec<CollisionRule>,
}

impl CollisionRules {
    /// The level's rules, in evaluation order.
    pub fn platformer() -> Self {
        Self {
            rules: vec![
                CollisionRule::collide(SPIDERS, PLATFORMS),
                CollisionRule::collide(SPIDERS, ENEMY_WALLS),
                CollisionRule::collide(HERO, PLATFORMS),
                CollisionRule::overlap(HERO, COINS, OverlapHandler::CoinPickup),
                CollisionRule::overlap(HERO, SPIDERS, OverlapHandler::Combat),
            ],
        }
    }
}
