//! Global arcade physics settings.

use bevy_ecs::prelude::Resource;
use bevy_math::Vec2;

/// Axis-aligned rectangle the bodies with `collide_world_bounds` stay in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }
}

/// Gravity and world bounds shared by every body.
///
/// Gravity starts at zero; the level sets it once everything is spawned.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArcadePhysics {
    pub gravity: Vec2,
    pub bounds: WorldBounds,
}

impl ArcadePhysics {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            gravity: Vec2::ZERO,
            bounds: WorldBounds::new(width, height),
        }
    }
}
