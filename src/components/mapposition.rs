//! World-space position component.
//!
//! [`MapPosition`] is the anchor point of an entity in world pixels. What part
//! of the sprite or collider sits on that point depends on the entity's anchor
//! (see [`Sprite::anchor`](super::sprite::Sprite) and
//! [`BoxCollider::origin`](super::boxcollider::BoxCollider)).

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// World-space anchor position of an entity, in pixels (y grows downward).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}
