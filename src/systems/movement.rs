//! Physics pre-step.
//!
//! Runs once per frame before collisions:
//! 1. clear contact flags and remember where each body starts,
//! 2. accelerate by gravity and integrate velocity into position,
//! 3. clamp bodies that collide with the world bounds, raising `blocked`.
//!
//! Immovable and disabled bodies keep their position.
use bevy_ecs::prelude::*;
use bevy_math::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::dead::Dead;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::physics::{ArcadePhysics, WorldBounds};
use crate::resources::worldtime::WorldTime;

pub fn physics_pre_update(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>), Without<Dead>>,
    physics: Res<ArcadePhysics>,
    time: Res<WorldTime>,
) {
    let delta = time.delta;
    for (mut position, mut body, collider) in query.iter_mut() {
        body.begin_step(position.pos);
        if !body.enabled || body.immovable {
            continue;
        }
        if body.allow_gravity {
            body.velocity += physics.gravity * delta;
        }
        let velocity = body.velocity;
        position.pos += velocity * delta;

        if let Some(collider) = collider.filter(|_| body.collide_world_bounds) {
            clamp_to_bounds(&mut position.pos, &mut body, collider, &physics.bounds);
        }
    }
}

/// Keep the collider box inside `bounds`, stopping motion into the edge.
pub fn clamp_to_bounds(
    position: &mut Vec2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    bounds: &WorldBounds,
) {
    let (min, max) = collider.aabb(*position);
    if min.x < bounds.min.x {
        position.x += bounds.min.x - min.x;
        body.velocity.x = 0.0;
        body.blocked.left = true;
    } else if max.x > bounds.max.x {
        position.x -= max.x - bounds.max.x;
        body.velocity.x = 0.0;
        body.blocked.right = true;
    }
    if min.y < bounds.min.y {
        position.y += bounds.min.y - min.y;
        body.velocity.y = 0.0;
        body.blocked.up = true;
    } else if max.y > bounds.max.y {
        position.y -= max.y - bounds.max.y;
        body.velocity.y = 0.0;
        body.blocked.down = true;
    }
}
