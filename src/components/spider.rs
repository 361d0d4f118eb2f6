//! Patrolling enemy controller.
//!
//! A spider crawls horizontally at [`SPIDER_SPEED`] and turns around whenever
//! its body reports contact on the side it is heading to. Invisible enemy
//! walls at both ends of each platform provide that contact, so a spider
//! paces its platform forever.

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

use crate::components::animation::{Animation, AnimationAction, AnimationSubscription};
use crate::components::rigidbody::RigidBody;

/// Patrol speed in pixels per second.
pub const SPIDER_SPEED: f32 = 100.0;
pub const SPIDER_CRAWL: &str = "spider:crawl";
pub const SPIDER_DIE: &str = "spider:die";

/// Marker for an enemy entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Spider;

impl Spider {
    /// Body a freshly spawned spider starts with: heading right, kept inside
    /// the world.
    pub fn spawn_body() -> RigidBody {
        RigidBody::new()
            .with_world_bounds()
            .with_velocity(Vec2::new(SPIDER_SPEED, 0.0))
    }

    /// Reverse on contact. Right contact wins when both sides report one.
    pub fn patrol(body: &mut RigidBody) {
        if body.stopped_right() {
            body.velocity.x = -SPIDER_SPEED;
        } else if body.stopped_left() {
            body.velocity.x = SPIDER_SPEED;
        }
    }

    /// Take the spider out of physics and start the death animation. The
    /// returned subscription kills the entity when that animation completes;
    /// the caller attaches it.
    pub fn die(body: &mut RigidBody, animation: &mut Animation) -> AnimationSubscription {
        body.enabled = false;
        animation.play(SPIDER_DIE);
        AnimationSubscription::new(SPIDER_DIE, AnimationAction::Kill)
    }
}
