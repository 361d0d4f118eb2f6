//! Arcade physics body component.
//!
//! The [`RigidBody`] component stores velocity, the previous-frame position
//! used to measure frame deltas during separation, and the per-side contact
//! flags the controllers read:
//!
//! - `touching` is set when the collision system resolves a solid contact
//!   against another body on that side.
//! - `blocked` is set when the world bounds stop the body on that side.
//!
//! Both sets of flags are cleared at the start of every physics step, so they
//! always describe the most recent frame.
//!
//! The `enabled` flag removes a body from physics entirely (no gravity, no
//! integration, no collision or overlap participation). Dying spiders use it.

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Per-side contact flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub const NONE: Contacts = Contacts {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// True if any side has contact.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Arcade-style kinematic body.
///
/// # Example
/// ```ignore
/// let platform = RigidBody::new().immovable().without_gravity();
/// let mut hero = RigidBody::new().with_world_bounds();
/// hero.velocity.x = 200.0;
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Anchor position at the start of the current physics step.
    pub prev: Vec2,
    /// Whether global gravity accelerates this body.
    pub allow_gravity: bool,
    /// Immovable bodies are never pushed by separation and do not integrate.
    pub immovable: bool,
    /// Disabled bodies take no part in physics or collision checks.
    pub enabled: bool,
    /// Clamp the body inside the world bounds, raising `blocked` flags.
    pub collide_world_bounds: bool,
    /// Sides in solid contact with another body this frame.
    pub touching: Contacts,
    /// Sides stopped by the world bounds this frame.
    pub blocked: Contacts,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a movable, gravity-affected, enabled body at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            prev: Vec2::ZERO,
            allow_gravity: true,
            immovable: false,
            enabled: true,
            collide_world_bounds: false,
            touching: Contacts::NONE,
            blocked: Contacts::NONE,
        }
    }

    /// Builder: never pushed by separation.
    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    /// Builder: ignore global gravity.
    pub fn without_gravity(mut self) -> Self {
        self.allow_gravity = false;
        self
    }

    /// Builder: keep the body inside the world bounds.
    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    /// Builder: start with the given velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Standing on something solid this frame.
    pub fn is_grounded(&self) -> bool {
        self.touching.down
    }

    /// Contact (solid or world bound) on the right side.
    pub fn stopped_right(&self) -> bool {
        self.touching.right || self.blocked.right
    }

    /// Contact (solid or world bound) on the left side.
    pub fn stopped_left(&self) -> bool {
        self.touching.left || self.blocked.left
    }

    /// Clear all contact flags and remember the step's starting position.
    pub fn begin_step(&mut self, position: Vec2) {
        self.touching = Contacts::NONE;
        self.blocked = Contacts::NONE;
        self.prev = position;
    }

    /// Displacement since [`begin_step`](Self::begin_step).
    pub fn delta(&self, position: Vec2) -> Vec2 {
        position - self.prev
    }
}
