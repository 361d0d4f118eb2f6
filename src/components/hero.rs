//! Player character controller.
//!
//! [`Hero`] is a marker composed with a [`RigidBody`], a [`Sprite`] and an
//! [`Animation`](super::animation::Animation). Its operations act on those
//! components directly:
//!
//! - [`Hero::move_towards`] sets horizontal velocity and facing.
//! - [`Hero::jump`] launches the hero upward, only from the ground.
//! - [`Hero::bounce`] gives the small upward kick after a stomp.
//! - [`Hero::animation`] derives the animation state from the body.
//!
//! The per-frame hook lives in [`crate::systems::hero`].

use bevy_ecs::prelude::Component;

use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;

/// Horizontal run speed in pixels per second.
pub const HERO_SPEED: f32 = 200.0;
/// Vertical velocity applied by a jump (negative is up).
pub const HERO_JUMP_SPEED: f32 = -600.0;
/// Vertical velocity applied by a bounce.
pub const HERO_BOUNCE_SPEED: f32 = -200.0;

/// Marker for the player entity. Exactly one per session.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Hero;

/// Requested horizontal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Stop,
    Right,
}

impl MoveDirection {
    /// -1, 0 or 1.
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Stop => 0.0,
            MoveDirection::Right => 1.0,
        }
    }
}

/// Animation state derived from the hero's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAnimation {
    Stop,
    Run,
    Jump,
    Fall,
}

impl HeroAnimation {
    /// Key of the matching definition in the animation store.
    pub fn key(self) -> &'static str {
        match self {
            HeroAnimation::Stop => "hero:stop",
            HeroAnimation::Run => "hero:run",
            HeroAnimation::Jump => "hero:jump",
            HeroAnimation::Fall => "hero:fall",
        }
    }
}

impl Hero {
    /// Set horizontal velocity to `direction * HERO_SPEED`. A nonzero
    /// direction also turns the sprite to face it; stopping keeps the facing.
    pub fn move_towards(body: &mut RigidBody, sprite: &mut Sprite, direction: MoveDirection) {
        body.velocity.x = direction.sign() * HERO_SPEED;
        match direction {
            MoveDirection::Left => sprite.flip_h = true,
            MoveDirection::Right => sprite.flip_h = false,
            MoveDirection::Stop => {}
        }
    }

    /// Jump if standing on something. Returns whether the jump happened; an
    /// airborne hero is left untouched.
    pub fn jump(body: &mut RigidBody) -> bool {
        if !body.is_grounded() {
            return false;
        }
        body.velocity.y = HERO_JUMP_SPEED;
        true
    }

    /// Upward kick after stomping an enemy, grounded or not.
    pub fn bounce(body: &mut RigidBody) {
        body.velocity.y = HERO_BOUNCE_SPEED;
    }

    /// Animation for the current body state. Rising wins over everything,
    /// then airborne, then horizontal motion.
    pub fn animation(body: &RigidBody) -> HeroAnimation {
        if body.velocity.y < 0.0 {
            HeroAnimation::Jump
        } else if !body.is_grounded() {
            HeroAnimation::Fall
        } else if body.velocity.x != 0.0 {
            HeroAnimation::Run
        } else {
            HeroAnimation::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Vec2;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn hero_sprite() -> Sprite {
        Sprite::new("hero", Vec2::new(36.0, 42.0), Vec2::splat(0.5))
    }

    fn grounded_body() -> RigidBody {
        let mut body = RigidBody::new();
        body.touching.down = true;
        body
    }

    // ==================== MOVE TESTS ====================

    #[test]
    fn test_move_sets_velocity_for_each_direction() {
        let mut body = RigidBody::new();
        let mut sprite = hero_sprite();
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Left);
        assert!(approx_eq(body.velocity.x, -200.0));
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Right);
        assert!(approx_eq(body.velocity.x, 200.0));
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Stop);
        assert!(approx_eq(body.velocity.x, 0.0));
    }

    #[test]
    fn test_move_facing_follows_direction_and_survives_stop() {
        let mut body = RigidBody::new();
        let mut sprite = hero_sprite();
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Left);
        assert!(sprite.flip_h);
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Stop);
        assert!(sprite.flip_h, "stopping keeps the last facing");
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Right);
        assert!(!sprite.flip_h);
    }

    #[test]
    fn test_move_does_not_touch_vertical_velocity() {
        let mut body = RigidBody::new().with_velocity(Vec2::new(0.0, 123.0));
        let mut sprite = hero_sprite();
        Hero::move_towards(&mut body, &mut sprite, MoveDirection::Right);
        assert!(approx_eq(body.velocity.y, 123.0));
    }

    // ==================== JUMP TESTS ====================

    #[test]
    fn test_jump_from_ground() {
        let mut body = grounded_body();
        assert!(Hero::jump(&mut body));
        assert!(approx_eq(body.velocity.y, -600.0));
    }

    #[test]
    fn test_jump_rejected_in_air() {
        let mut body = RigidBody::new().with_velocity(Vec2::new(50.0, 80.0));
        assert!(!Hero::jump(&mut body));
        assert!(approx_eq(body.velocity.x, 50.0));
        assert!(approx_eq(body.velocity.y, 80.0));
    }

    #[test]
    fn test_jump_is_not_cumulative() {
        let mut body = grounded_body();
        assert!(Hero::jump(&mut body));
        assert!(Hero::jump(&mut body));
        assert!(approx_eq(body.velocity.y, -600.0));
    }

    #[test]
    fn test_blocked_down_is_not_grounded() {
        let mut body = RigidBody::new();
        body.blocked.down = true;
        assert!(!Hero::jump(&mut body));
    }

    // ==================== BOUNCE TESTS ====================

    #[test]
    fn test_bounce_is_unconditional() {
        let mut body = RigidBody::new().with_velocity(Vec2::new(0.0, 300.0));
        Hero::bounce(&mut body);
        assert!(approx_eq(body.velocity.y, -200.0));
        let mut grounded = grounded_body();
        Hero::bounce(&mut grounded);
        assert!(approx_eq(grounded.velocity.y, -200.0));
    }

    // ==================== ANIMATION TESTS ====================

    #[test]
    fn test_animation_rising_is_jump_even_when_grounded() {
        let mut body = grounded_body();
        body.velocity = Vec2::new(200.0, -10.0);
        assert_eq!(Hero::animation(&body), HeroAnimation::Jump);
    }

    #[test]
    fn test_animation_airborne_is_fall() {
        let body = RigidBody::new().with_velocity(Vec2::new(200.0, 0.0));
        assert_eq!(Hero::animation(&body), HeroAnimation::Fall);
        let body = RigidBody::new().with_velocity(Vec2::new(0.0, 300.0));
        assert_eq!(Hero::animation(&body), HeroAnimation::Fall);
    }

    #[test]
    fn test_animation_grounded_run_and_stop() {
        let mut body = grounded_body();
        body.velocity.x = -200.0;
        assert_eq!(Hero::animation(&body), HeroAnimation::Run);
        body.velocity.x = 0.0;
        assert_eq!(Hero::animation(&body), HeroAnimation::Stop);
    }

    #[test]
    fn test_animation_keys() {
        assert_eq!(HeroAnimation::Stop.key(), "hero:stop");
        assert_eq!(HeroAnimation::Run.key(), "hero:run");
        assert_eq!(HeroAnimation::Jump.key(), "hero:jump");
        assert_eq!(HeroAnimation::Fall.key(), "hero:fall");
    }
}
