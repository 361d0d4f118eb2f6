//! Rule-driven collision detection and solid separation.
//!
//! [`collision_system`] walks [`CollisionRules`] in order. For every pair of
//! live, enabled bodies from the rule's two groups whose boxes intersect:
//!
//! - `Collide` rules push the bodies apart with [`separate`] and raise the
//!   `touching` flags the controllers read;
//! - `Overlap` rules trigger an [`OverlapEvent`] for the session handlers.
//!
//! Later rules see the positions earlier rules produced.
//!
//! # Separation
//!
//! Vertical first, then horizontal if the boxes still intersect. On each axis
//! the side of contact is picked from the bodies' relative frame delta, and
//! overlaps deeper than both deltas plus [`OVERLAP_BIAS`] are ignored so that
//! a body resting beside a tall platform is not teleported on top of it.
use bevy_ecs::prelude::*;
use bevy_math::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::dead::Dead;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::OverlapEvent;
use crate::resources::collisionrules::{CollisionResponse, CollisionRules};

/// Extra penetration (pixels) tolerated beyond the frame deltas.
pub const OVERLAP_BIAS: f32 = 4.0;

type BodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Group,
        &'static mut MapPosition,
        &'static mut RigidBody,
        &'static BoxCollider,
    ),
    Without<Dead>,
>;

/// Working copy of one body during separation.
#[derive(Debug, Clone)]
pub struct SolidBody {
    pub pos: Vec2,
    pub body: RigidBody,
    pub collider: BoxCollider,
}

impl SolidBody {
    pub fn new(pos: Vec2, body: RigidBody, collider: BoxCollider) -> Self {
        Self {
            pos,
            body,
            collider,
        }
    }

    fn read(bodies: &BodyQuery, entity: Entity) -> Option<Self> {
        let (_, _, position, body, collider) = bodies.get(entity).ok()?;
        Some(Self::new(position.pos, body.clone(), *collider))
    }

    fn write(self, bodies: &mut BodyQuery, entity: Entity) {
        if let Ok((_, _, mut position, mut body, _)) = bodies.get_mut(entity) {
            position.pos = self.pos;
            *body = self.body;
        }
    }

    fn min(&self) -> Vec2 {
        self.collider.aabb(self.pos).0
    }

    fn max(&self) -> Vec2 {
        self.collider.aabb(self.pos).1
    }

    fn delta(&self) -> Vec2 {
        self.body.delta(self.pos)
    }

    pub fn intersects(&self, other: &SolidBody) -> bool {
        self.collider
            .overlaps(self.pos, &other.collider, other.pos)
    }
}

/// Resolve a solid contact between two intersecting bodies. Returns whether
/// either axis produced a contact.
pub fn separate(a: &mut SolidBody, b: &mut SolidBody) -> bool {
    let vertical = separate_y(a, b);
    let horizontal = a.intersects(b) && separate_x(a, b);
    vertical || horizontal
}

fn separate_y(a: &mut SolidBody, b: &mut SolidBody) -> bool {
    let delta_a = a.delta().y;
    let delta_b = b.delta().y;
    let max_overlap = delta_a.abs() + delta_b.abs() + OVERLAP_BIAS;

    let overlap = if delta_a > delta_b {
        // a came down onto b
        let overlap = a.max().y - b.min().y;
        if overlap > max_overlap {
            return false;
        }
        a.body.touching.down = true;
        b.body.touching.up = true;
        overlap
    } else if delta_a < delta_b {
        // a came up into b
        let overlap = a.min().y - b.max().y;
        if -overlap > max_overlap {
            return false;
        }
        a.body.touching.up = true;
        b.body.touching.down = true;
        overlap
    } else {
        return false;
    };

    let velocity_a = a.body.velocity.y;
    let velocity_b = b.body.velocity.y;
    match (a.body.immovable, b.body.immovable) {
        (false, false) => {
            a.pos.y -= overlap * 0.5;
            b.pos.y += overlap * 0.5;
            let average = (velocity_a + velocity_b) * 0.5;
            a.body.velocity.y = average;
            b.body.velocity.y = average;
        }
        (false, true) => {
            a.pos.y -= overlap;
            a.body.velocity.y = velocity_b;
        }
        (true, false) => {
            b.pos.y += overlap;
            b.body.velocity.y = velocity_a;
        }
        (true, true) => {}
    }
    true
}

fn separate_x(a: &mut SolidBody, b: &mut SolidBody) -> bool {
    let delta_a = a.delta().x;
    let delta_b = b.delta().x;
    let max_overlap = delta_a.abs() + delta_b.abs() + OVERLAP_BIAS;

    let overlap = if delta_a > delta_b {
        let overlap = a.max().x - b.min().x;
        if overlap > max_overlap {
            return false;
        }
        a.body.touching.right = true;
        b.body.touching.left = true;
        overlap
    } else if delta_a < delta_b {
        let overlap = a.min().x - b.max().x;
        if -overlap > max_overlap {
            return false;
        }
        a.body.touching.left = true;
        b.body.touching.right = true;
        overlap
    } else {
        return false;
    };

    let velocity_a = a.body.velocity.x;
    let velocity_b = b.body.velocity.x;
    match (a.body.immovable, b.body.immovable) {
        (false, false) => {
            a.pos.x -= overlap * 0.5;
            b.pos.x += overlap * 0.5;
            let average = (velocity_a + velocity_b) * 0.5;
            a.body.velocity.x = average;
            b.body.velocity.x = average;
        }
        (false, true) => {
            a.pos.x -= overlap;
            a.body.velocity.x = velocity_b;
        }
        (true, false) => {
            b.pos.x += overlap;
            b.body.velocity.x = velocity_a;
        }
        (true, true) => {}
    }
    true
}

fn live_members(bodies: &BodyQuery, group: &str) -> Vec<Entity> {
    bodies
        .iter()
        .filter(|(_, g, _, body, _)| g.name() == group && body.enabled)
        .map(|(entity, ..)| entity)
        .collect()
}

pub fn collision_system(
    rules: Res<CollisionRules>,
    mut bodies: BodyQuery,
    mut commands: Commands,
) {
    for rule in rules.rules.iter() {
        let group_a = live_members(&bodies, rule.group_a);
        let group_b = live_members(&bodies, rule.group_b);

        for &entity_a in &group_a {
            for &entity_b in &group_b {
                if entity_a == entity_b {
                    continue;
                }
                let (Some(mut a), Some(mut b)) = (
                    SolidBody::read(&bodies, entity_a),
                    SolidBody::read(&bodies, entity_b),
                ) else {
                    continue;
                };
                if !a.intersects(&b) {
                    continue;
                }
                match rule.response {
                    CollisionResponse::Collide => {
                        if separate(&mut a, &mut b) {
                            a.write(&mut bodies, entity_a);
                            b.write(&mut bodies, entity_b);
                        }
                    }
                    CollisionResponse::Overlap(handler) => {
                        commands.trigger(OverlapEvent {
                            handler,
                            a: entity_a,
                            b: entity_b,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Body whose previous position is `prev` and current position `pos`.
    fn moving(prev: Vec2, pos: Vec2, size: Vec2, anchor: Vec2, velocity: Vec2) -> SolidBody {
        let mut body = RigidBody::new().with_velocity(velocity);
        body.begin_step(prev);
        SolidBody::new(pos, body, BoxCollider::anchored(size, anchor))
    }

    fn platform(top_left: Vec2, size: Vec2) -> SolidBody {
        let mut body = RigidBody::new().immovable().without_gravity();
        body.begin_step(top_left);
        SolidBody::new(top_left, body, BoxCollider::new(size.x, size.y))
    }

    // ==================== VERTICAL TESTS ====================

    #[test]
    fn test_landing_on_platform() {
        // hero 36x42 centred, bottom sank 2px into a platform at y=546
        let mut hero = moving(
            Vec2::new(100.0, 522.0),
            Vec2::new(100.0, 527.0),
            Vec2::new(36.0, 42.0),
            Vec2::splat(0.5),
            Vec2::new(0.0, 300.0),
        );
        let mut ground = platform(Vec2::new(0.0, 546.0), Vec2::new(960.0, 42.0));
        assert!(hero.intersects(&ground));
        assert!(separate(&mut hero, &mut ground));
        assert!(hero.body.touching.down);
        assert!(ground.body.touching.up);
        assert!(approx_eq(hero.pos.y, 525.0));
        assert!(approx_eq(hero.body.velocity.y, 0.0));
        assert_eq!(ground.pos, Vec2::new(0.0, 546.0));
        assert!(!hero.intersects(&ground));
    }

    #[test]
    fn test_head_bump_from_below() {
        let mut hero = moving(
            Vec2::new(100.0, 405.0),
            Vec2::new(100.0, 398.0),
            Vec2::new(36.0, 42.0),
            Vec2::splat(0.5),
            Vec2::new(0.0, -420.0),
        );
        let mut ledge = platform(Vec2::new(50.0, 336.0), Vec2::new(168.0, 42.0));
        assert!(separate(&mut hero, &mut ledge));
        assert!(hero.body.touching.up);
        assert!(!hero.body.touching.down);
        assert!(approx_eq(hero.pos.y, 399.0));
        assert!(approx_eq(hero.body.velocity.y, 0.0));
    }

    // ==================== HORIZONTAL TESTS ====================

    #[test]
    fn test_walking_into_platform_side() {
        // bottom far below the platform top: the vertical pass must not snap
        // the hero on top, the horizontal pass pushes it back
        let mut hero = moving(
            Vec2::new(30.0, 525.0),
            Vec2::new(33.0, 525.3),
            Vec2::new(36.0, 42.0),
            Vec2::splat(0.5),
            Vec2::new(200.0, 20.0),
        );
        let mut block = platform(Vec2::new(50.0, 504.0), Vec2::new(42.0, 42.0));
        assert!(separate(&mut hero, &mut block));
        assert!(hero.body.touching.right);
        assert!(!hero.body.touching.down);
        assert!(approx_eq(hero.pos.x, 32.0));
        assert!(approx_eq(hero.body.velocity.x, 0.0));
    }

    #[test]
    fn test_spider_meets_enemy_wall() {
        // spider resting on its platform, crawling right into the right wall
        let mut spider = moving(
            Vec2::new(362.0, 284.0),
            Vec2::new(363.7, 284.0),
            Vec2::new(42.0, 32.0),
            Vec2::splat(0.5),
            Vec2::new(100.0, 0.0),
        );
        let wall_size = Vec2::new(5.0, 42.0);
        let mut body = RigidBody::new().immovable().without_gravity();
        body.begin_step(Vec2::new(384.0, 300.0));
        let mut wall = SolidBody::new(
            Vec2::new(384.0, 300.0),
            body,
            BoxCollider::anchored(wall_size, Vec2::new(0.0, 1.0)),
        );
        assert!(spider.intersects(&wall));
        assert!(separate(&mut spider, &mut wall));
        assert!(spider.body.touching.right);
        assert!(!spider.body.touching.down);
        assert!(approx_eq(spider.pos.x, 363.0));
    }

    // ==================== GUARD TESTS ====================

    #[test]
    fn test_deep_overlap_is_ignored() {
        let mut hero = moving(
            Vec2::new(100.0, 300.0),
            Vec2::new(100.0, 300.0),
            Vec2::new(36.0, 42.0),
            Vec2::splat(0.5),
            Vec2::ZERO,
        );
        let mut block = platform(Vec2::new(90.0, 290.0), Vec2::new(20.0, 20.0));
        assert!(hero.intersects(&block));
        assert!(!separate(&mut hero, &mut block));
        assert!(!hero.body.touching.any());
    }

    #[test]
    fn test_two_movable_bodies_share_the_push() {
        let mut a = moving(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            Vec2::new(120.0, 0.0),
        );
        let mut b = moving(
            Vec2::new(12.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            Vec2::new(-120.0, 0.0),
        );
        assert!(separate(&mut a, &mut b));
        assert!(approx_eq(a.pos.x, 1.0));
        assert!(approx_eq(b.pos.x, 11.0));
        assert!(approx_eq(a.body.velocity.x, 0.0));
        assert!(approx_eq(b.body.velocity.x, 0.0));
    }
}
