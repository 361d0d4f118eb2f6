//! Physics integration tests for gravity, platforms, enemy walls and world
//! bounds, run through the full session frame schedule.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;

use hop_hero::components::animation::Animation;
use hop_hero::components::hero::Hero;
use hop_hero::components::mapposition::MapPosition;
use hop_hero::components::rigidbody::RigidBody;
use hop_hero::components::spider::Spider;
use hop_hero::components::sprite::Sprite;
use hop_hero::events::input::InputAction;
use hop_hero::game::{build_update_schedule, setup_world, start_session, step};
use hop_hero::resources::assets::{AssetCache, LEVEL_KEY};
use hop_hero::resources::gameconfig::GameConfig;
use hop_hero::resources::input::InputState;
use hop_hero::resources::physics::ArcadePhysics;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Hero dropped from mid-air above the ground; a spider on a short grass
/// platform well away from it.
const LEVEL: &str = r#"{
    "hero": { "x": 100, "y": 400 },
    "door": { "x": 900, "y": 546 },
    "key": { "x": 900, "y": 100 },
    "platforms": [
        { "image": "ground", "x": 0, "y": 546 },
        { "image": "grass:2x1", "x": 300, "y": 300 }
    ],
    "spiders": [ { "x": 342, "y": 284 } ]
}"#;

fn start(level: &str) -> (World, Schedule) {
    let mut world = World::new();
    let mut cache = AssetCache::new();
    cache.insert_json(LEVEL_KEY, level);
    world.insert_resource(cache);
    setup_world(&mut world, GameConfig::new());
    start_session(&mut world);
    let mut schedule = build_update_schedule();
    step(&mut world, &mut schedule, DT);
    (world, schedule)
}

fn tick(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        step(world, schedule, DT);
    }
}

fn single<T: Component>(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<T>>()
        .single(world)
        .unwrap()
}

// ==================== GRAVITY TESTS ====================

#[test]
fn create_sets_configured_gravity() {
    let (world, _) = start(LEVEL);
    let physics = world.resource::<ArcadePhysics>();
    assert!(approx_eq(physics.gravity.x, 0.0));
    assert!(approx_eq(physics.gravity.y, 1200.0));
    assert_eq!(physics.bounds.max, Vec2::new(960.0, 600.0));
}

#[test]
fn hero_falls_then_lands_on_ground() {
    let (mut world, mut schedule) = start(LEVEL);
    let hero = single::<Hero>(&mut world);

    tick(&mut world, &mut schedule, 10);
    let body = world.get::<RigidBody>(hero).unwrap();
    assert!(body.velocity.y > 0.0);
    assert!(!body.is_grounded());
    assert_eq!(world.get::<Animation>(hero).unwrap().animation_key, "hero:fall");

    tick(&mut world, &mut schedule, 50);
    let body = world.get::<RigidBody>(hero).unwrap();
    assert!(body.touching.down);
    assert!(approx_eq(body.velocity.y, 0.0));
    let pos = world.get::<MapPosition>(hero).unwrap().pos;
    assert!((pos.y - 525.0).abs() < 0.5);
    assert!(approx_eq(pos.x, 100.0));
    assert_eq!(world.get::<Animation>(hero).unwrap().animation_key, "hero:stop");
}

// ==================== HERO MOVEMENT TESTS ====================

#[test]
fn held_right_runs_and_faces_right() {
    let (mut world, mut schedule) = start(LEVEL);
    tick(&mut world, &mut schedule, 60);
    let hero = single::<Hero>(&mut world);

    world.resource_mut::<InputState>().press(InputAction::Right);
    tick(&mut world, &mut schedule, 1);
    assert!(approx_eq(world.get::<RigidBody>(hero).unwrap().velocity.x, 200.0));
    assert_eq!(world.get::<Animation>(hero).unwrap().animation_key, "hero:run");
    assert!(!world.get::<Sprite>(hero).unwrap().flip_h);

    tick(&mut world, &mut schedule, 30);
    let x = world.get::<MapPosition>(hero).unwrap().pos.x;
    assert!((x - 200.0).abs() < 1.0);

    world.resource_mut::<InputState>().release(InputAction::Right);
    tick(&mut world, &mut schedule, 1);
    assert!(approx_eq(world.get::<RigidBody>(hero).unwrap().velocity.x, 0.0));
    assert_eq!(world.get::<Animation>(hero).unwrap().animation_key, "hero:stop");
    assert!(!world.get::<Sprite>(hero).unwrap().flip_h);
}

#[test]
fn left_wins_and_world_edge_blocks() {
    let (mut world, mut schedule) = start(LEVEL);
    tick(&mut world, &mut schedule, 60);
    let hero = single::<Hero>(&mut world);

    {
        let mut input = world.resource_mut::<InputState>();
        input.press(InputAction::Right);
        input.press(InputAction::Left);
    }
    tick(&mut world, &mut schedule, 60);

    assert!(world.get::<Sprite>(hero).unwrap().flip_h);
    let pos = world.get::<MapPosition>(hero).unwrap().pos;
    // 36px wide hero centred on its position
    assert!(approx_eq(pos.x, 18.0));
    let body = world.get::<RigidBody>(hero).unwrap();
    assert!(body.blocked.left);
    assert!(body.stopped_left());
}

// ==================== SPIDER PATROL TESTS ====================

#[test]
fn spider_rests_on_its_platform() {
    let (mut world, mut schedule) = start(LEVEL);
    let spider = single::<Spider>(&mut world);
    tick(&mut world, &mut schedule, 5);
    let body = world.get::<RigidBody>(spider).unwrap();
    assert!(body.touching.down);
    assert!((world.get::<MapPosition>(spider).unwrap().pos.y - 284.0).abs() < 0.5);
}

#[test]
fn spider_oscillates_between_enemy_walls() {
    let (mut world, mut schedule) = start(LEVEL);
    let spider = single::<Spider>(&mut world);

    let mut reversals = 0;
    let mut heading = world.get::<RigidBody>(spider).unwrap().velocity.x;
    for _ in 0..600 {
        tick(&mut world, &mut schedule, 1);
        let pos = world.get::<MapPosition>(spider).unwrap().pos;
        // walls stand at x=300 and x=384; the spider is 42px wide
        assert!(pos.x >= 300.0 - 5.0 + 21.0 - 0.5, "left of wall: {}", pos.x);
        assert!(pos.x <= 384.0 + 5.0 - 21.0 + 0.5, "right of wall: {}", pos.x);
        assert!((pos.y - 284.0).abs() < 0.5);

        let vx = world.get::<RigidBody>(spider).unwrap().velocity.x;
        assert!(approx_eq(vx.abs(), 100.0));
        if vx.signum() != heading.signum() {
            reversals += 1;
            heading = vx;
        }
    }
    // 42px of travel each way at 100px/s
    assert!(reversals >= 10, "only {} reversals", reversals);
    assert_eq!(
        world.get::<Animation>(spider).unwrap().animation_key,
        "spider:crawl"
    );
}
