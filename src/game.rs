//! Session lifecycle, level construction and frame wiring.
//!
//! Lifecycle hooks (run by the game state observer, see
//! [`crate::events::gamestate`]):
//!
//! - [`init`] binds input, registers the jump handler, zeroes the coin count.
//! - [`preload`] declares assets and loads the level document.
//! - [`create`] spawns the level, sets gravity and builds the HUD.
//! - [`shutdown`] despawns the session and resets the signals.
//! - [`quit_game`] asks the host loop to stop.
//!
//! [`update`] is the session's per-frame hook. [`setup_world`],
//! [`start_session`], [`build_update_schedule`] and [`step`] are what a host
//! (the headless runner, tests) needs to drive a session.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use log::{error, info, warn};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::dead::Dead;
use crate::components::dynamictext::DynamicText;
use crate::components::group::{
    BACKGROUND, COINS, DECORATION, ENEMY_WALLS, HANDLERS, HERO, HUD, Group, PLATFORMS, SPIDERS,
};
use crate::components::hero::{Hero, HeroAnimation, MoveDirection};
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::signalbinding::SignalBinding;
use crate::components::spider::{SPIDER_CRAWL, Spider};
use crate::components::sprite::Sprite;
use crate::events::animation::animation_ended_observer;
use crate::events::audio::AudioCmd;
use crate::events::collision::overlap_observer;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::input::on_jump_pressed;
use crate::resources::animationstore::{AnimationStore, COIN_ROTATE};
use crate::resources::assets::{
    AssetCache, AssetManifest, FONT_NUMBERS, ICON_COIN, INVISIBLE_WALL, LEVEL_KEY,
};
use crate::resources::collisionrules::CollisionRules;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::level::{LevelData, PlatformDef, Spawn};
use crate::resources::physics::ArcadePhysics;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::{COIN_COUNT, QUIT_GAME, SESSIONS_ENDED, WorldSignals};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::{log_audio_cmds, update_audio_cmds};
use crate::systems::collision::collision_system;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::hero::hero_update;
use crate::systems::input::{emit_input_events, end_input_frame};
use crate::systems::movement::physics_pre_update;
use crate::systems::signalbinding::update_signal_bindings;
use crate::systems::spider::spider_update;
use crate::systems::time::update_world_time;

/// Where the HUD sits on screen.
const HUD_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Entities spawned by [`build_level`], for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSummary {
    pub platforms: usize,
    pub enemy_walls: usize,
    pub spiders: usize,
    pub coins: usize,
}

// ==================== LIFECYCLE HOOKS ====================

pub fn init(
    mut commands: Commands,
    input: Option<Res<InputState>>,
    mut signals: ResMut<WorldSignals>,
) {
    if input.is_none() {
        commands.insert_resource(InputState::default());
    }
    commands.spawn((Observer::new(on_jump_pressed), Group::new(HANDLERS)));
    signals.set_integer(COIN_COUNT, 0);
    info!("Session initialised");
}

pub fn preload(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut cache: ResMut<AssetCache>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let manifest = AssetManifest::platformer(&config.level_path);
    for entry in manifest.audio_entries() {
        audio.write(AudioCmd::LoadFx {
            id: entry.key.clone(),
            path: entry.path.clone(),
        });
    }

    match cache.load_missing(&manifest, &config.assets_root) {
        Ok(read) => {
            info!(
                "Preloaded {} assets ({} documents read from disk)",
                manifest.entries().len(),
                read
            );
            next_state.set(GameStates::Playing);
        }
        Err(e) => {
            error!("Preload failed: {}", e);
            next_state.set(GameStates::Quitting);
        }
    }
    commands.insert_resource(manifest);
}

pub fn create(
    mut commands: Commands,
    cache: Res<AssetCache>,
    manifest: Option<Res<AssetManifest>>,
    config: Res<GameConfig>,
    mut physics: ResMut<ArcadePhysics>,
    mut signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
) {
    let Some(manifest) = manifest else {
        warn!("create ran before preload; no asset manifest");
        next_state.set(GameStates::Quitting);
        return;
    };
    let built = cache.parse::<LevelData>(LEVEL_KEY).and_then(|level| {
        let summary = build_level(&mut commands, &manifest, &level, &mut signals)?;
        create_hud(&mut commands, &manifest)?;
        Ok(summary)
    });
    match built {
        Ok(summary) => {
            physics.gravity = Vec2::new(0.0, config.gravity);
            info!(
                "Level created: {} platforms, {} enemy walls, {} spiders, {} coins",
                summary.platforms, summary.enemy_walls, summary.spiders, summary.coins
            );
        }
        Err(e) => {
            error!("Failed to create level: {}", e);
            next_state.set(GameStates::Quitting);
        }
    }
}

pub fn shutdown(
    mut commands: Commands,
    entities: Query<Entity, (With<Group>, Without<Persistent>)>,
    mut signals: ResMut<WorldSignals>,
) {
    let mut despawned = 0;
    for entity in entities.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    let sessions = signals.get_integer(SESSIONS_ENDED).unwrap_or(0) + 1;
    *signals = WorldSignals::default();
    signals.set_integer(SESSIONS_ENDED, sessions);
    info!("Session shut down, {} entities despawned", despawned);
}

pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    signals.set_flag(QUIT_GAME);
}

/// Session per-frame hook: held run keys drive the hero.
pub fn update(
    input: Res<InputState>,
    mut heroes: Query<(&mut RigidBody, &mut Sprite), (With<Hero>, Without<Dead>)>,
) {
    let direction = held_direction(&input);
    for (mut body, mut sprite) in heroes.iter_mut() {
        Hero::move_towards(&mut body, &mut sprite, direction);
    }
}

/// Left wins over right when both are held.
pub fn held_direction(input: &InputState) -> MoveDirection {
    if input.left.active {
        MoveDirection::Left
    } else if input.right.active {
        MoveDirection::Right
    } else {
        MoveDirection::Stop
    }
}

// ==================== LEVEL CONSTRUCTION ====================

/// Spawn every entity the level document declares.
pub fn build_level(
    commands: &mut Commands,
    manifest: &AssetManifest,
    level: &LevelData,
    signals: &mut WorldSignals,
) -> Result<LevelSummary, String> {
    let mut summary = LevelSummary::default();

    let background = manifest.require_frame_size("background")?;
    commands.spawn((
        Group::new(BACKGROUND),
        MapPosition::new(0.0, 0.0),
        Sprite::new("background", background, Vec2::ZERO),
    ));

    for platform in &level.platforms {
        spawn_platform(commands, manifest, platform)?;
        summary.platforms += 1;
        summary.enemy_walls += 2;
    }

    let hero = spawn_hero(commands, manifest, level.hero)?;
    signals.set_entity(HERO, hero);

    for spider in &level.spiders {
        spawn_spider(commands, manifest, *spider)?;
        summary.spiders += 1;
    }
    for coin in &level.coins {
        spawn_coin(commands, manifest, *coin)?;
        summary.coins += 1;
    }

    let door = spawn_prop(commands, manifest, "door", level.door, Vec2::new(0.5, 1.0))?;
    signals.set_entity("door", door);
    let key = spawn_prop(commands, manifest, "key", level.key, CENTER)?;
    signals.set_entity("key", key);

    Ok(summary)
}

/// Solid platform at its top-left corner, flanked by an enemy wall on each
/// side standing on the platform's edge.
fn spawn_platform(
    commands: &mut Commands,
    manifest: &AssetManifest,
    def: &PlatformDef,
) -> Result<Entity, String> {
    let size = manifest.require_frame_size(&def.image)?;
    let wall_size = manifest.require_frame_size(INVISIBLE_WALL)?;
    let platform = commands
        .spawn((
            Group::new(PLATFORMS),
            MapPosition::new(def.x, def.y),
            Sprite::new(def.image.clone(), size, Vec2::ZERO),
            RigidBody::new().immovable().without_gravity(),
            BoxCollider::new(size.x, size.y),
        ))
        .id();
    spawn_enemy_wall(commands, wall_size, def.pos(), Vec2::new(1.0, 1.0));
    spawn_enemy_wall(
        commands,
        wall_size,
        def.pos() + Vec2::new(size.x, 0.0),
        Vec2::new(0.0, 1.0),
    );
    Ok(platform)
}

fn spawn_enemy_wall(commands: &mut Commands, size: Vec2, pos: Vec2, anchor: Vec2) -> Entity {
    commands
        .spawn((
            Group::new(ENEMY_WALLS),
            MapPosition { pos },
            Sprite::new(INVISIBLE_WALL, size, anchor).hidden(),
            RigidBody::new().immovable().without_gravity(),
            BoxCollider::anchored(size, anchor),
        ))
        .id()
}

fn spawn_hero(
    commands: &mut Commands,
    manifest: &AssetManifest,
    at: Spawn,
) -> Result<Entity, String> {
    let size = manifest.require_frame_size("hero")?;
    Ok(commands
        .spawn((
            Hero,
            Group::new(HERO),
            MapPosition::new(at.x, at.y),
            Sprite::new("hero", size, CENTER),
            Animation::new(HeroAnimation::Stop.key()),
            RigidBody::new().with_world_bounds(),
            BoxCollider::anchored(size, CENTER),
        ))
        .id())
}

fn spawn_spider(
    commands: &mut Commands,
    manifest: &AssetManifest,
    at: Spawn,
) -> Result<Entity, String> {
    let size = manifest.require_frame_size("spider")?;
    Ok(commands
        .spawn((
            Spider,
            Group::new(SPIDERS),
            MapPosition::new(at.x, at.y),
            Sprite::new("spider", size, CENTER),
            Animation::new(SPIDER_CRAWL),
            Spider::spawn_body(),
            BoxCollider::anchored(size, CENTER),
        ))
        .id())
}

fn spawn_coin(
    commands: &mut Commands,
    manifest: &AssetManifest,
    at: Spawn,
) -> Result<Entity, String> {
    let size = manifest.require_frame_size("coin")?;
    Ok(commands
        .spawn((
            Group::new(COINS),
            MapPosition::new(at.x, at.y),
            Sprite::new("coin", size, CENTER),
            Animation::new(COIN_ROTATE),
            RigidBody::new().without_gravity(),
            BoxCollider::anchored(size, CENTER),
        ))
        .id())
}

/// Gravity-free level prop that no collision rule mentions.
fn spawn_prop(
    commands: &mut Commands,
    manifest: &AssetManifest,
    tex_key: &'static str,
    at: Spawn,
    anchor: Vec2,
) -> Result<Entity, String> {
    let size = manifest.require_frame_size(tex_key)?;
    Ok(commands
        .spawn((
            Group::new(DECORATION),
            MapPosition::new(at.x, at.y),
            Sprite::new(tex_key, size, anchor),
            RigidBody::new().without_gravity(),
            BoxCollider::anchored(size, anchor),
        ))
        .id())
}

/// Coin icon in the top-left corner with the bound counter right of it.
fn create_hud(commands: &mut Commands, manifest: &AssetManifest) -> Result<(), String> {
    let icon = manifest.require_frame_size(ICON_COIN)?;
    manifest.require_frame_size(FONT_NUMBERS)?;
    commands.spawn((
        Group::new(HUD),
        ScreenPosition::new(HUD_ORIGIN.x, HUD_ORIGIN.y),
        Sprite::new(ICON_COIN, icon, Vec2::ZERO),
    ));
    commands.spawn((
        Group::new(HUD),
        ScreenPosition::new(HUD_ORIGIN.x + icon.x, HUD_ORIGIN.y + icon.y * 0.5),
        DynamicText::new("x0", FONT_NUMBERS),
        SignalBinding::new(COIN_COUNT).with_format("x{}"),
    ));
    Ok(())
}

// ==================== HOST WIRING ====================

fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    // Registered systems are entities; keep them across restarts.
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

/// Insert the session's resources, global observers and lifecycle hooks.
///
/// An [`AssetCache`] already present (e.g. holding an embedded level) is kept.
pub fn setup_world(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(ArcadePhysics::new(
        config.world_width as f32,
        config.world_height as f32,
    ));
    world.insert_resource(AnimationStore::platformer());
    world.insert_resource(CollisionRules::platformer());
    if !world.contains_resource::<AssetCache>() {
        world.insert_resource(AssetCache::new());
    }
    world.init_resource::<Messages<AudioCmd>>();
    world.insert_resource(config);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(overlap_observer), Persistent));
    world.spawn((Observer::new(animation_ended_observer), Persistent));

    let mut systems_store = SystemsStore::new();
    register_hook(world, &mut systems_store, "init", init);
    register_hook(world, &mut systems_store, "preload", preload);
    register_hook(world, &mut systems_store, "create", create);
    register_hook(world, &mut systems_store, "shutdown", shutdown);
    register_hook(world, &mut systems_store, "quit_game", quit_game);
    world.insert_resource(systems_store);

    world.flush();
}

/// Enter the loading state right away, running `init` and `preload`.
pub fn start_session(world: &mut World) {
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Loading);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// One frame, in order: audio queue, input edges, pending state change,
/// physics, collisions, hero input, controllers, animation, HUD.
pub fn build_update_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_audio_cmds,
            emit_input_events,
            check_pending_state,
            physics_pre_update.run_if(state_is_playing),
            collision_system.run_if(state_is_playing),
            update.run_if(state_is_playing),
            hero_update.run_if(state_is_playing),
            spider_update.run_if(state_is_playing),
            animation,
            update_signal_bindings,
            log_audio_cmds,
            end_input_frame,
        )
            .chain(),
    );
    schedule
}

/// Advance the session by `dt` seconds.
pub fn step(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
