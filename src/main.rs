//! Hop Hero headless runner.
//!
//! A 2D platformer session built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **bevy_math** for vectors
//! - **serde_json** for the level document and scripted input
//!
//! The runner owns no window. It steps the session at a fixed rate for a
//! number of frames, optionally replaying a script of key presses, and logs
//! what happens (HUD changes, sound effects, state transitions).
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and apply CLI overrides
//! 2. Insert resources, observers and lifecycle hooks, then enter `Loading`
//! 3. For each frame: apply scripted input, run the update schedule
//! 4. Stop when the session quits or the frame limit is hit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 1200 --script data/demo_input.json
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use hop_hero::components::dynamictext::DynamicText;
use hop_hero::events::gamestate::GameStateChangedEvent;
use hop_hero::game::{build_update_schedule, setup_world, start_session, step};
use hop_hero::resources::gameconfig::GameConfig;
use hop_hero::resources::gamestate::{GameState, GameStates, NextGameState};
use hop_hero::resources::input::{InputScript, InputState};
use hop_hero::resources::worldsignals::{QUIT_GAME, WorldSignals};
use hop_hero::resources::worldtime::WorldTime;

/// Hop Hero headless session runner
#[derive(Parser)]
#[command(version, about = "Runs a Hop Hero session without a window.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level document, overriding `[level] path`.
    #[arg(long, value_name = "PATH")]
    level: Option<String>,

    /// Frames to simulate before quitting.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// JSON list of scripted key changes.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn load_script(path: &Path) -> Result<InputScript, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read input script '{}': {}", path.display(), e))?;
    InputScript::from_json(&text)
}

fn hud_texts(world: &mut World) -> Vec<String> {
    world
        .query::<&DynamicText>()
        .iter(world)
        .map(|text| text.content.clone())
        .collect()
}

fn request_quit(world: &mut World) {
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Quitting);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if !cli.config.exists() {
        warn!("No config file at {}; using defaults", cli.config.display());
    } else if let Err(e) = config.load_from_file() {
        error!("{}", e);
        std::process::exit(1);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }

    let script = match cli.script.as_deref().map(load_script).transpose() {
        Ok(script) => script.unwrap_or_default(),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting session: level '{}', {} frames at {} fps",
        config.level_path, cli.frames, config.target_fps
    );
    let dt = config.frame_delta();

    let mut world = World::new();
    setup_world(&mut world, config);
    start_session(&mut world);
    let mut update = build_update_schedule();

    let mut reached_playing = false;
    let mut last_hud: Vec<String> = Vec::new();
    for frame in 0..cli.frames {
        script.apply_frame(frame, &mut world.resource_mut::<InputState>());
        step(&mut world, &mut update, dt);

        if *world.resource::<GameState>().get() == GameStates::Playing {
            reached_playing = true;
        }
        let hud = hud_texts(&mut world);
        if hud != last_hud {
            info!("Frame {}: HUD {:?}", frame, hud);
            last_hud = hud;
        }
        if world.resource::<WorldSignals>().has_flag(QUIT_GAME) {
            break;
        }
    }

    if !world.resource::<WorldSignals>().has_flag(QUIT_GAME) {
        request_quit(&mut world);
    }
    let time = world.resource::<WorldTime>();
    info!(
        "Session over after {} frames ({:.2}s simulated)",
        time.frame_count, time.elapsed
    );

    if !reached_playing {
        error!("The session never reached the playing state");
        std::process::exit(1);
    }
}
