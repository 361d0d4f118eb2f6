//! Animation resource registry.
//!
//! Definitions are keyed by string IDs (`"hero:run"`, `"spider:die"`, ...)
//! and shared by every entity that plays them. The
//! [`animation`](crate::systems::animation::animation) system interprets them.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::hero::HeroAnimation;
use crate::components::spider::{SPIDER_CRAWL, SPIDER_DIE};

/// Rotating coin animation key.
pub const COIN_ROTATE: &str = "coin:rotate";

/// Playback speed used for single-frame animations.
const STILL_FPS: f32 = 60.0;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationDef>,
}

/// Spritesheet frames played in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Spritesheet asset key.
    pub tex_key: String,
    /// Frame indices into the spritesheet, in playback order.
    pub frames: Vec<usize>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationDef {
    pub fn new(tex_key: impl Into<String>, frames: Vec<usize>, fps: f32, looped: bool) -> Self {
        Self {
            tex_key: tex_key.into(),
            frames,
            fps,
            looped,
        }
    }

    /// Seconds each frame stays on screen.
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.fps
    }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, def: AnimationDef) {
        self.animations.insert(key.into(), def);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationDef> {
        self.animations.get(key)
    }

    /// Every animation the level uses.
    pub fn platformer() -> Self {
        let mut store = Self::new();
        store.insert(
            HeroAnimation::Stop.key(),
            AnimationDef::new("hero", vec![0], STILL_FPS, false),
        );
        store.insert(
            HeroAnimation::Run.key(),
            AnimationDef::new("hero", vec![1, 2], 8.0, true),
        );
        store.insert(
            HeroAnimation::Jump.key(),
            AnimationDef::new("hero", vec![3], STILL_FPS, false),
        );
        store.insert(
            HeroAnimation::Fall.key(),
            AnimationDef::new("hero", vec![4], STILL_FPS, false),
        );
        store.insert(
            SPIDER_CRAWL,
            AnimationDef::new("spider", vec![0, 1, 2], 8.0, true),
        );
        store.insert(
            SPIDER_DIE,
            AnimationDef::new("spider", vec![0, 4, 0, 4, 0, 4, 3, 3, 3, 3, 3, 3], 12.0, false),
        );
        store.insert(
            COIN_ROTATE,
            AnimationDef::new("coin", vec![0, 1, 2, 1], 6.0, true),
        );
        store
    }
}
