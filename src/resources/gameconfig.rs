//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Every value has a default,
//! so a missing file or key never prevents a session from starting.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 960
//! height = 600
//! target_fps = 60
//!
//! [physics]
//! gravity = 1200
//!
//! [level]
//! path = data/level01.json
//!
//! [assets]
//! root = .
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: u32 = 960;
const DEFAULT_WORLD_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_GRAVITY: f32 = 1200.0;
const DEFAULT_LEVEL_PATH: &str = "data/level01.json";
const DEFAULT_ASSETS_ROOT: &str = ".";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// World width in pixels; also the right world bound.
    pub world_width: u32,
    /// World height in pixels; also the bottom world bound.
    pub world_height: u32,
    /// Simulation rate; the runner steps `1 / target_fps` seconds per frame.
    pub target_fps: u32,
    /// Downward gravity in pixels per second squared.
    pub gravity: f32,
    /// Level document, relative to `assets_root`.
    pub level_path: String,
    /// Directory asset paths are resolved against.
    pub assets_root: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gravity: DEFAULT_GRAVITY,
            level_path: DEFAULT_LEVEL_PATH.to_string(),
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [world] section
        if let Some(width) = config.getuint("world", "width").ok().flatten() {
            self.world_width = width as u32;
        }
        if let Some(height) = config.getuint("world", "height").ok().flatten() {
            self.world_height = height as u32;
        }
        if let Some(fps) = config.getuint("world", "target_fps").ok().flatten() {
            self.target_fps = (fps as u32).max(1);
        }

        // [physics] section
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }

        // [level] section
        if let Some(path) = config.get("level", "path") {
            self.level_path = path;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.assets_root = PathBuf::from(root);
        }

        info!(
            "Loaded config: {}x{} world, fps={}, gravity={}, level={}, assets={:?}",
            self.world_width,
            self.world_height,
            self.target_fps,
            self.gravity,
            self.level_path,
            self.assets_root
        );
    }

    /// Fixed simulation step in seconds.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.world_width, 960);
        assert_eq!(config.world_height, 600);
        assert_eq!(config.gravity, 1200.0);
        assert_eq!(config.level_path, "data/level01.json");
        assert!((config.frame_delta() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[physics]\ngravity = 600\n\n[level]\npath = data/test.json\n")
            .unwrap();
        assert_eq!(config.gravity, 600.0);
        assert_eq!(config.level_path, "data/test.json");
        assert_eq!(config.world_width, 960);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.world_height, 600);
    }
}
