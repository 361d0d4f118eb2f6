//! Asset declarations and the document cache.
//!
//! [`AssetManifest`] records every asset the level needs under a logical key:
//! images with their pixel size, spritesheets with their frame size, sound
//! clips, the numeric bitmap font and the level document. Sizes drive sprite
//! and collider dimensions at spawn time; decoding images or audio is left to
//! whatever host renders and plays them.
//!
//! [`AssetCache`] holds the raw text of loaded JSON documents. Preloading only
//! reads documents that are not cached yet, so a restart re-spawns the level
//! from the exact same document.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use bevy_math::Vec2;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

/// Logical key of the level document.
pub const LEVEL_KEY: &str = "level:1";
/// Logical key of the numeric HUD font.
pub const FONT_NUMBERS: &str = "font:numbers";
pub const ICON_COIN: &str = "icon:coin";
pub const INVISIBLE_WALL: &str = "invisible-wall";

/// What kind of asset an entry is, with the metadata spawning needs.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetKind {
    Image { width: f32, height: f32 },
    SpriteSheet { frame_width: f32, frame_height: f32 },
    BitmapFont {
        glyph_width: f32,
        glyph_height: f32,
        charset: &'static str,
        glyphs_per_row: usize,
    },
    Audio,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    pub key: String,
    pub path: String,
    pub kind: AssetKind,
}

/// Declared assets, in declaration order.
#[derive(Resource, Debug, Clone, Default)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    fn declare(&mut self, key: &str, path: impl Into<String>, kind: AssetKind) {
        self.entries.push(AssetEntry {
            key: key.to_string(),
            path: path.into(),
            kind,
        });
    }

    pub fn image(&mut self, key: &str, path: &str, width: f32, height: f32) {
        self.declare(key, path, AssetKind::Image { width, height });
    }

    pub fn spritesheet(&mut self, key: &str, path: &str, frame_width: f32, frame_height: f32) {
        self.declare(
            key,
            path,
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            },
        );
    }

    pub fn audio(&mut self, key: &str, path: &str) {
        self.declare(key, path, AssetKind::Audio);
    }

    pub fn json(&mut self, key: &str, path: impl Into<String>) {
        self.declare(key, path, AssetKind::Json);
    }

    /// Everything the platformer level references. `level_path` is the
    /// level document location relative to the assets root.
    pub fn platformer(level_path: &str) -> Self {
        let mut manifest = Self::new();
        manifest.json(LEVEL_KEY, level_path);

        manifest.image("background", "images/background.png", 960.0, 600.0);
        manifest.image("ground", "images/ground.png", 960.0, 42.0);
        manifest.image("grass:8x1", "images/grass_8x1.png", 336.0, 42.0);
        manifest.image("grass:6x1", "images/grass_6x1.png", 252.0, 42.0);
        manifest.image("grass:4x1", "images/grass_4x1.png", 168.0, 42.0);
        manifest.image("grass:2x1", "images/grass_2x1.png", 84.0, 42.0);
        manifest.image("grass:1x1", "images/grass_1x1.png", 42.0, 42.0);
        manifest.image(INVISIBLE_WALL, "images/invisible_wall.png", 5.0, 42.0);
        manifest.image(ICON_COIN, "images/coin_icon.png", 22.0, 22.0);
        manifest.image("key", "images/key.png", 28.0, 24.0);
        manifest.declare(
            FONT_NUMBERS,
            "images/numbers.png",
            AssetKind::BitmapFont {
                glyph_width: 20.0,
                glyph_height: 26.0,
                charset: "0123456789X ",
                glyphs_per_row: 6,
            },
        );

        manifest.audio("sfx:jump", "audio/jump.wav");
        manifest.audio("sfx:coin", "audio/coin.wav");
        manifest.audio("sfx:stomp", "audio/stomp.wav");

        manifest.spritesheet("coin", "images/coin_animated.png", 22.0, 22.0);
        manifest.spritesheet("spider", "images/spider.png", 42.0, 32.0);
        manifest.spritesheet("hero", "images/hero.png", 36.0, 42.0);
        manifest.spritesheet("door", "images/door.png", 42.0, 66.0);
        manifest
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Size of one drawable frame: the whole image, one spritesheet cell or
    /// one font glyph.
    pub fn frame_size(&self, key: &str) -> Option<Vec2> {
        match self.get(key)?.kind {
            AssetKind::Image { width, height } => Some(Vec2::new(width, height)),
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            } => Some(Vec2::new(frame_width, frame_height)),
            AssetKind::BitmapFont {
                glyph_width,
                glyph_height,
                ..
            } => Some(Vec2::new(glyph_width, glyph_height)),
            AssetKind::Audio | AssetKind::Json => None,
        }
    }

    /// Like [`frame_size`](Self::frame_size), with an error naming the key.
    pub fn require_frame_size(&self, key: &str) -> Result<Vec2, String> {
        self.frame_size(key)
            .ok_or_else(|| format!("Unknown image asset '{}'", key))
    }

    pub fn audio_entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter().filter(|e| e.kind == AssetKind::Audio)
    }
}

/// Loaded JSON documents by logical key.
#[derive(Resource, Debug, Clone, Default)]
pub struct AssetCache {
    documents: FxHashMap<String, String>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a document in the cache directly (used by hosts that embed levels).
    pub fn insert_json(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(key.into(), text.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.documents.contains_key(key)
    }

    /// Read every declared JSON document that is not cached yet from
    /// `root/<path>`. Returns how many documents were read from disk.
    pub fn load_missing(&mut self, manifest: &AssetManifest, root: &Path) -> Result<usize, String> {
        let mut loaded = 0;
        for entry in manifest.entries() {
            if entry.kind != AssetKind::Json {
                continue;
            }
            if self.contains(&entry.key) {
                debug!("Asset '{}' already cached", entry.key);
                continue;
            }
            let path = root.join(&entry.path);
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read '{}' ({}): {}", entry.key, path.display(), e))?;
            info!("Loaded '{}' from {}", entry.key, path.display());
            self.documents.insert(entry.key.clone(), text);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Deserialize a cached document.
    pub fn parse<T: DeserializeOwned>(&self, key: &str) -> Result<T, String> {
        let text = self
            .documents
            .get(key)
            .ok_or_else(|| format!("Document '{}' is not loaded", key))?;
        serde_json::from_str(text).map_err(|e| format!("Failed to parse '{}': {}", key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_sizes() {
        let manifest = AssetManifest::platformer("data/level01.json");
        assert_eq!(manifest.frame_size("hero"), Some(Vec2::new(36.0, 42.0)));
        assert_eq!(manifest.frame_size("spider"), Some(Vec2::new(42.0, 32.0)));
        assert_eq!(manifest.frame_size("coin"), Some(Vec2::new(22.0, 22.0)));
        assert_eq!(manifest.frame_size("door"), Some(Vec2::new(42.0, 66.0)));
        assert_eq!(manifest.frame_size("grass:4x1"), Some(Vec2::new(168.0, 42.0)));
        assert_eq!(manifest.frame_size(FONT_NUMBERS), Some(Vec2::new(20.0, 26.0)));
        assert_eq!(manifest.frame_size("sfx:jump"), None);
        assert!(manifest.require_frame_size("grass:3x1").is_err());
    }

    #[test]
    fn test_three_sound_effects() {
        let manifest = AssetManifest::platformer("data/level01.json");
        let keys: Vec<&str> = manifest.audio_entries().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["sfx:jump", "sfx:coin", "sfx:stomp"]);
        let paths: Vec<&str> = manifest.audio_entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["audio/jump.wav", "audio/coin.wav", "audio/stomp.wav"]);
    }

    #[test]
    fn test_load_missing_skips_cached_documents() {
        let manifest = AssetManifest::platformer("does/not/exist.json");
        let mut cache = AssetCache::new();
        cache.insert_json(LEVEL_KEY, "{}");
        let loaded = cache.load_missing(&manifest, Path::new("/nonexistent"));
        assert_eq!(loaded, Ok(0));
    }

    #[test]
    fn test_load_missing_reports_unreadable_file() {
        let manifest = AssetManifest::platformer("does/not/exist.json");
        let mut cache = AssetCache::new();
        let err = cache
            .load_missing(&manifest, Path::new("/nonexistent"))
            .unwrap_err();
        assert!(err.contains(LEVEL_KEY));
    }

    #[test]
    fn test_parse_errors_name_the_document() {
        let mut cache = AssetCache::new();
        assert!(cache.parse::<serde_json::Value>(LEVEL_KEY).is_err());
        cache.insert_json(LEVEL_KEY, "{ not json");
        let err = cache.parse::<serde_json::Value>(LEVEL_KEY).unwrap_err();
        assert!(err.contains(LEVEL_KEY));
    }
}
