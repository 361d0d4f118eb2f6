//! Level document model.
//!
//! A level is a JSON object with the hero spawn point, the door and key
//! positions, the platforms (by image key) and optional lists of spiders and
//! coins:
//!
//! ```json
//! {
//!   "hero": { "x": 21, "y": 525 },
//!   "door": { "x": 169, "y": 546 },
//!   "key": { "x": 750, "y": 172 },
//!   "platforms": [ { "image": "ground", "x": 0, "y": 546 } ],
//!   "spiders": [ { "x": 121, "y": 399 } ],
//!   "coins": [ { "x": 147, "y": 525 } ]
//! }
//! ```
//!
//! The document is parsed once per session start and never mutated.

use bevy_math::Vec2;
use serde::Deserialize;

/// A point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Spawn {
    pub x: f32,
    pub y: f32,
}

impl Spawn {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A platform placed with its top-left corner at (x, y).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformDef {
    pub image: String,
    pub x: f32,
    pub y: f32,
}

impl PlatformDef {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelData {
    pub hero: Spawn,
    pub door: Spawn,
    pub key: Spawn,
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub spiders: Vec<Spawn>,
    #[serde(default)]
    pub coins: Vec<Spawn>,
}

impl LevelData {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid level document: {}", e))
    }
}
