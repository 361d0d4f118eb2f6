use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Sprite is identified by a texture key, its frame size in world units and
/// the spritesheet frame currently shown.
/// The anchor selects the pivot (0..=1 on each axis, relative to the frame)
/// that sits on the entity's position.
/// Nothing here draws; a renderer consumes these fields.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub frame: usize,
    pub anchor: Vec2,
    pub flip_h: bool,
    pub visible: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, size: Vec2, anchor: Vec2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: size.x,
            height: size.y,
            frame: 0,
            anchor,
            flip_h: false,
            visible: true,
        }
    }

    /// Builder: hidden sprite (sensors).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
