use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Dynamic text drawn with a bitmap font, e.g. the HUD coin counter.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Bitmap font asset key.
    pub font: String,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
