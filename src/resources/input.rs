//! Per-frame input resource.
//!
//! The session only needs three actions: run left, run right and jump. A host
//! (window backend, test, scripted runner) drives them with
//! [`InputState::press`] / [`InputState::release`]; the input systems turn the
//! edges into [`InputEvent`](crate::events::input::InputEvent)s and clear them
//! at the end of the frame.
use bevy_ecs::prelude::*;
use serde::Deserialize;

use crate::events::input::InputAction;

/// Physical key an action is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBinding {
    None,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyBinding,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyBinding::None,
        }
    }
}

impl BoolState {
    pub fn bound_to(key_binding: KeyBinding) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    fn press(&mut self) {
        if !self.active {
            self.just_pressed = true;
        }
        self.active = true;
    }

    fn release(&mut self) {
        if self.active {
            self.just_released = true;
        }
        self.active = false;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame key state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyBinding::ArrowLeft),
            right: BoolState::bound_to(KeyBinding::ArrowRight),
            jump: BoolState::bound_to(KeyBinding::ArrowUp),
        }
    }
}

impl InputState {
    pub fn state(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Left => &self.left,
            InputAction::Right => &self.right,
            InputAction::Jump => &self.jump,
        }
    }

    fn state_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Jump => &mut self.jump,
        }
    }

    /// Key went down. Holding an already held key raises no new edge.
    pub fn press(&mut self, action: InputAction) {
        self.state_mut(action).press();
    }

    /// Key went up.
    pub fn release(&mut self, action: InputAction) {
        self.state_mut(action).release();
    }

    /// Drop this frame's press/release edges, keeping held keys held.
    pub fn clear_edges(&mut self) {
        self.left.clear_edges();
        self.right.clear_edges();
        self.jump.clear_edges();
    }
}

/// One key change in a scripted input timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptedKey {
    pub frame: u64,
    pub action: InputAction,
    pub pressed: bool,
}

/// Frame-indexed key changes replayed by the headless runner.
///
/// ```json
/// [
///   { "frame": 30, "action": "right", "pressed": true },
///   { "frame": 45, "action": "jump", "pressed": true },
///   { "frame": 46, "action": "jump", "pressed": false }
/// ]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub keys: Vec<ScriptedKey>,
}

impl InputScript {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid input script: {}", e))
    }

    /// Apply every key change scheduled for `frame`.
    pub fn apply_frame(&self, frame: u64, input: &mut InputState) {
        for key in self.keys.iter().filter(|k| k.frame == frame) {
            if key.pressed {
                input.press(key.action);
            } else {
                input.release(key.action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_are_arrows() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyBinding::ArrowLeft);
        assert_eq!(input.right.key_binding, KeyBinding::ArrowRight);
        assert_eq!(input.jump.key_binding, KeyBinding::ArrowUp);
    }

    #[test]
    fn test_press_hold_release_edges() {
        let mut input = InputState::default();
        input.press(InputAction::Jump);
        assert!(input.jump.active && input.jump.just_pressed);

        input.clear_edges();
        input.press(InputAction::Jump);
        assert!(input.jump.active);
        assert!(!input.jump.just_pressed, "holding is not a new press");

        input.release(InputAction::Jump);
        assert!(!input.jump.active && input.jump.just_released);
        input.clear_edges();
        assert!(!input.jump.just_released);
    }

    #[test]
    fn test_script_applies_only_its_frame() {
        let script = InputScript::from_json(
            r#"[
                { "frame": 2, "action": "right", "pressed": true },
                { "frame": 5, "action": "right", "pressed": false }
            ]"#,
        )
        .unwrap();
        let mut input = InputState::default();
        script.apply_frame(1, &mut input);
        assert!(!input.right.active);
        script.apply_frame(2, &mut input);
        assert!(input.right.active);
        script.apply_frame(5, &mut input);
        assert!(!input.right.active);
    }

    #[test]
    fn test_script_rejects_unknown_action() {
        let err = InputScript::from_json(r#"[{ "frame": 0, "action": "fire", "pressed": true }]"#);
        assert!(err.is_err());
    }
}
