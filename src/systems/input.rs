//! Input systems.
//!
//! - [`emit_input_events`] turns this frame's press/release edges from
//!   [`InputState`] into [`InputEvent`] triggers. It runs before physics, so
//!   the jump handler sees the contact flags of the previous step.
//! - [`end_input_frame`] clears the edges once the frame is done.
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;

pub fn emit_input_events(input: Res<InputState>, mut commands: Commands) {
    for action in [InputAction::Left, InputAction::Right, InputAction::Jump] {
        let state = input.state(action);
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}

pub fn end_input_frame(mut input: ResMut<InputState>) {
    input.clear_edges();
}
