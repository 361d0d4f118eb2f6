//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when a gameplay
//! action is pressed or released, and the session's jump handler that reacts
//! to it.
//!
//! The jump handler is not a global observer: the session's `init` hook
//! spawns it, and shutdown despawns it together with the rest of the session.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use serde::Deserialize;

use crate::components::dead::Dead;
use crate::components::hero::Hero;
use crate::components::rigidbody::RigidBody;
use crate::events::audio::{AudioCmd, SFX_JUMP};

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputAction {
    /// Run left (default: Left arrow).
    Left,
    /// Run right (default: Right arrow).
    Right,
    /// Jump (default: Up arrow).
    Jump,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Jump when the jump key goes down. The sound only plays if the hero was on
/// the ground and actually jumped.
pub fn on_jump_pressed(
    trigger: On<InputEvent>,
    mut heroes: Query<&mut RigidBody, (With<Hero>, Without<Dead>)>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    if event.action != InputAction::Jump || !event.pressed {
        return;
    }
    let Ok(mut body) = heroes.single_mut() else {
        return;
    };
    if Hero::jump(&mut body) {
        audio.write(AudioCmd::play(SFX_JUMP));
    } else {
        debug!("Jump ignored: hero is airborne");
    }
}
