//! Sound commands.
//!
//! Game logic never plays audio itself. It writes [`AudioCmd`] messages that
//! a mixer (or the headless runner's logger) consumes.

use bevy_ecs::message::Message;

pub const SFX_JUMP: &str = "sfx:jump";
pub const SFX_COIN: &str = "sfx:coin";
pub const SFX_STOMP: &str = "sfx:stomp";

/// Commands sent *to* the audio backend.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
}

impl AudioCmd {
    pub fn play(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }
}
