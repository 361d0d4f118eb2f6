//! Audio command plumbing.
//!
//! - [`update_audio_cmds`] advances the double-buffered [`AudioCmd`] queue once
//!   per frame. Commands stay readable for the frame they were written in and
//!   the next one.
//! - [`log_audio_cmds`] is the headless backend: it logs what a mixer would
//!   load and play.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::audio::AudioCmd;

pub fn update_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

pub fn log_audio_cmds(mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        match cmd {
            AudioCmd::LoadFx { id, path } => debug!("audio: load '{}' from {}", id, path),
            AudioCmd::PlayFx { id } => debug!("audio: play '{}'", id),
        }
    }
}
