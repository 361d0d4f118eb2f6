//! Session systems.
//!
//! This module groups all ECS systems that advance the simulation one frame.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and report one-shot completion
//! - [`audio`] – drain and log the sound effect queue
//! - [`collision`] – separate solid bodies and emit overlap events
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`hero`] – pick the hero's animation from its body
//! - [`input`] – turn action edges into events, clear them at frame end
//! - [`movement`] – gravity, velocity integration and world bounds
//! - [`signalbinding`] – update DynamicText components based on signal values
//! - [`spider`] – turn spiders around at walls
//! - [`time`] – update simulation time and delta
pub mod animation;
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod hero;
pub mod input;
pub mod movement;
pub mod signalbinding;
pub mod spider;
pub mod time;
