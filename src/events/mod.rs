//! Event types and observers used by the session.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them.
//!
//! Submodules:
//! - [`animation`] – one-shot animation completion and its observer
//! - [`audio`] – sound effect commands
//! - [`collision`] – overlap notifications and the coin and combat handlers
//! - [`gamestate`] – state transition notifications for the session lifecycle
//! - [`input`] – action edges and the jump handler
pub mod animation;
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod input;
