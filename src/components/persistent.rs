//! Marker for entities that outlive a session.
//!
//! Session shutdown despawns every grouped entity that lacks [`Persistent`].
//! The lifecycle hooks registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and the
//! global observers carry it so a restart does not unregister them.

use bevy_ecs::prelude::Component;

/// Tag component: never despawned on session restart.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Persistent;
