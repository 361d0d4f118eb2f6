//! Signal binding component for reactive HUD updates.
//!
//! Binds a [`DynamicText`](super::dynamictext::DynamicText) to a value stored
//! in [`WorldSignals`](crate::resources::worldsignals::WorldSignals), so the
//! text follows the value without the game logic touching the HUD.
//!
//! Only integer signals are displayed.
//!
//! # Example
//!
//! ```ignore
//! commands.spawn((
//!     DynamicText::new("x0", "font:numbers"),
//!     SignalBinding::new("coins").with_format("x{}"),
//! ));
//! ```
//!
//! # Related
//!
//! - [`crate::systems::signalbinding::update_signal_bindings`] – the update system
//! - [`crate::resources::worldsignals::WorldSignals`] – global signal storage

use bevy_ecs::prelude::Component;

/// Binds a [`DynamicText`](super::dynamictext::DynamicText) to an integer world signal.
#[derive(Component, Clone, Debug)]
pub struct SignalBinding {
    /// The key of the signal to read from.
    pub signal_key: String,
    /// Optional format string. Use `{}` as a placeholder for the value.
    pub format: Option<String>,
}

impl SignalBinding {
    /// Creates a new `SignalBinding` for the given world signal key.
    pub fn new(signal_key: impl ToString) -> Self {
        SignalBinding {
            signal_key: signal_key.to_string(),
            format: None,
        }
    }

    /// Sets a format string for the displayed value.
    ///
    /// Use `{}` as a placeholder for the signal value.
    pub fn with_format(mut self, format: impl ToString) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Render a raw signal value through the optional format string.
    pub fn render(&self, value: &str) -> String {
        match &self.format {
            Some(format_str) => format_str.replace("{}", value),
            None => value.to_string(),
        }
    }
}
