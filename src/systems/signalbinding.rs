//! Signal binding system for reactive HUD updates.
//!
//! Synchronizes [`DynamicText`] components with values in [`WorldSignals`]
//! according to their [`SignalBinding`].

use crate::components::dynamictext::DynamicText;
use crate::components::signalbinding::SignalBinding;
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::prelude::*;

/// Updates [`DynamicText`] content from the bound integer signal.
///
/// Texts whose signal is missing keep their current content.
pub fn update_signal_bindings(
    mut query: Query<(&mut DynamicText, &SignalBinding)>,
    world_signals: Res<WorldSignals>,
) {
    for (mut dynamic_text, signal_binding) in query.iter_mut() {
        let Some(value) = world_signals.get_integer(&signal_binding.signal_key) else {
            continue;
        };
        let new_content = signal_binding.render(&value.to_string());
        if dynamic_text.content != new_content {
            dynamic_text.set_content(new_content);
        }
    }
}
