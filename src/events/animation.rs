//! Animation completion event.
//!
//! The [`animation`](crate::systems::animation::animation) system triggers
//! [`AnimationEndedEvent`] once when a non-looping animation shows its last
//! frame. [`animation_ended_observer`] runs the entity's matching
//! [`AnimationSubscription`] and removes it, so it fires at most once.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{AnimationAction, AnimationSubscription};
use crate::components::dead::kill;
use crate::components::sprite::Sprite;

#[derive(Event, Debug, Clone)]
pub struct AnimationEndedEvent {
    pub entity: Entity,
    pub animation_key: String,
}

pub fn animation_ended_observer(
    trigger: On<AnimationEndedEvent>,
    mut commands: Commands,
    subscriptions: Query<&AnimationSubscription>,
    mut sprites: Query<&mut Sprite>,
) {
    let event = trigger.event();
    let Ok(subscription) = subscriptions.get(event.entity) else {
        return;
    };
    if subscription.animation_key != event.animation_key {
        return;
    }
    match subscription.action {
        AnimationAction::Kill => {
            debug!("{:?} killed after '{}'", event.entity, event.animation_key);
            kill(&mut commands, &mut sprites, event.entity);
        }
    }
    commands
        .entity(event.entity)
        .remove::<AnimationSubscription>();
}
