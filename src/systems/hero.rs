use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::dead::Dead;
use crate::components::hero::Hero;
use crate::components::rigidbody::RigidBody;

/// Pick the animation matching the hero's body state once collisions have
/// settled it. Playback restarts only when the animation changes.
pub fn hero_update(mut heroes: Query<(&RigidBody, &mut Animation), (With<Hero>, Without<Dead>)>) {
    for (body, mut animation) in heroes.iter_mut() {
        animation.switch_to(Hero::animation(body).key());
    }
}
