use bevy_ecs::prelude::*;

use crate::components::dead::Dead;
use crate::components::rigidbody::RigidBody;
use crate::components::spider::Spider;

/// Turn patrolling spiders around at walls and world edges. Dying spiders
/// (disabled bodies) are left alone.
pub fn spider_update(mut spiders: Query<&mut RigidBody, (With<Spider>, Without<Dead>)>) {
    for mut body in spiders.iter_mut() {
        if body.enabled {
            Spider::patrol(&mut body);
        }
    }
}
