use bevy_ecs::prelude::{Commands, Component, Entity, Query};

use crate::components::sprite::Sprite;

/// Killed entity: collected coin, finished dying spider.
///
/// Dead entities are skipped by physics, collisions, controllers and the
/// animation player. They stay in the world until the session shuts down.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Dead;

/// Mark `entity` dead and hide its sprite.
pub fn kill(commands: &mut Commands, sprites: &mut Query<&mut Sprite>, entity: Entity) {
    if let Ok(mut sprite) = sprites.get_mut(entity) {
        sprite.visible = false;
    }
    commands.entity(entity).insert(Dead);
}
