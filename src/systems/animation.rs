//! Animation playback system.
//!
//! [`animation`] advances every live entity's [`Animation`] by the frame
//! delta, writes the current spritesheet frame into its [`Sprite`], wraps
//! looping animations and, when a one-shot animation reaches its last frame,
//! holds that frame and triggers [`AnimationEndedEvent`] exactly once.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback state
//! - [`crate::resources::animationstore::AnimationStore`] – animation definitions
//! - [`crate::events::animation::animation_ended_observer`] – completion handling

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::Animation;
use crate::components::dead::Dead;
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationEndedEvent;
use crate::resources::animationstore::{AnimationDef, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance `animation` by `delta` seconds. Returns true on the step that
/// completes a non-looping animation.
pub fn advance(animation: &mut Animation, def: &AnimationDef, delta: f32) -> bool {
    if animation.finished || def.frames.is_empty() {
        return false;
    }
    animation.elapsed_time += delta;
    let frame_duration = def.frame_duration();
    while animation.elapsed_time >= frame_duration {
        animation.elapsed_time -= frame_duration;
        animation.frame_index += 1;
        if animation.frame_index >= def.frames.len() {
            if def.looped {
                animation.frame_index = 0;
            } else {
                animation.frame_index = def.frames.len() - 1; // stay on last frame
                animation.finished = true;
                return true;
            }
        }
    }
    false
}

pub fn animation(
    mut query: Query<(Entity, &mut Animation, Option<&mut Sprite>), Without<Dead>>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut anim, sprite) in query.iter_mut() {
        let Some(def) = animation_store.get(&anim.animation_key) else {
            warn!("Unknown animation '{}' on {:?}", anim.animation_key, entity);
            continue;
        };
        if advance(&mut anim, def, time.delta) {
            commands.trigger(AnimationEndedEvent {
                entity,
                animation_key: anim.animation_key.clone(),
            });
        }
        if let Some(mut sprite) = sprite {
            let frame = def.frames.get(anim.frame_index).copied().unwrap_or(0);
            sprite.frame = frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die_def() -> AnimationDef {
        AnimationDef::new("spider", vec![0, 4, 0, 4, 0, 4, 3, 3, 3, 3, 3, 3], 12.0, false)
    }

    #[test]
    fn test_looping_wraps() {
        let def = AnimationDef::new("coin", vec![0, 1, 2, 1], 6.0, true);
        let mut anim = Animation::new("coin:rotate");
        for _ in 0..4 {
            assert!(!advance(&mut anim, &def, 1.0 / 6.0 + 1e-4));
        }
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_one_shot_completes_once_on_last_frame() {
        let def = die_def();
        let mut anim = Animation::new("spider:die");
        let step = 1.0 / 12.0 + 1e-4;
        let mut completions = 0;
        for _ in 0..30 {
            if advance(&mut anim, &def, step) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(anim.finished);
        assert_eq!(anim.frame_index, 11);
    }

    #[test]
    fn test_one_shot_not_done_early() {
        let def = die_def();
        let mut anim = Animation::new("spider:die");
        for _ in 0..11 {
            assert!(!advance(&mut anim, &def, 1.0 / 12.0 + 1e-4));
        }
        assert!(!anim.finished);
        assert_eq!(anim.frame_index, 11);
    }

    #[test]
    fn test_system_writes_sprite_frame() {
        use bevy_math::Vec2;

        let mut world = World::new();
        let mut store = AnimationStore::new();
        store.insert("hero:run", AnimationDef::new("hero", vec![1, 2], 8.0, true));
        world.insert_resource(store);
        world.insert_resource(WorldTime {
            delta: 0.13,
            ..Default::default()
        });
        let e = world
            .spawn((
                Animation::new("hero:run"),
                Sprite::new("hero", Vec2::new(36.0, 42.0), Vec2::splat(0.5)),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 1);
        assert_eq!(world.get::<Sprite>(e).unwrap().frame, 2);
    }
}
