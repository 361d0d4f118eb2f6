use bevy_ecs::prelude::Component;

/// Playback state of the entity's current animation.
///
/// The definition (frames, fps, looping) lives in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore) under
/// `animation_key`.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Set once a non-looping animation reaches its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Restart playback with another animation.
    pub fn play(&mut self, animation_key: impl Into<String>) {
        self.animation_key = animation_key.into();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
    }

    /// Switch to `animation_key` unless it is already the current one.
    /// Returns true when playback changed.
    pub fn switch_to(&mut self, animation_key: &str) -> bool {
        if self.animation_key == animation_key {
            return false;
        }
        self.play(animation_key);
        true
    }
}

/// What to do when a subscribed animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationAction {
    /// Mark the entity [`Dead`](super::dead::Dead).
    Kill,
}

/// One-shot reaction to the completion of a specific animation.
///
/// Handled by
/// [`animation_ended_observer`](crate::events::animation::animation_ended_observer),
/// which removes the component after acting on it.
#[derive(Debug, Clone, Component)]
pub struct AnimationSubscription {
    pub animation_key: String,
    pub action: AnimationAction,
}

impl AnimationSubscription {
    pub fn new(animation_key: impl Into<String>, action: AnimationAction) -> Self {
        Self {
            animation_key: animation_key.into(),
            action,
        }
    }
}
