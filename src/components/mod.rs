//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the level: positions, bodies, colliders, sprites and the per-role markers
//! the controllers query for.
//!
//! Submodules overview:
//! - [`animation`] – playback state and completion subscriptions for sprite animations
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`dead`] – marker for entities killed this session
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`group`] – tag component for grouping entities by name
//! - [`hero`] – player marker and movement rules
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive session shutdown
//! - [`rigidbody`] – arcade body with velocity and contact flags
//! - [`screenposition`] – screen-space position for HUD elements
//! - [`signalbinding`] – binds text to a world signal
//! - [`spider`] – patrolling enemy marker and rules
//! - [`sprite`] – 2D sprite frame, size and anchor

pub mod animation;
pub mod boxcollider;
pub mod dead;
pub mod dynamictext;
pub mod group;
pub mod hero;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod screenposition;
pub mod signalbinding;
pub mod spider;
pub mod sprite;
