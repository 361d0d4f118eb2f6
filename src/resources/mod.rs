//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, physics
//! settings, asset declarations and the level document. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `assets` – declared assets and the loaded JSON cache
//! - `collisionrules` – which groups collide or overlap, in order
//! - `gameconfig` – INI-backed world and level settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame state of the three actions and scripted input
//! - `level` – the level document schema
//! - `physics` – gravity and world bounds
//! - `systemsstore` – registry of lifecycle hooks by name
//! - `worldsignals` – session scoreboard and entities of interest
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod assets;
pub mod collisionrules;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod physics;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
