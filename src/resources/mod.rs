//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – animation sequences shared between actors
//! - `gameconfig` – window, asset and tuning settings from `config.ini`
//! - `input` – per-frame keyboard state of the directional keys
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
