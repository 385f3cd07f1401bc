//! Spritewalk library.
//!
//! A small kinematic 2D demo: a keyboard-driven actor accelerates, slides to
//! a stop under friction and is blocked by static obstacles using
//! axis-separated AABB resolution. This module exposes the components,
//! resources and systems for use in integration tests and by the binary.

pub mod components;
pub mod error;
pub mod game;
pub mod resources;
pub mod systems;
