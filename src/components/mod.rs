//! ECS components for actors.
//!
//! Submodules overview:
//! - [`actor`] – position, velocity, input intent and movement integration
//! - [`animation`] – sprite-sheet playback state shared through handles
//! - [`collider`] – integer rectangles and the AABB overlap test
//! - [`inputcontrolled`] – marker for the keyboard-driven actor
//! - [`obstacle`] – marker for static blocking actors
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod actor;
pub mod animation;
pub mod collider;
pub mod inputcontrolled;
pub mod obstacle;
pub mod zindex;
