//! Keyboard-controlled actor marker.
//!
//! Actors tagged with [`InputControlled`] receive the per-frame movement
//! intent derived from [`InputState`](crate::resources::input::InputState)
//! and are moved with collision resolution by
//! [`movement`](crate::systems::movement::movement).

use bevy_ecs::prelude::Component;

/// Tag for the player-driven actor.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;
