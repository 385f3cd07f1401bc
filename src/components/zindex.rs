//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component controls the drawing order of actors. Actors with
//! higher z-index values are drawn on top of those with lower values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). Actors without one draw at 0.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
