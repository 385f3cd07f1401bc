//! Static obstacle marker component.

use bevy_ecs::prelude::Component;

/// Tag for actors that block input-controlled actors.
///
/// Obstacles are collision targets only: they never receive input and are
/// never moved by the movement system.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Obstacle;
