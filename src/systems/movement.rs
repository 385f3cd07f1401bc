//! Movement system with axis-separated collision resolution.
//!
//! Each tick an input-controlled actor is integrated and then moved one axis
//! at a time:
//!
//! 1. move along X by `trunc(vx * dt)`; if the new bounds overlap any
//!    obstacle, X is restored and `vx` is zeroed;
//! 2. move along Y by `trunc(vy * dt)`; if the new bounds overlap any
//!    obstacle, Y is restored and `vy` is zeroed.
//!
//! X is always resolved before Y. Diagonal hits against a corner are therefore
//! settled in favour of the X axis.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::inputcontrolled::InputControlled;
use crate::components::obstacle::Obstacle;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Integrate `actor` and move it for one tick, reverting per axis on overlap.
pub fn move_and_collide(
    actor: &mut Actor,
    obstacles: &[&Actor],
    dt: f32,
    animations: &mut AnimationStore,
) {
    actor.integrate(dt, animations);
    let original = actor.bounds();

    actor.translate((actor.velocity().x * dt) as i32, 0);
    for obstacle in obstacles {
        if actor.collides_with(obstacle) {
            actor.translate(original.x - actor.bounds().x, 0);
            actor.set_velocity_x(0.0);
        }
    }

    actor.translate(0, (actor.velocity().y * dt) as i32);
    for obstacle in obstacles {
        if actor.collides_with(obstacle) {
            actor.translate(0, original.y - actor.bounds().y);
            actor.set_velocity_y(0.0);
        }
    }
}

/// Move every input-controlled actor against all obstacles.
pub fn movement(
    mut movers: Query<&mut Actor, (With<InputControlled>, Without<Obstacle>)>,
    obstacles: Query<&Actor, (With<Obstacle>, Without<InputControlled>)>,
    mut animations: ResMut<AnimationStore>,
    time: Res<WorldTime>,
) {
    let obstacles: Vec<&Actor> = obstacles.iter().collect();
    for mut actor in movers.iter_mut() {
        move_and_collide(&mut actor, &obstacles, time.delta, &mut animations);
    }
}
