//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`input_intent_controller`] hands the resulting movement intent to every
//!   input-controlled actor.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::components::actor::Actor;
use crate::components::inputcontrolled::InputControlled;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<RaylibHandle>) {
    // WASD keys
    input.maindirection_up.active = rl.is_key_down(input.maindirection_up.key_binding);
    input.maindirection_left.active = rl.is_key_down(input.maindirection_left.key_binding);
    input.maindirection_down.active = rl.is_key_down(input.maindirection_down.key_binding);
    input.maindirection_right.active = rl.is_key_down(input.maindirection_right.key_binding);
    // Arrow keys
    input.secondarydirection_up.active = rl.is_key_down(input.secondarydirection_up.key_binding);
    input.secondarydirection_down.active =
        rl.is_key_down(input.secondarydirection_down.key_binding);
    input.secondarydirection_left.active =
        rl.is_key_down(input.secondarydirection_left.key_binding);
    input.secondarydirection_right.active =
        rl.is_key_down(input.secondarydirection_right.key_binding);
}

/// Set this frame's movement intent on every input-controlled actor.
pub fn input_intent_controller(
    mut query: Query<&mut Actor, With<InputControlled>>,
    input_state: Res<InputState>,
) {
    let (ix, iy) = input_state.movement_intent();
    for mut actor in query.iter_mut() {
        actor.set_input_intent(ix, iy);
    }
}
