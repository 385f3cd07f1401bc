//! Engine systems.
//!
//! Submodules overview
//! - [`input`] – read hardware input and hand movement intent to actors
//! - [`movement`] – integrate velocity and resolve obstacle collisions per axis
//! - [`render`] – draw actors using Raylib
//! - [`time`] – update simulation time and delta
//!
//! [`frame_schedule`] chains them in per-frame order.

pub mod input;
pub mod movement;
pub mod render;
pub mod time;

use bevy_ecs::prelude::*;

/// Input, simulation and rendering in the order they run each frame.
pub fn frame_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            input::update_input_state,
            input::input_intent_controller,
            movement::movement,
            render::render_system,
        )
            .chain(),
    );
    update
}

/// Frame schedule without the Raylib-bound systems, for headless runs.
pub fn simulation_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((input::input_intent_controller, movement::movement).chain());
    update
}
