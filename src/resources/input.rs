//! Per-frame keyboard input resource.
//!
//! Captures the directional keys the game reacts to and exposes them to
//! systems via the [`InputState`] resource. WASD drives the main directions,
//! arrow keys the secondary ones; both sets move the player.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is held down this frame.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame directional keyboard state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
        }
    }
}

impl InputState {
    pub fn left(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn right(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }

    pub fn up(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    /// Unit movement intent for this frame.
    ///
    /// When both keys of an axis are held, right and down win.
    pub fn movement_intent(&self) -> (i32, i32) {
        let mut ix = 0;
        let mut iy = 0;
        if self.left() {
            ix = -1;
        }
        if self.right() {
            ix = 1;
        }
        if self.up() {
            iy = -1;
        }
        if self.down() {
            iy = 1;
        }
        (ix, iy)
    }
}
