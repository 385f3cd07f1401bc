//! Scene setup and platform bring-up.
//!
//! [`spawn_scene`] fills a world with the demo scene: the player and three
//! static obstacles, all sharing one sprite sheet. [`init_window`] and
//! [`load_assets`] wrap the fallible raylib startup steps in [`GameError`].

use std::panic::{self, AssertUnwindSafe};

use bevy_ecs::prelude::*;
use raylib::{RaylibHandle, RaylibThread};

use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::inputcontrolled::InputControlled;
use crate::components::obstacle::Obstacle;
use crate::components::zindex::ZIndex;
use crate::error::GameError;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

/// Texture key of the shared sprite sheet.
pub const SPRITESHEET: &str = "spritesheet";

const SPRITE_SIZE: i32 = 64;
const PLAYER_START: (i32, i32) = (100, 100);
const OBSTACLE_POSITIONS: [(i32, i32); 3] = [(300, 200), (400, 300), (200, 400)];

/// Create the window and return the raylib handles.
pub fn init_window(config: &GameConfig) -> Result<(RaylibHandle, RaylibThread), GameError> {
    let builder = {
        let mut b = raylib::init();
        b.size(config.window_width as i32, config.window_height as i32)
            .title(&config.window_title);
        b
    };
    // raylib panics when the window cannot be created
    let (mut rl, thread) = panic::catch_unwind(AssertUnwindSafe(|| builder.build()))
        .map_err(|_| GameError::Initialization("could not create window".to_string()))?;

    if !rl.is_window_ready() {
        return Err(GameError::Initialization("window is not ready".to_string()));
    }

    rl.set_target_fps(config.target_fps);
    // Only the window close request ends the game
    rl.set_exit_key(None);

    log::info!(
        "Window {}x{} '{}' at {} fps",
        config.window_width,
        config.window_height,
        config.window_title,
        config.target_fps
    );
    Ok((rl, thread))
}

/// Load the sprite sheet into a new [`TextureStore`].
pub fn load_assets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &GameConfig,
) -> Result<TextureStore, GameError> {
    let mut textures = TextureStore::new();
    let path = config.spritesheet_path.display().to_string();
    textures.load(rl, thread, SPRITESHEET, &path)?;
    Ok(textures)
}

/// Register the demo animations and spawn the player and obstacles.
///
/// Inserts an [`AnimationStore`] if the world has none. Returns the player
/// entity.
pub fn spawn_scene(world: &mut World, config: &GameConfig) -> Entity {
    if !world.contains_resource::<AnimationStore>() {
        world.insert_resource(AnimationStore::new());
    }
    let (idle, walk) = {
        let mut animations = world.resource_mut::<AnimationStore>();
        (
            animations.insert("idle", Animation::new(0, 1, SPRITE_SIZE, 0.2)),
            animations.insert("walk", Animation::new(1, 4, SPRITE_SIZE, 0.15)),
        )
    };

    for (x, y) in OBSTACLE_POSITIONS {
        world.spawn((
            Actor::new(x, y, SPRITE_SIZE, SPRITE_SIZE)
                .with_texture(SPRITESHEET)
                .with_animation(idle),
            Obstacle,
            ZIndex(0),
        ));
    }

    let (px, py) = PLAYER_START;
    let player = world
        .spawn((
            Actor::new(px, py, SPRITE_SIZE, SPRITE_SIZE)
                .with_texture(SPRITESHEET)
                .with_animation(walk)
                .with_tuning(config.player_tuning),
            InputControlled,
            ZIndex(1),
        ))
        .id();

    log::info!(
        "Scene ready: player at ({}, {}), {} obstacles",
        px,
        py,
        OBSTACLE_POSITIONS.len()
    );
    player
}
