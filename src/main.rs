//! Spritewalk main entry point.
//!
//! A single-screen 2D demo written in Rust using:
//! - **raylib** for windowing, textures and keyboard input
//! - **bevy_ecs** for the world, resources and the per-frame schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when absent), open the window
//! 2. Load the sprite sheet, spawn the player and obstacles
//! 3. Each frame until the window is closed:
//!    - poll keys and set the player's movement intent
//!    - integrate velocity, move on X then Y against every obstacle
//!    - clear the screen and draw obstacles, then the player
//! 4. Unload textures, then close the window
//!
//! Startup failures exit with code 1.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::RaylibHandle;
use std::path::PathBuf;

use spritewalk::error::GameError;
use spritewalk::game;
use spritewalk::resources::animationstore::AnimationStore;
use spritewalk::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use spritewalk::resources::input::InputState;
use spritewalk::resources::texturestore::TextureStore;
use spritewalk::resources::worldtime::WorldTime;
use spritewalk::systems::frame_schedule;
use spritewalk::systems::time::update_world_time;

/// Spritewalk: move the sprite with WASD or the arrow keys.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Sprite sheet to load instead of the configured one.
    #[arg(long, value_name = "PATH")]
    spritesheet: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({}), using defaults", e, cli.config.display());
    }
    if let Some(path) = cli.spritesheet {
        config.spritesheet_path = path;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    if let Err(e) = run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: GameConfig) -> Result<(), GameError> {
    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = game::init_window(&config)?;
    let textures = game::load_assets(&mut rl, &thread, &config)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(AnimationStore::new());
    game::spawn_scene(&mut world, &config);
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = frame_schedule();

    // --------------- Main loop ---------------
    while !world.non_send_resource::<RaylibHandle>().window_should_close() {
        let dt = world.non_send_resource::<RaylibHandle>().get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    // Textures must be unloaded while the window still exists
    drop(world.remove_non_send_resource::<TextureStore>());
    let frames = world.resource::<WorldTime>().frame_count;
    log::info!("Shutting down after {} frames", frames);
    Ok(())
}
