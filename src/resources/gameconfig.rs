//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = Spritewalk
//! target_fps = 60
//!
//! [assets]
//! spritesheet = assets/spritesheet.png
//!
//! [player]
//! acceleration = 500
//! friction = 800
//! max_speed = 250
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::actor::Tuning;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_TITLE: &str = "Spritewalk";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SPRITESHEET_PATH: &str = "assets/spritesheet.png";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Sprite sheet shared by every actor.
    pub spritesheet_path: PathBuf,
    /// Movement tuning of the player.
    pub player_tuning: Tuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            spritesheet_path: PathBuf::from(DEFAULT_SPRITESHEET_PATH),
            player_tuning: Tuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "spritesheet") {
            self.spritesheet_path = PathBuf::from(path);
        }

        // [player] section
        if let Some(accel) = config.getfloat("player", "acceleration").ok().flatten() {
            self.player_tuning.acceleration = accel as f32;
        }
        if let Some(friction) = config.getfloat("player", "friction").ok().flatten() {
            self.player_tuning.friction = friction as f32;
        }
        if let Some(max_speed) = config.getfloat("player", "max_speed").ok().flatten() {
            self.player_tuning.max_speed = max_speed as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, spritesheet={}, tuning={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.spritesheet_path.display(),
            self.player_tuning
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [assets] section
        config.set(
            "assets",
            "spritesheet",
            Some(self.spritesheet_path.display().to_string()),
        );

        // [player] section
        let t = self.player_tuning;
        config.set("player", "acceleration", Some(t.acceleration.to_string()));
        config.set("player", "friction", Some(t.friction.to_string()));
        config.set("player", "max_speed", Some(t.max_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.spritesheet_path, PathBuf::from("assets/spritesheet.png"));
        assert_eq!(config.player_tuning, Tuning::default());
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::with_path(dir.path().join("absent.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[window]\nwidth = 1024\ntitle = Demo\n\n[player]\nmax_speed = 120.5").unwrap();
        drop(file);

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.window_title, "Demo");
        assert_eq!(config.player_tuning.max_speed, 120.5);
        assert_eq!(config.player_tuning.acceleration, 500.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.ini");

        let mut config = GameConfig::with_path(&path);
        config.target_fps = 30;
        config.spritesheet_path = PathBuf::from("art/sheet.png");
        config.player_tuning.friction = 400.0;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(loaded.spritesheet_path, PathBuf::from("art/sheet.png"));
        assert_eq!(loaded.player_tuning.friction, 400.0);
        assert_eq!(loaded.window_title, "Spritewalk");
    }
}
