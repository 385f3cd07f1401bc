//! Fatal startup errors.
//!
//! Everything that can go wrong happens before the first frame: bringing up
//! the window or decoding the sprite sheet. Both abort the program with exit
//! code 1. Simulation code has no failure paths.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Window or graphics context creation failed.
    Initialization(String),
    /// An image could not be loaded or decoded.
    AssetLoad { path: String, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Initialization(msg) => write!(f, "initialization failed: {msg}"),
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load image {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}
