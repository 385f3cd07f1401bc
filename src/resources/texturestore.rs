//! Texture store resource.
//!
//! A non-send resource that owns every loaded texture, keyed by string IDs.
//! Actors only carry the key.
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::Texture2D;
use raylib::{RaylibHandle, RaylibThread};
use rustc_hash::FxHashMap;

use crate::error::GameError;

// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Decode the image at `path` and keep the texture under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<(), GameError> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| GameError::AssetLoad {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        let key = key.into();
        log::info!(
            "Loaded texture '{}' from {} ({}x{})",
            key,
            path,
            texture.width,
            texture.height
        );
        self.textures.insert(key, texture);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
