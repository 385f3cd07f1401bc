//! Animation resource registry.
//!
//! Owns every [`Animation`] sequence for the lifetime of the world. Actors
//! refer to sequences through [`AnimationId`] handles; a sequence shared by
//! several actors has a single playback state. Sequences can also be looked
//! up by a string key.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::{Animation, AnimationId};

/// Central registry of animation sequences.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    animations: Vec<Animation>,
    keys: FxHashMap<String, AnimationId>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence under `key` and return its handle.
    ///
    /// Re-using a key replaces the sequence the key points to; handles given
    /// out earlier keep pointing at the old sequence.
    pub fn insert(&mut self, key: impl Into<String>, animation: Animation) -> AnimationId {
        let id = AnimationId(self.animations.len());
        self.animations.push(animation);
        self.keys.insert(key.into(), id);
        id
    }

    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id.0)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id.0)
    }

    /// Handle registered under `key`.
    pub fn id(&self, key: &str) -> Option<AnimationId> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
