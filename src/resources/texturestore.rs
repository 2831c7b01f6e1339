//! Uploaded head textures keyed by [`HeadImage`](crate::components::headimage::HeadImage) key.
//!
//! Non-send resource: textures are GPU handles owned by the main thread.
//! Replacing a key drops (and unloads) the previous texture.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
