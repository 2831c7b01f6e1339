//! Replaceable image slot of a head.
//!
//! [`HeadImage`] names the texture a head is drawn with. Swapping a head's
//! picture means pointing this key at another texture, or uploading new
//! pixels behind the same key; position, velocity and spin are untouched.
//! The texture behind a key may not be uploaded yet, in which case the head
//! is simulated but not drawn.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct HeadImage {
    pub tex_key: String,
}

impl HeadImage {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }

    /// Point the slot at `tex_key`. Returns `true` when the key changed.
    pub fn swap(&mut self, tex_key: &str) -> bool {
        if self.tex_key == tex_key {
            return false;
        }
        self.tex_key.clear();
        self.tex_key.push_str(tex_key);
        true
    }
}
