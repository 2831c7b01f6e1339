//! Queue of images waiting to become textures.
//!
//! Textures can only be created on the main thread with a live window, so
//! producers (preset painter, detection merge) push [`RgbaImage`]s here and the
//! [`upload_head_images`](crate::systems::textures::upload_head_images)
//! system turns them into textures before the frame is drawn. A head whose
//! key is still queued is simulated but not drawn.

use bevy_ecs::prelude::Resource;

use image::RgbaImage;

#[derive(Resource, Default, Debug)]
pub struct PendingImages {
    uploads: Vec<(String, RgbaImage)>,
}

impl PendingImages {
    /// Queue `image` for `key`, replacing any older queued image for it.
    pub fn push(&mut self, key: impl Into<String>, image: RgbaImage) {
        let key = key.into();
        if let Some(slot) = self.uploads.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = image;
        } else {
            self.uploads.push((key, image));
        }
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (String, RgbaImage)> {
        self.uploads.drain(..)
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.uploads.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.uploads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }
}
