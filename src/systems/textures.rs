//! Turn queued images into textures.

use bevy_ecs::prelude::*;
use image::RgbaImage;
use log::{debug, warn};
use raylib::prelude::*;

use crate::resources::pendingimages::PendingImages;
use crate::resources::texturestore::TextureStore;

/// Create an RGBA texture the size of `image` and upload its pixels in one go.
fn load_rgba_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    image: &RgbaImage,
) -> Result<Texture2D, raylib::error::Error> {
    // A blank image of the right size fixes the texture's dimensions and
    // its 8-bit RGBA format; the pixels are then replaced wholesale.
    let blank = Image::gen_image_color(image.width() as i32, image.height() as i32, Color::BLANK);
    let mut texture = rl.load_texture_from_image(th, &blank)?;
    texture.update_texture(image.as_raw())?;
    Ok(texture)
}

/// Upload every queued image, replacing textures with the same key.
///
/// A failed upload leaves the key without a texture; the head keeps moving
/// and simply isn't drawn.
pub fn upload_head_images(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut store: NonSendMut<TextureStore>,
    mut pending: ResMut<PendingImages>,
) {
    if pending.is_empty() {
        return;
    }
    for (key, image) in pending.drain() {
        match load_rgba_texture(&mut rl, &th, &image) {
            Ok(texture) => {
                debug!("Uploaded texture '{}' ({}x{})", key, image.width(), image.height());
                store.insert(key, texture);
            }
            Err(e) => warn!("Failed to upload texture '{}': {}", key, e),
        }
    }
}
