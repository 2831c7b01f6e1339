//! Canvas size resource.
//!
//! Stores the drawing surface dimensions in pixels. The main loop refreshes
//! it from the window each frame, so a resized window immediately moves the
//! walls heads bounce against. Nothing in the physics queries the window
//! directly.

use bevy_ecs::prelude::Resource;

/// Current canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl CanvasSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
