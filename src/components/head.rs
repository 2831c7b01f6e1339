//! Head marker and geometry.
//!
//! Every bouncing sprite carries a [`Head`]. Its collision silhouette is the
//! circle inscribed in the `size × size` bounding square whose top-left
//! corner is the entity's [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Head {
    /// Diameter of the head in canvas pixels.
    pub size: f32,
}

impl Head {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Center of the head whose bounding square starts at `top_left`.
    pub fn center(&self, top_left: Vector2) -> Vector2 {
        Vector2 {
            x: top_left.x + self.radius(),
            y: top_left.y + self.radius(),
        }
    }

    /// Largest top-left coordinate that keeps the head inside `extent`.
    ///
    /// Never negative: a canvas smaller than the head pins it to `0`.
    pub fn max_origin(&self, extent: f32) -> f32 {
        (extent - self.size).max(0.0)
    }
}
