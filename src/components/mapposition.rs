//! Canvas-space position of a head.
//!
//! [`MapPosition`] stores the top-left corner of the head's bounding square,
//! in canvas pixels. The head's center is `pos + size / 2` on each axis; see
//! [`Head::center`](super::head::Head::center).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}
