//! Kinematic body of a head.
//!
//! The [`RigidBody`] component stores the head's velocity in pixels per
//! frame. Heads have equal mass, so the velocity is all the collision
//! response needs. The sign of each axis gives the direction of travel.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity of a head, in canvas pixels per frame.
///
/// Updated by the movement, bounds and collision systems. The merge policy
/// never touches it once the head exists, so an image swap keeps the head
/// moving exactly as before.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl RigidBody {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            velocity: Vector2 { x: dx, y: dy },
        }
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        (self.velocity.x * self.velocity.x + self.velocity.y * self.velocity.y).sqrt()
    }

    /// Horizontal travel direction used for the cosmetic spin.
    ///
    /// Returns `1.0` when moving right or standing still horizontally,
    /// `-1.0` when moving left.
    pub fn spin_direction(&self) -> f32 {
        if self.velocity.x >= 0.0 { 1.0 } else { -1.0 }
    }

    /// Component of the velocity along `normal` (expected to be unit length).
    pub fn along(&self, normal: Vector2) -> f32 {
        self.velocity.x * normal.x + self.velocity.y * normal.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_is_at_rest() {
        let rb = RigidBody::default();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.speed(), 0.0));
    }

    #[test]
    fn test_speed_is_euclidean_norm() {
        let rb = RigidBody::new(3.0, -4.0);
        assert!(approx_eq(rb.speed(), 5.0));
    }

    #[test]
    fn test_spin_direction_follows_horizontal_sign() {
        assert!(approx_eq(RigidBody::new(2.0, -1.0).spin_direction(), 1.0));
        assert!(approx_eq(RigidBody::new(0.0, 3.0).spin_direction(), 1.0));
        assert!(approx_eq(RigidBody::new(-0.5, 3.0).spin_direction(), -1.0));
    }

    #[test]
    fn test_along_projects_on_normal() {
        let rb = RigidBody::new(3.0, 4.0);
        assert!(approx_eq(rb.along(Vector2 { x: 1.0, y: 0.0 }), 3.0));
        assert!(approx_eq(rb.along(Vector2 { x: 0.0, y: -1.0 }), -4.0));
    }
}
