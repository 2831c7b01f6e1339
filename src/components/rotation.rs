use bevy_ecs::prelude::Component;

/// Cosmetic spin of a head, in radians. Never read by physics.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub radians: f32,
}

impl Rotation {
    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }
}
