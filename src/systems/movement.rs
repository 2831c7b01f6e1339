use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::resources::bounceconfig::BounceConfig;

/// Advance every head by one frame.
///
/// Velocities are in pixels per frame, so no time delta is applied. Spin is
/// cosmetic: it grows with speed, turns the way the head travels
/// horizontally, and never feeds back into the physics.
pub fn movement(
    mut query: Query<(&mut MapPosition, &RigidBody, &mut Rotation)>,
    config: Option<Res<BounceConfig>>,
) {
    let spin = config.map(|c| c.heads.spin).unwrap_or_default();
    for (mut position, rigidbody, mut rotation) in query.iter_mut() {
        rotation.radians += rigidbody.spin_direction() * rigidbody.speed() * spin;
        position.pos = position.pos + rigidbody.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(movement);
        schedule.run(world);
    }

    #[test]
    fn moves_by_velocity_once_per_run() {
        let mut world = World::new();
        let e = world
            .spawn((
                MapPosition::new(10.0, 20.0),
                RigidBody::new(2.0, -3.0),
                Rotation::default(),
            ))
            .id();
        run(&mut world);
        run(&mut world);
        let pos = world.get::<MapPosition>(e).unwrap();
        assert_eq!((pos.x(), pos.y()), (14.0, 14.0));
    }

    #[test]
    fn spin_follows_horizontal_direction() {
        let mut world = World::new();
        let mut config = BounceConfig::new();
        config.heads.spin = 0.01;
        world.insert_resource(config);
        let right = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                RigidBody::new(3.0, 4.0),
                Rotation::default(),
            ))
            .id();
        let left = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                RigidBody::new(-3.0, 4.0),
                Rotation::default(),
            ))
            .id();
        run(&mut world);
        assert!((world.get::<Rotation>(right).unwrap().radians - 0.05).abs() < 1e-6);
        assert!((world.get::<Rotation>(left).unwrap().radians + 0.05).abs() < 1e-6);
    }

    #[test]
    fn no_config_means_no_spin() {
        let mut world = World::new();
        let e = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                RigidBody::new(3.0, 4.0),
                Rotation::default(),
            ))
            .id();
        run(&mut world);
        assert_eq!(world.get::<Rotation>(e).unwrap().radians, 0.0);
    }
}
