//! Headless frame integration tests: show sync, detection merge, movement,
//! bounds and collision run as one schedule, the way the main loop runs them.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use image::RgbaImage;
use raylib::prelude::Vector2;

use bounceheads::components::head::Head;
use bounceheads::components::headimage::HeadImage;
use bounceheads::components::mapposition::MapPosition;
use bounceheads::components::rigidbody::RigidBody;
use bounceheads::components::rotation::Rotation;
use bounceheads::components::slot::{OriginKind, Slot};
use bounceheads::events::detection::DetectionMessage;
use bounceheads::events::showcontrol::{ShowAction, ShowControlEvent, show_control_observer};
use bounceheads::resources::bounceconfig::BounceConfig;
use bounceheads::resources::canvassize::CanvasSize;
use bounceheads::resources::detection::DetectionBridge;
use bounceheads::resources::pendingimages::PendingImages;
use bounceheads::resources::showstate::{ShowMode, ShowState};
use bounceheads::resources::spawnrng::SpawnRng;
use bounceheads::systems::bounds::bounds;
use bounceheads::systems::collision::collision;
use bounceheads::systems::detection::apply_detection_results;
use bounceheads::systems::movement::movement;
use bounceheads::systems::presets::sync_show_state;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(show: ShowState) -> World {
    let mut world = World::new();
    world.insert_resource(CanvasSize { w: 800, h: 600 });
    world.insert_resource(BounceConfig::new());
    world.insert_resource(SpawnRng::seeded(42));
    world.insert_resource(PendingImages::default());
    world.insert_resource(show);
    world
}

fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            sync_show_state,
            apply_detection_results,
            movement,
            bounds,
            collision,
        )
            .chain(),
    );
    schedule
}

fn physics_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, bounds, collision).chain());
    schedule
}

fn spawn_at(world: &mut World, slot: Slot, x: f32, y: f32, dx: f32, dy: f32) -> Entity {
    world
        .spawn((
            Head::new(120.0),
            slot,
            HeadImage::new("test"),
            MapPosition::new(x, y),
            RigidBody::new(dx, dy),
            Rotation::default(),
        ))
        .id()
}

fn count(world: &mut World, kind: OriginKind) -> usize {
    let mut q = world.query::<&Slot>();
    q.iter(world).filter(|s| s.kind == kind).count()
}

#[test]
fn corner_preset_bounces_back_on_first_frame() {
    let mut world = make_world(ShowState::default());
    let e = spawn_at(&mut world, Slot::preset(0), 0.0, 0.0, -2.0, -2.0);
    physics_schedule().run(&mut world);

    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(body.velocity.x, 2.0));
    assert!(approx_eq(body.velocity.y, 2.0));
    let pos = world.get::<MapPosition>(e).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn right_edge_reflects_and_clamps() {
    let mut world = make_world(ShowState::default());
    let e = spawn_at(&mut world, Slot::preset(0), 679.0, 300.0, 3.0, 0.5);
    physics_schedule().run(&mut world);

    let body = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(body.velocity.x, -3.0));
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, 680.0));
}

#[test]
fn head_on_pair_exchanges_velocities_after_movement() {
    let mut world = make_world(ShowState::default());
    // Centers end up at (100,100) and (150,100) after one step of movement.
    let a = spawn_at(&mut world, Slot::preset(0), 35.0, 40.0, 5.0, 0.0);
    let b = spawn_at(&mut world, Slot::detected(0), 95.0, 40.0, -5.0, 0.0);
    physics_schedule().run(&mut world);

    assert!(approx_eq(world.get::<RigidBody>(a).unwrap().velocity.x, -5.0));
    assert!(approx_eq(world.get::<RigidBody>(b).unwrap().velocity.x, 5.0));
    let pa = world.get::<MapPosition>(a).unwrap().pos;
    let pb = world.get::<MapPosition>(b).unwrap().pos;
    let d = ((pb.x - pa.x).powi(2) + (pb.y - pa.y).powi(2)).sqrt();
    assert!(approx_eq(d, 120.0));
}

#[test]
fn cluster_collisions_conserve_momentum_away_from_walls() {
    let mut world = make_world(ShowState::default());
    spawn_at(&mut world, Slot::preset(0), 240.0, 240.0, 1.5, 0.5);
    spawn_at(&mut world, Slot::preset(1), 330.0, 250.0, -2.0, 0.0);
    spawn_at(&mut world, Slot::detected(0), 290.0, 330.0, 0.0, -2.5);

    let total = |world: &mut World| {
        let mut q = world.query::<&RigidBody>();
        q.iter(world).fold(Vector2 { x: 0.0, y: 0.0 }, |acc, b| Vector2 {
            x: acc.x + b.velocity.x,
            y: acc.y + b.velocity.y,
        })
    };
    let before = total(&mut world);
    let mut schedule = physics_schedule();
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    let after = total(&mut world);
    assert!(approx_eq(before.x, after.x));
    assert!(approx_eq(before.y, after.y));
}

#[test]
fn many_frames_keep_every_head_inside() {
    let mut world = make_world(ShowState::new(ShowMode::People, false));
    world.resource_mut::<ShowState>().step_count(4);
    // Containment holds right after reflection; collision may push a head
    // past a wall until the next frame's reflection.
    let mut schedule = Schedule::default();
    schedule.add_systems((sync_show_state, movement, bounds).chain());
    for frame in 0..2_000 {
        if frame == 500 {
            world.insert_resource(CanvasSize { w: 500, h: 400 });
        }
        schedule.run(&mut world);
        let canvas = *world.resource::<CanvasSize>();
        let mut q = world.query::<(&Head, &MapPosition)>();
        for (head, pos) in q.iter(&world) {
            assert!(pos.pos.x >= 0.0 && pos.pos.x <= canvas.width() - head.size + EPSILON);
            assert!(pos.pos.y >= 0.0 && pos.pos.y <= canvas.height() - head.size + EPSILON);
        }
    }
}

#[test]
fn show_controls_drive_presets_through_observer() {
    let mut world = make_world(ShowState::default());
    world.spawn(Observer::new(show_control_observer));
    world.flush();
    let mut schedule = frame_schedule();
    schedule.run(&mut world);
    assert_eq!(count(&mut world, OriginKind::Preset), 1);

    world.trigger(ShowControlEvent {
        action: ShowAction::CountUp,
    });
    schedule.run(&mut world);
    assert_eq!(count(&mut world, OriginKind::Preset), 2);

    world.trigger(ShowControlEvent {
        action: ShowAction::PeopleMode,
    });
    schedule.run(&mut world);
    let mut q = world.query::<(&Slot, &HeadImage)>();
    let keys: Vec<String> = q.iter(&world).map(|(_, img)| img.tex_key.clone()).collect();
    assert_eq!(keys, vec!["people/gold".to_string()]);
}

#[test]
fn detected_faces_join_and_leave_without_touching_presets() {
    let (tx_cmd, _rx_cmd) = crossbeam_channel::unbounded();
    let (tx_msg, rx_msg) = crossbeam_channel::unbounded();
    let mut world = make_world(ShowState::new(ShowMode::People, true));
    world.insert_resource(DetectionBridge::new(tx_cmd, rx_msg));
    let mut schedule = frame_schedule();
    schedule.run(&mut world);

    let session = world
        .resource::<DetectionBridge>()
        .active_session()
        .expect("people mode with camera starts a session");
    let preset = {
        let mut q = world.query::<(Entity, &Slot)>();
        q.iter(&world).find(|(_, s)| s.is_preset()).map(|(e, _)| e).unwrap()
    };
    let motion = |world: &World| {
        (
            world.get::<MapPosition>(preset).unwrap().pos,
            world.get::<RigidBody>(preset).unwrap().velocity,
            world.get::<Rotation>(preset).unwrap().radians,
        )
    };
    let before = motion(&world);

    // Merge on its own, without a physics step in between.
    tx_msg
        .send(DetectionMessage::Faces {
            session,
            images: vec![RgbaImage::new(4, 4); 3],
        })
        .unwrap();
    apply_detection_results(&mut world);
    assert_eq!(count(&mut world, OriginKind::Detected), 3);
    assert_eq!(count(&mut world, OriginKind::Preset), 1);
    assert_eq!(motion(&world), before);

    tx_msg
        .send(DetectionMessage::Faces {
            session,
            images: vec![RgbaImage::new(4, 4)],
        })
        .unwrap();
    apply_detection_results(&mut world);
    assert_eq!(count(&mut world, OriginKind::Detected), 1);
    assert_eq!(motion(&world), before);

    // Full frames from here on.
    schedule.run(&mut world);
    assert_eq!(count(&mut world, OriginKind::Detected), 1);

    world.resource_mut::<ShowState>().set_mode(ShowMode::Company);
    schedule.run(&mut world);
    assert_eq!(count(&mut world, OriginKind::Detected), 0);
    assert!(!world.resource::<DetectionBridge>().is_running());

    // A late result from the stopped session never lands.
    tx_msg
        .send(DetectionMessage::Faces {
            session,
            images: vec![RgbaImage::new(4, 4); 2],
        })
        .unwrap();
    schedule.run(&mut world);
    assert_eq!(count(&mut world, OriginKind::Detected), 0);
}
