//! Detection thread end-to-end: a fake camera and detector feed faces through
//! the bridge into the detected partition, and the camera is handed back on
//! mode switch and on shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use bevy_ecs::prelude::*;
use image::RgbaImage;

use bounceheads::camera::{Camera, CameraProvider, DetectionError, FaceBox, FaceDetector, Frame};
use bounceheads::components::headimage::HeadImage;
use bounceheads::components::slot::{OriginKind, Slot};
use bounceheads::paint::WHITE;
use bounceheads::resources::bounceconfig::BounceConfig;
use bounceheads::resources::canvassize::CanvasSize;
use bounceheads::resources::detection::{DetectionBridge, setup_detection, shutdown_detection};
use bounceheads::resources::pendingimages::PendingImages;
use bounceheads::resources::showstate::{ShowMode, ShowState};
use bounceheads::resources::spawnrng::SpawnRng;
use bounceheads::systems::detection::apply_detection_results;
use bounceheads::systems::presets::sync_show_state;

#[derive(Default, Clone)]
struct Counters {
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

struct StillCamera {
    counters: Counters,
}

impl Camera for StillCamera {
    fn grab(&mut self) -> Result<Frame, DetectionError> {
        Ok(RgbaImage::from_pixel(320, 240, WHITE))
    }

    fn release(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

struct StillProvider {
    counters: Counters,
}

impl CameraProvider for StillProvider {
    fn open(&mut self) -> Result<Box<dyn Camera>, DetectionError> {
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StillCamera {
            counters: self.counters.clone(),
        }))
    }
}

/// Opens fine, then every grab fails as if the device was unplugged.
struct UnpluggedCamera {
    counters: Counters,
}

impl Camera for UnpluggedCamera {
    fn grab(&mut self) -> Result<Frame, DetectionError> {
        Err(DetectionError::Capture("device unplugged".to_string()))
    }

    fn release(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

struct UnpluggedProvider {
    counters: Counters,
}

impl CameraProvider for UnpluggedProvider {
    fn open(&mut self) -> Result<Box<dyn Camera>, DetectionError> {
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(UnpluggedCamera {
            counters: self.counters.clone(),
        }))
    }
}

/// Finds two faces and one box below the score threshold.
struct TwoFaces;

impl FaceDetector for TwoFaces {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceBox>, DetectionError> {
        let face = |x: f32, score: f32| FaceBox {
            x,
            y: 80.0,
            width: 60.0,
            height: 60.0,
            score,
        };
        Ok(vec![face(20.0, 0.9), face(120.0, 0.01), face(220.0, 0.6)])
    }
}

fn make_world(counters: &Counters) -> World {
    make_world_with(Box::new(StillProvider {
        counters: counters.clone(),
    }))
}

fn make_world_with(provider: Box<dyn CameraProvider>) -> World {
    let mut world = World::new();
    let mut config = BounceConfig::new();
    config.detection.period = Duration::from_millis(10);
    config.detection.crop_size = 32;
    world.insert_resource(config);
    world.insert_resource(CanvasSize { w: 800, h: 600 });
    world.insert_resource(SpawnRng::seeded(7));
    world.insert_resource(PendingImages::default());
    world.insert_resource(ShowState::new(ShowMode::People, true));
    setup_detection(&mut world, provider, Box::new(TwoFaces));
    world
}

fn detected_keys(world: &mut World) -> Vec<String> {
    let mut q = world.query::<(&Slot, &HeadImage)>();
    let mut rows: Vec<_> = q
        .iter(world)
        .filter(|(s, _)| s.kind == OriginKind::Detected)
        .map(|(s, img)| (s.index, img.tex_key.clone()))
        .collect();
    rows.sort();
    rows.into_iter().map(|(_, k)| k).collect()
}

fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if done() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn faces_arrive_and_camera_is_released_on_company_mode() {
    let counters = Counters::default();
    let mut world = make_world(&counters);
    assert!(world.contains_resource::<DetectionBridge>());

    sync_show_state(&mut world);
    let arrived = wait_until(|| {
        apply_detection_results(&mut world);
        detected_keys(&mut world).len() == 2
    });
    assert!(arrived, "detected faces never arrived");
    assert_eq!(detected_keys(&mut world), vec!["detected/0", "detected/1"]);
    assert!(world.resource::<PendingImages>().is_pending("detected/1"));
    assert_eq!(counters.opened.load(Ordering::SeqCst), 1);

    world.resource_mut::<ShowState>().set_mode(ShowMode::Company);
    sync_show_state(&mut world);
    assert!(detected_keys(&mut world).is_empty());
    assert!(wait_until(|| counters.released.load(Ordering::SeqCst) == 1));

    // Nothing from the stopped session shows up afterwards.
    std::thread::sleep(Duration::from_millis(50));
    apply_detection_results(&mut world);
    assert!(detected_keys(&mut world).is_empty());

    shutdown_detection(&mut world);
    assert!(!world.contains_resource::<DetectionBridge>());
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
}

#[test]
fn shutdown_releases_a_running_camera() {
    let counters = Counters::default();
    let mut world = make_world(&counters);
    sync_show_state(&mut world);
    assert!(wait_until(|| counters.opened.load(Ordering::SeqCst) == 1));

    shutdown_detection(&mut world);
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
}

#[test]
fn lost_camera_ends_the_session_and_the_next_sync_reopens_it() {
    let counters = Counters::default();
    let mut world = make_world_with(Box::new(UnpluggedProvider {
        counters: counters.clone(),
    }));
    sync_show_state(&mut world);
    assert_eq!(world.resource::<DetectionBridge>().active_session(), Some(1));

    let idle = wait_until(|| {
        apply_detection_results(&mut world);
        !world.resource::<DetectionBridge>().is_running()
    });
    assert!(idle, "bridge never learned the session ended");
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
    assert!(detected_keys(&mut world).is_empty());

    // Any show change that still wants detection starts a fresh session.
    world.resource_mut::<ShowState>().step_count(1);
    sync_show_state(&mut world);
    assert_eq!(world.resource::<DetectionBridge>().active_session(), Some(2));
    assert!(wait_until(|| counters.opened.load(Ordering::SeqCst) == 2));

    shutdown_detection(&mut world);
    assert!(wait_until(|| counters.released.load(Ordering::SeqCst) == 2));
}
