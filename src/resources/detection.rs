//! ECS resource that bridges the main thread with the detection thread.
//!
//! Use [`setup_detection`] once during initialization to spawn the thread and
//! insert the [`DetectionBridge`]. Call [`shutdown_detection`] during teardown
//! to stop the thread, which releases the camera, and join it.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{error, info, warn};

use crate::camera::{CameraProvider, FaceDetector};
use crate::events::detection::{DetectionCmd, DetectionMessage};
use crate::resources::bounceconfig::{BounceConfig, DetectionSettings};
use crate::systems::detection::detection_thread;

/// Shared bridge between the ECS world and the detection thread.
///
/// Tracks which session is active. Only messages stamped with the active
/// session are applied; anything else was produced by a session that has
/// since been stopped or replaced.
#[derive(Resource)]
pub struct DetectionBridge {
    /// Sender for [`DetectionCmd`] messages (ECS -> detection thread).
    pub tx_cmd: Sender<DetectionCmd>,
    /// Receiver for [`DetectionMessage`] messages (detection thread -> ECS).
    pub rx_msg: Receiver<DetectionMessage>,
    /// Join handle for the background thread.
    pub handle: Option<std::thread::JoinHandle<()>>,
    next_session: u64,
    active_session: Option<u64>,
}

impl DetectionBridge {
    /// Bridge over existing channels, with no thread attached.
    pub fn new(tx_cmd: Sender<DetectionCmd>, rx_msg: Receiver<DetectionMessage>) -> Self {
        Self {
            tx_cmd,
            rx_msg,
            handle: None,
            next_session: 1,
            active_session: None,
        }
    }

    pub fn active_session(&self) -> Option<u64> {
        self.active_session
    }

    pub fn is_running(&self) -> bool {
        self.active_session.is_some()
    }

    /// Start a detection session unless one is already running.
    ///
    /// Returns the id of the new session, or `None` if nothing was started.
    pub fn start(&mut self) -> Option<u64> {
        if self.active_session.is_some() {
            return None;
        }
        let session = self.next_session;
        self.next_session += 1;
        if self.tx_cmd.send(DetectionCmd::Start { session }).is_err() {
            warn!("Detection thread is gone, cannot start session {}", session);
            return None;
        }
        info!("Detection session {} started", session);
        self.active_session = Some(session);
        Some(session)
    }

    /// Stop the running session. From now on its results are discarded.
    ///
    /// Returns `true` if a session was running.
    pub fn stop(&mut self) -> bool {
        let Some(session) = self.active_session.take() else {
            return false;
        };
        // Ignore send errors: a dead thread holds no camera.
        let _ = self.tx_cmd.send(DetectionCmd::Stop);
        info!("Detection session {} stopped", session);
        true
    }

    /// The thread ended `session` on its own and already released the
    /// camera. Forget it if it is the active one, without sending a command.
    ///
    /// Returns `true` if the active session was cleared.
    pub fn session_ended(&mut self, session: u64) -> bool {
        if self.active_session != Some(session) {
            return false;
        }
        self.active_session = None;
        info!("Detection session {} ended by the detection thread", session);
        true
    }
}

/// Spawn the detection thread and register the bridge resource.
///
/// Detection settings come from the [`BounceConfig`] resource when present.
/// If the thread cannot be spawned the show runs without detection.
pub fn setup_detection(
    world: &mut World,
    provider: Box<dyn CameraProvider>,
    detector: Box<dyn FaceDetector>,
) {
    let settings: DetectionSettings = world
        .get_resource::<BounceConfig>()
        .map(|c| c.detection)
        .unwrap_or_default();

    let (tx_cmd, rx_cmd) = unbounded::<DetectionCmd>();
    let (tx_msg, rx_msg) = unbounded::<DetectionMessage>();

    let spawned = std::thread::Builder::new()
        .name("detection".to_string())
        .spawn(move || detection_thread(rx_cmd, tx_msg, provider, detector, settings));

    match spawned {
        Ok(handle) => {
            let mut bridge = DetectionBridge::new(tx_cmd, rx_msg);
            bridge.handle = Some(handle);
            world.insert_resource(bridge);
        }
        Err(e) => {
            error!("Failed to spawn detection thread, camera faces disabled: {}", e);
        }
    }
}

/// Gracefully request shutdown of the detection thread and join it.
///
/// If the bridge resource exists, sends [`DetectionCmd::Shutdown`], waits for
/// the thread to exit, and removes the resource from the world.
pub fn shutdown_detection(world: &mut World) {
    if let Some(mut bridge) = world.remove_resource::<DetectionBridge>() {
        let _ = bridge.tx_cmd.send(DetectionCmd::Shutdown);
        if let Some(handle) = bridge.handle.take() {
            if handle.join().is_err() {
                error!("Detection thread panicked");
            }
        }
    }
}
