//! Detection feed: background thread and main-thread merge.
//!
//! - [`detection_thread`] runs on its own OS thread, owns the camera lease
//!   and the detector, and runs one detection cycle per tick while a session
//!   is active.
//! - [`apply_detection_results`] runs on the main thread once per frame,
//!   before the physics systems. It drains the message channel and merges
//!   the latest result of the active session into the detected partition.
//!
//! The thread never touches the ECS world; the only way its results reach
//! the heads is through the channel drain, so a frame always sees either the
//! previous or the next detection result in full.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, never, select, tick};
use image::RgbaImage;
use log::{debug, info, warn};
use std::time::Instant;

use crate::camera::{
    CameraLease, CameraProvider, DetectionError, FaceDetector, crop_face, select_faces,
};
use crate::components::slot::OriginKind;
use crate::events::detection::{DetectionCmd, DetectionMessage};
use crate::resources::bounceconfig::DetectionSettings;
use crate::resources::detection::DetectionBridge;
use crate::resources::pendingimages::PendingImages;
use crate::systems::merge::{detected_key, reconcile_partition};

/// A running detection session on the detection thread.
struct Session {
    id: u64,
    camera: CameraLease,
    ticker: Receiver<Instant>,
}

/// Grab one frame, detect faces and crop them.
///
/// Returns the cropped images in detector order.
pub fn run_cycle(
    camera: &mut CameraLease,
    detector: &mut dyn FaceDetector,
    settings: &DetectionSettings,
) -> Result<Vec<RgbaImage>, DetectionError> {
    let frame = camera.grab()?;
    let boxes = detector.detect(&frame)?;
    Ok(select_faces(&boxes, settings)
        .iter()
        .map(|face| crop_face(&frame, face, settings))
        .collect())
}

/// Entry point of the dedicated detection thread.
///
/// Responsibilities:
/// - Open the camera on [`DetectionCmd::Start`] and hold it in a
///   [`CameraLease`] for the length of the session.
/// - Tick every `settings.period` while a session is active and send one
///   [`DetectionMessage`] per completed cycle.
/// - Drop the session, releasing the camera, on [`DetectionCmd::Stop`], on a
///   capture failure, on [`DetectionCmd::Shutdown`] and when either channel
///   is disconnected.
/// - Follow a failed open or a capture failure with
///   [`DetectionMessage::Ended`], so the main thread knows the session is
///   over without having been stopped.
///
/// Blocks until shut down.
pub fn detection_thread(
    rx_cmd: Receiver<DetectionCmd>,
    tx_msg: Sender<DetectionMessage>,
    mut provider: Box<dyn CameraProvider>,
    mut detector: Box<dyn FaceDetector>,
    settings: DetectionSettings,
) {
    info!(
        "[detection] thread starting (id={:?}, period={:?})",
        std::thread::current().id(),
        settings.period
    );

    let mut session: Option<Session> = None;

    'run: loop {
        let ticks = session
            .as_ref()
            .map(|s| s.ticker.clone())
            .unwrap_or_else(never);

        select! {
            recv(rx_cmd) -> cmd => match cmd {
                Ok(DetectionCmd::Start { session: id }) => {
                    // Release the previous camera before opening a new one.
                    session = None;
                    match provider.open() {
                        Ok(camera) => {
                            info!("[detection] session {} opened camera", id);
                            session = Some(Session {
                                id,
                                camera: CameraLease::new(camera),
                                ticker: tick(settings.period),
                            });
                        }
                        Err(e) => {
                            warn!("[detection] session {}: {}", id, e);
                            let failed = DetectionMessage::Failed { session: id, error: e.to_string() };
                            if tx_msg.send(failed).is_err()
                                || tx_msg.send(DetectionMessage::Ended { session: id }).is_err()
                            {
                                break 'run;
                            }
                        }
                    }
                }
                Ok(DetectionCmd::Stop) => {
                    if let Some(s) = session.take() {
                        info!("[detection] session {} stopped, camera released", s.id);
                    }
                }
                Ok(DetectionCmd::Shutdown) | Err(_) => break 'run,
            },
            recv(ticks) -> _ => {
                let Some(s) = session.as_mut() else { continue 'run };
                let id = s.id;
                let mut ended = false;
                let message = match run_cycle(&mut s.camera, detector.as_mut(), &settings) {
                    Ok(images) => {
                        debug!("[detection] session {}: {} face(s)", id, images.len());
                        DetectionMessage::Faces { session: id, images }
                    }
                    Err(DetectionError::NotReady) => continue 'run,
                    Err(e) => {
                        warn!("[detection] session {}: {}", id, e);
                        if matches!(e, DetectionError::Capture(_)) {
                            session = None;
                            ended = true;
                            info!("[detection] session {} ended, camera released", id);
                        }
                        DetectionMessage::Failed { session: id, error: e.to_string() }
                    }
                };
                if tx_msg.send(message).is_err() {
                    break 'run;
                }
                if ended && tx_msg.send(DetectionMessage::Ended { session: id }).is_err() {
                    break 'run;
                }
            }
        }
    }

    drop(session);
    info!("[detection] thread exiting");
}

/// Drain the detection channel and merge the latest active-session result.
///
/// Messages from sessions other than the active one are discarded. A failed
/// cycle counts as zero detections: every detected head is dropped and the
/// presets are left alone. When the thread reports that it ended the active
/// session, the bridge forgets it so the next show sync can start a new one.
pub fn apply_detection_results(world: &mut World) {
    let (latest, ended) = {
        let Some(bridge) = world.get_resource::<DetectionBridge>() else {
            return;
        };
        let active = bridge.active_session();
        let mut latest = None;
        let mut ended = None;
        for message in bridge.rx_msg.try_iter() {
            if Some(message.session()) != active {
                debug!("Discarding result of stale session {}", message.session());
                continue;
            }
            match message {
                DetectionMessage::Ended { session } => ended = Some(session),
                result => latest = Some(result),
            }
        }
        (latest, ended)
    };

    match latest {
        None | Some(DetectionMessage::Ended { .. }) => {}
        Some(DetectionMessage::Faces { images, .. }) => merge_detected_faces(world, images),
        Some(DetectionMessage::Failed { error, .. }) => {
            warn!("Detection failed, showing presets only: {}", error);
            merge_detected_faces(world, Vec::new());
        }
    }

    if let Some(session) = ended
        && let Some(mut bridge) = world.get_resource_mut::<DetectionBridge>()
    {
        bridge.session_ended(session);
    }
}

/// Point detected slot `i` at the `i`-th image, spawning or dropping heads
/// so that exactly `images.len()` detected heads remain.
pub fn merge_detected_faces(world: &mut World, images: Vec<RgbaImage>) {
    let keys: Vec<String> = (0..images.len()).map(detected_key).collect();
    {
        let mut pending = world.get_resource_or_insert_with(PendingImages::default);
        for (key, image) in keys.iter().zip(images) {
            pending.push(key.clone(), image);
        }
    }
    let report = reconcile_partition(world, OriginKind::Detected, keys.as_slice());
    if report.spawned > 0 || report.dropped > 0 {
        debug!(
            "Detected heads: {} reused, {} spawned, {} dropped",
            report.reused, report.spawned, report.dropped
        );
    }
}
