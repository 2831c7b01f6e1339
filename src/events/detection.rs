//! Detection thread commands and messages.
//!
//! Commands ([`DetectionCmd`]) are sent by the main thread to the detection
//! thread through [`DetectionBridge`](crate::resources::detection::DetectionBridge);
//! messages ([`DetectionMessage`]) flow back and are drained once per frame by
//! [`apply_detection_results`](crate::systems::detection::apply_detection_results).
//!
//! Every session started with [`DetectionCmd::Start`] carries a fresh id and
//! every message is stamped with the id of the session that produced it, so
//! results still in flight when a session is stopped can be recognised and
//! discarded.

use image::RgbaImage;

/// Commands understood by the detection thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionCmd {
    /// Open the camera and start the periodic detection cycle.
    /// Replaces any running session.
    Start { session: u64 },
    /// Cancel the periodic cycle and release the camera.
    Stop,
    /// Release everything and end the thread.
    Shutdown,
}

/// Results produced by the detection thread.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionMessage {
    /// Cropped face images of one cycle, in detector order. May be empty.
    Faces { session: u64, images: Vec<RgbaImage> },
    /// The cycle failed; treated as zero detections.
    Failed { session: u64, error: String },
    /// The thread ended the session on its own (camera could not be opened
    /// or stopped delivering frames) and holds no camera for it any more.
    Ended { session: u64 },
}

impl DetectionMessage {
    pub fn session(&self) -> u64 {
        match self {
            DetectionMessage::Faces { session, .. }
            | DetectionMessage::Failed { session, .. }
            | DetectionMessage::Ended { session } => *session,
        }
    }
}
