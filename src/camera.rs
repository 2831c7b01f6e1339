//! Camera and face detector seams.
//!
//! The show does not grab video or run a detection model itself. It talks to
//! both through the traits in this module, from the detection thread (see
//! [`crate::systems::detection::detection_thread`]):
//!
//! - [`CameraProvider`] opens a [`Camera`]; the open camera is held in a
//!   [`CameraLease`] that releases it when dropped, so every way out of a
//!   detection session gives the device back.
//! - [`FaceDetector`] turns a [`Frame`] into [`FaceBox`]es.
//! - [`crop_face`] cuts a circular face image out of a frame for each kept
//!   box.
//!
//! [`NoCamera`] and [`NoDetector`] are the built-in backends: the former
//! always reports the camera as unavailable, which the show treats as zero
//! detections.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use smallvec::SmallVec;
use thiserror::Error;

use crate::paint::mask_circle;
use crate::resources::bounceconfig::DetectionSettings;

/// A captured video frame.
pub type Frame = RgbaImage;

/// Faces kept from one detection cycle.
pub type FaceBoxes = SmallVec<[FaceBox; 8]>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectionError {
    /// The camera could not be opened (no device, permission denied, ...).
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    /// The camera is open but has no frame yet. The cycle is skipped.
    #[error("camera not ready")]
    NotReady,
    /// Grabbing a frame failed; the session ends and the camera is released.
    #[error("capture failed: {0}")]
    Capture(String),
    /// The detector failed on a frame (model not loaded, bad input, ...).
    #[error("detector failed: {0}")]
    Detector(String),
}

/// Bounding box of a detected face, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Detection confidence score.
    pub score: f32,
}

/// An open video source.
pub trait Camera: Send {
    fn grab(&mut self) -> Result<Frame, DetectionError>;

    /// Give the device back. Called exactly once, by [`CameraLease`].
    fn release(&mut self);
}

/// Opens cameras for detection sessions.
pub trait CameraProvider: Send {
    fn open(&mut self) -> Result<Box<dyn Camera>, DetectionError>;
}

/// Pluggable face detection backend.
///
/// Implementations may be stateful (e.g., tracking across frames),
/// hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, DetectionError>;
}

/// An open camera that is released when the lease is dropped.
pub struct CameraLease {
    camera: Box<dyn Camera>,
}

impl CameraLease {
    pub fn new(camera: Box<dyn Camera>) -> Self {
        Self { camera }
    }

    pub fn grab(&mut self) -> Result<Frame, DetectionError> {
        self.camera.grab()
    }
}

impl Drop for CameraLease {
    fn drop(&mut self) {
        self.camera.release();
    }
}

/// Provider used when no camera backend is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl CameraProvider for NoCamera {
    fn open(&mut self) -> Result<Box<dyn Camera>, DetectionError> {
        Err(DetectionError::CameraUnavailable(
            "no camera backend configured".to_string(),
        ))
    }
}

/// Detector that never finds a face.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDetector;

impl FaceDetector for NoDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceBox>, DetectionError> {
        Ok(Vec::new())
    }
}

/// Keep boxes scoring at least the threshold, in detector order, up to
/// `max_faces` of them.
pub fn select_faces(boxes: &[FaceBox], settings: &DetectionSettings) -> FaceBoxes {
    boxes
        .iter()
        .filter(|b| b.score >= settings.score_threshold && b.width > 0.0 && b.height > 0.0)
        .take(settings.max_faces)
        .copied()
        .collect()
}

/// Cut the face in `face` out of `frame` as a round, square image.
///
/// The crop is centered on the box, `crop_scale` times its width and
/// `crop_scale * crop_aspect` times its height, resampled to
/// `crop_size × crop_size` and masked to the inscribed circle. Parts of the
/// crop that fall outside the frame come out transparent.
pub fn crop_face(frame: &Frame, face: &FaceBox, settings: &DetectionSettings) -> RgbaImage {
    let cx = face.x + face.width / 2.0;
    let cy = face.y + face.height / 2.0;
    let crop_w = (face.width * settings.crop_scale).round().max(1.0);
    let crop_h = (face.height * settings.crop_scale * settings.crop_aspect)
        .round()
        .max(1.0);
    let left = (cx - crop_w / 2.0).round() as i64;
    let top = (cy - crop_h / 2.0).round() as i64;

    // Transparent canvas the size of the crop, with the frame laid over it
    // so that only the part inside the frame is copied.
    let mut canvas = RgbaImage::new(crop_w as u32, crop_h as u32);
    imageops::replace(&mut canvas, frame, -left, -top);

    let n = settings.crop_size.max(1);
    let mut out = imageops::resize(&canvas, n, n, FilterType::Nearest);
    mask_circle(&mut out);
    out
}
