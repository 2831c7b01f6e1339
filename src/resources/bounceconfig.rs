//! Show configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides safe
//! defaults so the show starts even without a file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! title = Bounce Heads
//!
//! [heads]
//! size = 120
//! min_speed = 1.5
//! max_speed = 3.0
//! spin = 0.001
//!
//! [detection]
//! period_ms = 500
//! score_threshold = 0.05
//! crop_scale = 2.0
//! crop_aspect = 1.2
//! crop_size = 200
//! max_faces = 12
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Bounce Heads";
const DEFAULT_HEAD_SIZE: f32 = 120.0;
const DEFAULT_MIN_SPEED: f32 = 1.5;
const DEFAULT_MAX_SPEED: f32 = 3.0;
const DEFAULT_SPIN: f32 = 0.001;
const DEFAULT_PERIOD_MS: u64 = 500;
const DEFAULT_SCORE_THRESHOLD: f32 = 0.05;
const DEFAULT_CROP_SCALE: f32 = 2.0;
const DEFAULT_CROP_ASPECT: f32 = 1.2;
const DEFAULT_CROP_SIZE: u32 = 200;
const DEFAULT_MAX_FACES: usize = 12;
/// Largest accepted `crop_size`; face images are uploaded as textures.
pub const MAX_CROP_SIZE: u32 = 1024;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Size and motion of newly spawned heads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadSettings {
    /// Diameter in pixels.
    pub size: f32,
    /// Per-axis speed range `[min_speed, max_speed)` in pixels per frame.
    pub min_speed: f32,
    pub max_speed: f32,
    /// Radians of spin per pixel of travel.
    pub spin: f32,
}

impl Default for HeadSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_HEAD_SIZE,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            spin: DEFAULT_SPIN,
        }
    }
}

/// Settings handed to the detection thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionSettings {
    /// Period of the detection cycle.
    pub period: Duration,
    /// Boxes scoring below this are ignored.
    pub score_threshold: f32,
    /// Crop width is `box width * crop_scale`.
    pub crop_scale: f32,
    /// Crop height is `box height * crop_scale * crop_aspect`.
    pub crop_aspect: f32,
    /// Side of the square face image produced per box.
    pub crop_size: u32,
    /// At most this many faces are kept per cycle.
    pub max_faces: usize,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            crop_scale: DEFAULT_CROP_SCALE,
            crop_aspect: DEFAULT_CROP_ASPECT,
            crop_size: DEFAULT_CROP_SIZE,
            max_faces: DEFAULT_MAX_FACES,
        }
    }
}

/// Show configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct BounceConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second; heads move per frame, so this sets their pace.
    pub target_fps: u32,
    pub title: String,
    pub heads: HeadSettings,
    pub detection: DetectionSettings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            heads: HeadSettings::default(),
            detection: DetectionSettings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or malformed values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps.min(u32::MAX as u64) as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [heads] section
        if let Some(size) = config.getfloat("heads", "size").ok().flatten() {
            self.heads.size = size as f32;
        }
        if let Some(speed) = config.getfloat("heads", "min_speed").ok().flatten() {
            self.heads.min_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("heads", "max_speed").ok().flatten() {
            self.heads.max_speed = speed as f32;
        }
        if let Some(spin) = config.getfloat("heads", "spin").ok().flatten() {
            self.heads.spin = spin as f32;
        }

        // [detection] section
        if let Some(ms) = config.getuint("detection", "period_ms").ok().flatten() {
            self.detection.period = Duration::from_millis(ms.max(1));
        }
        if let Some(t) = config
            .getfloat("detection", "score_threshold")
            .ok()
            .flatten()
        {
            self.detection.score_threshold = t as f32;
        }
        if let Some(s) = config.getfloat("detection", "crop_scale").ok().flatten() {
            self.detection.crop_scale = s as f32;
        }
        if let Some(a) = config.getfloat("detection", "crop_aspect").ok().flatten() {
            self.detection.crop_aspect = a as f32;
        }
        if let Some(size) = config.getuint("detection", "crop_size").ok().flatten() {
            self.detection.crop_size = size.min(MAX_CROP_SIZE as u64) as u32;
        }
        if let Some(max) = config.getuint("detection", "max_faces").ok().flatten() {
            self.detection.max_faces = max as usize;
        }

        self.sanitize();

        info!(
            "Loaded config: {}x{} window, fps={}, head size={}, speed={}..{}, detection every {:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.heads.size,
            self.heads.min_speed,
            self.heads.max_speed,
            self.detection.period
        );

        Ok(())
    }

    /// Repair values that would break spawning, pacing or cropping.
    fn sanitize(&mut self) {
        // Zero means uncapped in raylib, and speeds are per frame.
        if self.target_fps == 0 {
            self.target_fps = DEFAULT_TARGET_FPS;
        }
        self.detection.crop_size = self.detection.crop_size.clamp(1, MAX_CROP_SIZE);
        if self.detection.crop_scale <= 0.0 {
            self.detection.crop_scale = DEFAULT_CROP_SCALE;
        }
        if self.detection.crop_aspect <= 0.0 {
            self.detection.crop_aspect = DEFAULT_CROP_ASPECT;
        }
        if self.heads.size <= 0.0 {
            self.heads.size = DEFAULT_HEAD_SIZE;
        }
        if self.heads.min_speed < 0.0 {
            self.heads.min_speed = 0.0;
        }
        if self.heads.max_speed < self.heads.min_speed {
            std::mem::swap(&mut self.heads.min_speed, &mut self.heads.max_speed);
        }
    }
}
