//! Show controls: mode, preset counts and camera toggle.
//!
//! [`ShowState`] is the preset manager's state. Keyboard controls change it
//! through [`ShowControlEvent`](crate::events::showcontrol::ShowControlEvent);
//! every effective change flags the state for a resync, which the
//! [`sync_show_state`](crate::systems::presets::sync_show_state) system
//! consumes to reconcile the preset partition and start or stop detection.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;

use crate::art::{COMPANY_KEYS, MAX_COMPANY_PRESETS, MAX_PEOPLE_PRESETS, PEOPLE_KEYS};

/// Capacity of a preset selection.
pub const MAX_PRESETS: usize = if MAX_PEOPLE_PRESETS > MAX_COMPANY_PRESETS {
    MAX_PEOPLE_PRESETS
} else {
    MAX_COMPANY_PRESETS
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShowMode {
    /// Company logos only; detection is off.
    #[default]
    Company,
    /// Placeholder faces plus camera faces while the camera is enabled.
    People,
}

impl ShowMode {
    pub fn label(&self) -> &'static str {
        match self {
            ShowMode::Company => "Company",
            ShowMode::People => "People",
        }
    }

    fn keys(&self) -> &'static [&'static str] {
        match self {
            ShowMode::Company => &COMPANY_KEYS,
            ShowMode::People => &PEOPLE_KEYS,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ShowState {
    pub mode: ShowMode,
    company_count: usize,
    people_count: usize,
    pub camera_enabled: bool,
    pending_sync: bool,
}

impl Default for ShowState {
    fn default() -> Self {
        Self::new(ShowMode::Company, false)
    }
}

impl ShowState {
    /// Initial state. Always starts flagged so the first frame spawns presets.
    pub fn new(mode: ShowMode, camera_enabled: bool) -> Self {
        Self {
            mode,
            company_count: 1,
            people_count: 1,
            camera_enabled,
            pending_sync: true,
        }
    }

    pub fn set_mode(&mut self, mode: ShowMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.pending_sync = true;
        true
    }

    pub fn toggle_camera(&mut self) {
        self.camera_enabled = !self.camera_enabled;
        self.pending_sync = true;
    }

    /// Upper bound for the preset count of the current mode.
    pub fn max_presets(&self) -> usize {
        self.mode.keys().len()
    }

    pub fn preset_count(&self) -> usize {
        match self.mode {
            ShowMode::Company => self.company_count,
            ShowMode::People => self.people_count,
        }
    }

    /// Step the preset count of the current mode, clamped to `[1, max]`.
    /// Returns `true` when the count changed.
    pub fn step_count(&mut self, delta: i32) -> bool {
        let max = self.max_presets();
        let count = match self.mode {
            ShowMode::Company => &mut self.company_count,
            ShowMode::People => &mut self.people_count,
        };
        let next = (*count as i64 + delta as i64).clamp(1, max as i64) as usize;
        if next == *count {
            return false;
        }
        *count = next;
        self.pending_sync = true;
        true
    }

    /// Texture keys of the presets that should be on screen, in slot order.
    ///
    /// Never empty: a count below one falls back to the first preset of the
    /// mode so the show always has something to bounce.
    pub fn desired_presets(&self) -> ArrayVec<&'static str, MAX_PRESETS> {
        let keys = self.mode.keys();
        let count = self.preset_count().clamp(1, keys.len());
        keys[..count].iter().copied().collect()
    }

    /// A detection session should be running.
    pub fn wants_detection(&self) -> bool {
        self.mode == ShowMode::People && self.camera_enabled
    }

    /// Detected heads stay on screen. With the camera off in people mode the
    /// last detected faces keep bouncing; only company mode clears them.
    pub fn keeps_detected(&self) -> bool {
        self.mode == ShowMode::People
    }

    /// Consume the resync flag.
    pub fn take_pending_sync(&mut self) -> bool {
        std::mem::take(&mut self.pending_sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_with_one_preset() {
        let mut show = ShowState::default();
        assert!(show.take_pending_sync());
        assert!(!show.take_pending_sync());
        assert_eq!(show.desired_presets().as_slice(), &["company/statsig"]);
    }

    #[test]
    fn counts_clamp_per_mode() {
        let mut show = ShowState::default();
        show.take_pending_sync();
        assert!(show.step_count(1));
        assert!(!show.step_count(1));
        assert_eq!(show.preset_count(), 2);
        assert!(show.step_count(-1));
        assert!(!show.step_count(-1));
        assert_eq!(show.preset_count(), 1);

        show.set_mode(ShowMode::People);
        for _ in 0..10 {
            show.step_count(1);
        }
        assert_eq!(show.preset_count(), MAX_PEOPLE_PRESETS);
        assert_eq!(show.desired_presets().len(), MAX_PEOPLE_PRESETS);
    }

    #[test]
    fn counts_are_remembered_per_mode() {
        let mut show = ShowState::default();
        show.step_count(1);
        show.set_mode(ShowMode::People);
        assert_eq!(show.preset_count(), 1);
        show.set_mode(ShowMode::Company);
        assert_eq!(show.preset_count(), 2);
    }

    #[test]
    fn setting_same_mode_is_not_a_change() {
        let mut show = ShowState::default();
        show.take_pending_sync();
        assert!(!show.set_mode(ShowMode::Company));
        assert!(!show.take_pending_sync());
    }

    #[test]
    fn detection_only_in_people_mode_with_camera() {
        let mut show = ShowState::new(ShowMode::Company, true);
        assert!(!show.wants_detection());
        show.set_mode(ShowMode::People);
        assert!(show.wants_detection());
        show.toggle_camera();
        assert!(!show.wants_detection());
        assert!(show.keeps_detected());
        show.set_mode(ShowMode::Company);
        assert!(!show.keeps_detected());
    }
}
