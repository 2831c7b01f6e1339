//! Per-frame keyboard input resource.
//!
//! Captures the keys the show reacts to and exposes them to systems via the
//! [`InputState`] resource. Each action may be bound to several keys; it is
//! active while any of them is held.
//!
//! Default bindings:
//! - `]` / `[` – more / fewer presets in the current mode
//! - `P` / `C` – people / company mode
//! - `T` – toggle the camera
//! - `Ctrl` or `Cmd` (held) – help panel
//! - `F11` – debug overlay
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether a bound key is currently held this frame.
    pub active: bool,
    /// Whether a bound key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether a bound key was just released this frame.
    pub just_released: bool,

    /// The keys bound to this action.
    pub key_bindings: &'static [KeyboardKey],
}

impl BoolState {
    const fn bound(key_bindings: &'static [KeyboardKey]) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_bindings,
        }
    }

    /// Update from per-key checks for held, pressed and released keys.
    pub fn update(
        &mut self,
        is_down: impl Fn(KeyboardKey) -> bool,
        is_pressed: impl Fn(KeyboardKey) -> bool,
        is_released: impl Fn(KeyboardKey) -> bool,
    ) {
        self.active = self.key_bindings.iter().any(|k| is_down(*k));
        self.just_pressed = self.key_bindings.iter().any(|k| is_pressed(*k));
        self.just_released = self.key_bindings.iter().any(|k| is_released(*k));
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(&[])
    }
}

/// Resource capturing the per-frame keyboard state of the show controls.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub count_up: BoolState,
    pub count_down: BoolState,
    pub mode_people: BoolState,
    pub mode_company: BoolState,
    pub camera_toggle: BoolState,
    pub help: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            count_up: BoolState::bound(&[KeyboardKey::KEY_RIGHT_BRACKET]),
            count_down: BoolState::bound(&[KeyboardKey::KEY_LEFT_BRACKET]),
            mode_people: BoolState::bound(&[KeyboardKey::KEY_P]),
            mode_company: BoolState::bound(&[KeyboardKey::KEY_C]),
            camera_toggle: BoolState::bound(&[KeyboardKey::KEY_T]),
            help: BoolState::bound(&[
                KeyboardKey::KEY_LEFT_CONTROL,
                KeyboardKey::KEY_RIGHT_CONTROL,
                KeyboardKey::KEY_LEFT_SUPER,
                KeyboardKey::KEY_RIGHT_SUPER,
            ]),
            mode_debug: BoolState::bound(&[KeyboardKey::KEY_F11]),
        }
    }
}
