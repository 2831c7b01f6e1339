//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Show controls are emitted as
//!   [`ShowControlEvent`](crate::events::showcontrol::ShowControlEvent)s and
//!   F11 toggles the debug overlay via
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;
use smallvec::SmallVec;

use crate::events::showcontrol::{ShowAction, ShowControlEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Show actions requested this frame, in a fixed order.
pub fn show_actions(input: &InputState) -> SmallVec<[ShowAction; 5]> {
    let mut actions = SmallVec::new();
    if input.mode_people.just_pressed {
        actions.push(ShowAction::PeopleMode);
    }
    if input.mode_company.just_pressed {
        actions.push(ShowAction::CompanyMode);
    }
    if input.camera_toggle.just_pressed {
        actions.push(ShowAction::ToggleCamera);
    }
    if input.count_up.just_pressed {
        actions.push(ShowAction::CountUp);
    }
    if input.count_down.just_pressed {
        actions.push(ShowAction::CountDown);
    }
    actions
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    let keys = &mut *input;
    for state in [
        &mut keys.count_up,
        &mut keys.count_down,
        &mut keys.mode_people,
        &mut keys.mode_company,
        &mut keys.camera_toggle,
        &mut keys.help,
        &mut keys.mode_debug,
    ] {
        state.update(is_key_down, is_key_pressed, is_key_released);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    for action in show_actions(&input) {
        commands.trigger(ShowControlEvent { action });
    }
}
