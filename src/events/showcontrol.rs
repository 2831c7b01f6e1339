//! Show control events.
//!
//! The input system turns key presses into [`ShowControlEvent`]s;
//! [`show_control_observer`] applies them to [`ShowState`]. Effective
//! changes flag the state so the presets are reconciled on the same frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::showstate::{ShowMode, ShowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowAction {
    CountUp,
    CountDown,
    PeopleMode,
    CompanyMode,
    ToggleCamera,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ShowControlEvent {
    pub action: ShowAction,
}

pub fn show_control_observer(trigger: On<ShowControlEvent>, mut show: ResMut<ShowState>) {
    let changed = match trigger.event().action {
        ShowAction::CountUp => show.step_count(1),
        ShowAction::CountDown => show.step_count(-1),
        ShowAction::PeopleMode => show.set_mode(ShowMode::People),
        ShowAction::CompanyMode => show.set_mode(ShowMode::Company),
        ShowAction::ToggleCamera => {
            show.toggle_camera();
            true
        }
    };
    if changed {
        info!(
            "Show: {} mode, {}/{} presets, camera {}",
            show.mode.label(),
            show.preset_count(),
            show.max_presets(),
            if show.camera_enabled { "on" } else { "off" }
        );
    }
}
