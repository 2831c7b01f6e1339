//! Event and observer to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource, which the renderer checks each frame.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event used to toggle the [`DebugMode`] resource on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode {});
        info!("Debug overlay enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::Observer;

    #[test]
    fn each_trigger_flips_the_overlay() {
        let mut world = World::new();
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(world.contains_resource::<DebugMode>());

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
