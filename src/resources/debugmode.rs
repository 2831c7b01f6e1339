//! Debug overlay toggle.
//!
//! While this resource exists the renderer draws the debug overlay (frame
//! rate, head counts per partition, detection status). F11 inserts or
//! removes it through [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
