//! Preset manager.
//!
//! Keeps the preset partition in line with [`ShowState`] and starts or
//! stops camera detection when the show wants it.

use bevy_ecs::prelude::*;
use log::debug;

use crate::art::all_presets;
use crate::components::slot::OriginKind;
use crate::resources::detection::DetectionBridge;
use crate::resources::pendingimages::PendingImages;
use crate::resources::showstate::ShowState;
use crate::systems::merge::reconcile_partition;

/// Queue the painted preset art for upload.
pub fn queue_preset_art(world: &mut World) {
    let mut pending = world.get_resource_or_insert_with(PendingImages::default);
    for art in all_presets() {
        pending.push(art.key, art.image);
    }
}

/// Apply a flagged [`ShowState`] change.
///
/// Reconciles the preset partition against the desired presets, then starts
/// a detection session if the show wants one and none runs, or stops the
/// running one. Detected heads are dropped only when leaving people mode;
/// turning the camera off leaves the last detected faces in place.
pub fn sync_show_state(world: &mut World) {
    let (desired, wants_detection, keeps_detected) = {
        let Some(mut show) = world.get_resource_mut::<ShowState>() else {
            return;
        };
        if !show.take_pending_sync() {
            return;
        }
        (
            show.desired_presets(),
            show.wants_detection(),
            show.keeps_detected(),
        )
    };

    let report = reconcile_partition(world, OriginKind::Preset, desired.as_slice());
    debug!(
        "Presets: {} reused, {} spawned, {} dropped",
        report.reused, report.spawned, report.dropped
    );

    if wants_detection {
        if let Some(mut bridge) = world.get_resource_mut::<DetectionBridge>() {
            bridge.start();
        }
    } else if let Some(mut bridge) = world.get_resource_mut::<DetectionBridge>() {
        bridge.stop();
    }

    if !keeps_detected {
        let none: [&str; 0] = [];
        reconcile_partition(world, OriginKind::Detected, &none);
    }
}
