//! Head lifecycle: reconcile a partition against a desired image list.
//!
//! Both managers feed heads through [`reconcile_partition`]: the show
//! controls for the preset partition and the detection merge for the
//! detected partition. Slot `i` of the partition is pointed at the `i`-th
//! desired texture key. Existing heads keep their position, velocity and
//! spin; only missing slots are spawned and surplus slots are despawned.
//!
//! These functions take the whole [`World`] and run between frames (from
//! [`sync_show_state`](super::presets::sync_show_state) and
//! [`apply_detection_results`](super::detection::apply_detection_results)),
//! never concurrently with the physics systems.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::head::Head;
use crate::components::headimage::HeadImage;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::slot::{OriginKind, Slot};
use crate::resources::bounceconfig::{BounceConfig, HeadSettings};
use crate::resources::canvassize::CanvasSize;
use crate::resources::spawnrng::SpawnRng;

/// Texture key of detected slot `index`.
///
/// The key stays with the slot: a new face for the same slot is uploaded
/// behind the same key, swapping the pixels without touching the head.
pub fn detected_key(index: usize) -> String {
    format!("detected/{index}")
}

/// What a reconciliation did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Heads kept in place (image key possibly swapped).
    pub reused: usize,
    /// Heads created for slots that did not exist.
    pub spawned: usize,
    /// Heads removed because the desired list got shorter.
    pub dropped: usize,
}

/// Make the `kind` partition show exactly `keys`, in order.
///
/// Heads of the other partition are never touched. An empty `keys` empties
/// the partition.
pub fn reconcile_partition<K: AsRef<str>>(
    world: &mut World,
    kind: OriginKind,
    keys: &[K],
) -> MergeReport {
    let mut existing: Vec<(Slot, Entity)> = {
        let mut q = world.query::<(Entity, &Slot)>();
        q.iter(world)
            .filter(|(_, slot)| slot.kind == kind)
            .map(|(entity, slot)| (*slot, entity))
            .collect()
    };
    existing.sort();

    let mut report = MergeReport::default();

    for (index, key) in keys.iter().enumerate() {
        let key = key.as_ref();
        match existing.get(index) {
            Some(&(slot, entity)) => {
                if let Some(mut image) = world.get_mut::<HeadImage>(entity) {
                    image.swap(key);
                }
                if slot.index != index {
                    world.entity_mut(entity).insert(Slot { kind, index });
                }
                report.reused += 1;
            }
            None => {
                spawn_head(world, Slot { kind, index }, key);
                report.spawned += 1;
            }
        }
    }

    for &(slot, entity) in existing.iter().skip(keys.len()) {
        if world.despawn(entity) {
            debug!("Dropped {} head {}", kind.name(), slot.index);
            report.dropped += 1;
        }
    }

    report
}

/// Spawn a head in `slot` at a random position with a random velocity.
///
/// The position is uniform over the canvas area where the head fits
/// entirely. Each velocity axis gets a magnitude in
/// `[min_speed, max_speed)` and an independent random sign.
pub fn spawn_head(world: &mut World, slot: Slot, tex_key: &str) -> Entity {
    let settings: HeadSettings = world
        .get_resource::<BounceConfig>()
        .map(|c| c.heads)
        .unwrap_or_default();
    let canvas = world
        .get_resource::<CanvasSize>()
        .copied()
        .unwrap_or(CanvasSize { w: 0, h: 0 });
    let head = Head::new(settings.size);

    let (position, body) = {
        let mut rng = world.get_resource_or_insert_with(SpawnRng::default);
        let x = rng.range(0.0, head.max_origin(canvas.width()));
        let y = rng.range(0.0, head.max_origin(canvas.height()));
        let dx = rng.sign() * rng.range(settings.min_speed, settings.max_speed);
        let dy = rng.sign() * rng.range(settings.min_speed, settings.max_speed);
        (MapPosition::new(x, y), RigidBody::new(dx, dy))
    };

    debug!(
        "Spawned {} head {} '{}' at ({:.1}, {:.1})",
        slot.kind.name(),
        slot.index,
        tex_key,
        position.pos.x,
        position.pos.y
    );

    world
        .spawn((
            head,
            slot,
            HeadImage::new(tex_key),
            position,
            body,
            Rotation::default(),
        ))
        .id()
}
