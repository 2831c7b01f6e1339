//! Keep heads inside the canvas.
//!
//! A head touching or crossing an edge has the matching velocity component
//! negated and is clamped back so it lies fully inside. Without the clamp a
//! head that overshoots by more than one step would flip direction every
//! frame and never come back.

use bevy_ecs::prelude::*;

use crate::components::head::Head;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::canvassize::CanvasSize;

/// Reflect one axis. Returns `true` when the head hit an edge.
///
/// `pos` is the top-left coordinate, `size` the head diameter and `extent`
/// the canvas length on that axis. A canvas smaller than the head pins it at
/// zero.
pub fn reflect_axis(pos: &mut f32, vel: &mut f32, size: f32, extent: f32) -> bool {
    if *pos <= 0.0 || *pos + size >= extent {
        *vel = -*vel;
        *pos = pos.min(extent - size).max(0.0);
        true
    } else {
        false
    }
}

pub fn bounds(
    mut query: Query<(&Head, &mut MapPosition, &mut RigidBody)>,
    canvas: Res<CanvasSize>,
) {
    let (w, h) = (canvas.width(), canvas.height());
    for (head, mut position, mut body) in query.iter_mut() {
        let MapPosition { pos } = &mut *position;
        let velocity = &mut body.velocity;
        reflect_axis(&mut pos.x, &mut velocity.x, head.size, w);
        reflect_axis(&mut pos.y, &mut velocity.y, head.size, h);
    }
}
