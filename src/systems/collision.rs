//! Pairwise elastic collisions between heads.
//!
//! Heads are equal-mass circles. Every unordered pair is visited once per
//! frame in slot order. A pair that overlaps and is still closing swaps the
//! normal components of its velocities and is pushed apart so the circles
//! just touch. Pairs that already separate are left alone, so a dense
//! cluster may take a few frames to come apart.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::head::Head;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::slot::Slot;

/// A head as seen by the solver: top-left position, velocity and diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vector2,
    pub vel: Vector2,
    pub size: f32,
}

impl Body {
    fn center(&self) -> Vector2 {
        Head::new(self.size).center(self.pos)
    }
}

/// Resolve one pair. Returns `true` if the pair collided.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let ca = a.center();
    let cb = b.center();
    let delta = Vector2 {
        x: cb.x - ca.x,
        y: cb.y - ca.y,
    };
    let d = (delta.x * delta.x + delta.y * delta.y).sqrt();
    let r = a.size / 2.0 + b.size / 2.0;
    // Coincident centers have no normal.
    if d == 0.0 || d > r {
        return false;
    }

    let n = Vector2 {
        x: delta.x / d,
        y: delta.y / d,
    };
    let closing = RigidBody {
        velocity: Vector2 {
            x: a.vel.x - b.vel.x,
            y: a.vel.y - b.vel.y,
        },
    }
    .along(n);
    if closing <= 0.0 {
        return false;
    }

    a.vel.x -= closing * n.x;
    a.vel.y -= closing * n.y;
    b.vel.x += closing * n.x;
    b.vel.y += closing * n.y;

    let push = (r - d) / 2.0;
    a.pos.x -= push * n.x;
    a.pos.y -= push * n.y;
    b.pos.x += push * n.x;
    b.pos.y += push * n.y;
    true
}

/// Resolve every pair `i < j` once, in index order. Returns the number of
/// collisions.
pub fn resolve_all(bodies: &mut [Body]) -> usize {
    let mut hits = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                hits += 1;
            }
        }
    }
    hits
}

pub fn collision(mut query: Query<(Entity, &Slot, &Head, &mut MapPosition, &mut RigidBody)>) {
    let mut gathered: Vec<(Slot, Entity, Body)> = query
        .iter()
        .map(|(entity, slot, head, position, body)| {
            let solver_body = Body {
                pos: position.pos,
                vel: body.velocity,
                size: head.size,
            };
            (*slot, entity, solver_body)
        })
        .collect();
    gathered.sort_by(|a, b| a.0.cmp(&b.0));
    let (entities, mut bodies): (Vec<Entity>, Vec<Body>) =
        gathered.into_iter().map(|(_, e, b)| (e, b)).unzip();

    if resolve_all(&mut bodies) == 0 {
        return;
    }

    for (entity, solved) in entities.into_iter().zip(bodies) {
        if let Ok((_, _, _, mut position, mut body)) = query.get_mut(entity) {
            if position.pos != solved.pos {
                position.pos = solved.pos;
            }
            if body.velocity != solved.vel {
                body.velocity = solved.vel;
            }
        }
    }
}
