//! Origin kind and partition slot of a head.
//!
//! Heads live in two partitions: presets, owned by the show controls, and
//! detected faces, owned by the detection feed. A [`Slot`] records which
//! partition a head belongs to and its index inside it.
//!
//! The derived ordering sorts every preset before every detected head and
//! then by index, which gives the registry order `presets ++ detected`. That
//! order is used for collision pairing and drawing (last drawn is topmost).

use bevy_ecs::prelude::Component;

/// Which manager owns a head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OriginKind {
    /// Logo or placeholder face chosen through the show controls.
    Preset,
    /// Face cropped from the camera by the detection feed.
    Detected,
}

impl OriginKind {
    pub fn name(&self) -> &'static str {
        match self {
            OriginKind::Preset => "preset",
            OriginKind::Detected => "detected",
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub kind: OriginKind,
    pub index: usize,
}

impl Slot {
    pub fn preset(index: usize) -> Self {
        Self {
            kind: OriginKind::Preset,
            index,
        }
    }

    pub fn detected(index: usize) -> Self {
        Self {
            kind: OriginKind::Detected,
            index,
        }
    }

    pub fn is_preset(&self) -> bool {
        self.kind == OriginKind::Preset
    }
}
