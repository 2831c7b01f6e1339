//! Show systems.
//!
//! This module groups all ECS systems that advance the simulation, manage
//! the heads, read input and draw.
//!
//! Submodules overview
//! - [`bounds`] – reflect heads off the canvas edges and clamp them inside
//! - [`collision`] – pairwise equal-mass elastic collisions
//! - [`detection`] – detection thread loop and merge of its results
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`merge`] – reconcile a head partition against a list of images
//! - [`movement`] – integrate positions and spin from velocities
//! - [`presets`] – keep the preset partition in line with the show state
//! - [`render`] – draw heads and overlays using Raylib
//! - [`textures`] – upload queued images as textures

pub mod bounds;
pub mod collision;
pub mod detection;
pub mod input;
pub mod merge;
pub mod movement;
pub mod presets;
pub mod render;
pub mod textures;
