//! Bounce Heads library.
//!
//! Exposes the show's art, camera seams, ECS components, resources, systems
//! and events for use in integration tests and by the binary.

pub mod art;
pub mod camera;
pub mod components;
pub mod events;
pub mod paint;
pub mod resources;
pub mod systems;
