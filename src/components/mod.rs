//! ECS components for heads.
//!
//! Every bouncing head is one entity carrying all of these. The registry
//! order used by collision and drawing is the [`slot::Slot`] order: presets
//! first, then detected faces, each by index.
//!
//! Submodules overview:
//! - [`head`] – circular sprite of a fixed diameter
//! - [`headimage`] – texture key of the picture shown on the head
//! - [`mapposition`] – top-left corner of the head on the canvas
//! - [`rigidbody`] – velocity in pixels per frame
//! - [`rotation`] – cosmetic spin angle in radians
//! - [`slot`] – which manager owns the head and at which index

pub mod head;
pub mod headimage;
pub mod mapposition;
pub mod rigidbody;
pub mod rotation;
pub mod slot;
