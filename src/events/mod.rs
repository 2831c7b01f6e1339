//! Event types and observers.
//!
//! Submodules:
//! - [`detection`] – commands and messages for the background detection thread
//! - [`showcontrol`] – keyboard show controls (mode, counts, camera)
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod detection;
pub mod showcontrol;
pub mod switchdebug;
