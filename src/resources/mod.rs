//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, input state, show
//! controls, texture handling and the detection bridge.
//!
//! Overview
//! - `bounceconfig` – settings loaded from `config.ini`
//! - `canvassize` – current window dimensions in pixels
//! - `debugmode` – presence toggles the debug overlay
//! - `detection` – bridge and channels for the background detection thread
//! - `input` – per-frame keyboard state of the show controls
//! - `pendingimages` – images waiting to be uploaded as textures
//! - `showstate` – mode, preset counts and camera toggle
//! - `spawnrng` – random source for spawn positions and velocities
//! - `texturestore` – uploaded textures keyed by string IDs
pub mod bounceconfig;
pub mod canvassize;
pub mod debugmode;
pub mod detection;
pub mod input;
pub mod pendingimages;
pub mod showstate;
pub mod spawnrng;
pub mod texturestore;
