//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the bounds overlay
//! - `gameconfig` – window and debug settings loaded from INI
//! - `renderqueue` – sorted draw parameters for the current frame
//! - `screensize` – current viewport dimensions in pixels
//! - `shaderstore` – loaded shaders keyed by string IDs (non-send)
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod renderqueue;
pub mod screensize;
pub mod shaderstore;
pub mod texturestore;
pub mod worldtime;
