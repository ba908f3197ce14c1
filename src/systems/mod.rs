//! Engine systems.
//!
//! Submodules overview
//! - [`render`] – collect sprite render parameters and draw them with raylib
//! - [`sprite`] – lazy texture binding and the per-frame sprite update
//! - [`spritelayout`] – spawn sprites from JSON layouts
//! - [`time`] – update simulation time and delta

pub mod render;
pub mod sprite;
pub mod spritelayout;
pub mod time;
