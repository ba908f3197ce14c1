//! Basic sprite library.
//!
//! A 2D sprite transform model on top of raylib and bevy_ecs: clipping,
//! destination, pivot, scale, rotation and orientation kept consistent under
//! any update order, exported once per frame as draw parameters.

pub mod components;
pub mod error;
pub mod resources;
pub mod systems;
