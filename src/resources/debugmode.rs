//! Debug toggle resource.
//!
//! The mere presence of this resource makes the render pass outline each
//! sprite's rotated bounds. Remove it to disable the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws sprite bounds.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
