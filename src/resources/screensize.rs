//! Screen size resource.
//!
//! Stores the current viewport dimensions in pixels. Sprite centering
//! operations read it to place sprites in the middle of the render surface.

use bevy_ecs::prelude::Resource;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
