//! Mirroring flags for sprite rendering.

use serde::{Deserialize, Serialize};

/// Horizontal/vertical mirroring applied at draw time.
///
/// raylib mirrors a texture when the source rectangle has a negative extent,
/// so [`SpriteFlip::source_signs`] gives the multipliers for the source size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFlip {
    #[serde(default)]
    pub horizontal: bool,
    #[serde(default)]
    pub vertical: bool,
}

impl SpriteFlip {
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    pub fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn source_signs(&self) -> (f32, f32) {
        (
            if self.horizontal { -1.0 } else { 1.0 },
            if self.vertical { -1.0 } else { 1.0 },
        )
    }
}
