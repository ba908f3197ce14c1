//! Per-frame draw parameters exported by sprites.
//!
//! [`RenderParameters`] is the complete description of one textured quad:
//! everything raylib's `draw_texture_pro` needs plus the blend mode, optional
//! shader and the view transform to draw under. The destination rectangle is
//! anchored at the sprite's center because the quad is drawn around its pivot.

use raylib::prelude::{BlendMode, Camera2D, Color, Rectangle, Vector2};
use std::sync::Arc;

use crate::components::pixelrect::PixelRect;
use crate::components::spriteflip::SpriteFlip;

#[derive(Clone, Debug)]
pub struct RenderParameters {
    /// Key of the texture in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub texture_key: String,
    /// Region of the texture to draw, in texture pixels.
    pub source: PixelRect,
    /// Screen rectangle whose `x`/`y` is the sprite's center.
    pub destination: PixelRect,
    /// Rotation origin in texture pixels.
    pub pivot: Vector2,
    pub rotation_radians: f32,
    pub tint: Color,
    pub flip: SpriteFlip,
    pub blend_mode: BlendMode,
    /// Key of a shader in the [`ShaderStore`](crate::resources::shaderstore::ShaderStore).
    pub shader: Option<Arc<str>>,
    pub view: Camera2D,
    pub draw_order: i32,
}

impl RenderParameters {
    /// Source rectangle with negative extents for mirrored axes.
    pub fn source_rectangle(&self) -> Rectangle {
        let (sx, sy) = self.flip.source_signs();
        let mut rect = self.source.to_rectangle();
        rect.width *= sx;
        rect.height *= sy;
        rect
    }

    pub fn destination_rectangle(&self) -> Rectangle {
        self.destination.to_rectangle()
    }

    /// Pivot scaled from texture pixels into destination pixels.
    ///
    /// raylib measures the origin in the destination rectangle, unlike the
    /// pivot which lives in source space.
    pub fn origin(&self) -> Vector2 {
        let sx = self.destination.width as f32 / self.source.width as f32;
        let sy = self.destination.height as f32 / self.source.height as f32;
        Vector2::new(self.pivot.x * sx, self.pivot.y * sy)
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_radians.to_degrees()
    }
}
