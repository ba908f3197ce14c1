//! Sprite transform component.
//!
//! A [`SpriteTransform`] keeps a texture's clipping rectangle, the on-screen
//! destination derived from it, and the pivot, scale and rotation that tie
//! the two together. Only `clipping`, `destination`, `position` and the
//! rotation are stored; scale and pivot are computed from them on read, so
//! they can never go stale.
//!
//! The sprite is either *unbound* (no texture yet) or *bound*. Most geometry
//! operations need a texture and fail with [`SpriteError::InvalidState`]
//! until one is assigned. There is no way back to unbound.
//!
//! Every setter validates against the current state first, then computes the
//! full new geometry and commits it in one assignment, so a failed call never
//! leaves a half-updated sprite.
//!
//! Screen space is y-down: rotation turns clockwise on screen, `Up` starts as
//! `(0, -1)` and `Right` as `(1, 0)`.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{BlendMode, Camera2D, Color, Vector2};
use std::sync::Arc;

use crate::components::direction::Direction;
use crate::components::pixelrect::PixelRect;
use crate::components::renderparams::RenderParameters;
use crate::components::rotation::{Rotation, rotate_vector};
use crate::components::spritecamera::identity_view;
use crate::components::spriteflip::SpriteFlip;
use crate::error::{Result, SpriteError};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{TextureSource, TextureStore};
use crate::resources::worldtime::WorldTime;

/// The two capabilities the frame loop needs from anything drawable.
pub trait SpriteDrawable {
    /// Advance per-frame state. Runs in the update pass.
    ///
    /// A plain [`SpriteTransform`] has nothing to advance; animated or tiled
    /// sprite variants override this.
    fn update(&mut self, _time: &WorldTime) {}

    /// Camera entity whose view should be used, if any.
    fn camera(&self) -> Option<Entity>;

    /// Draw parameters for this frame, or `None` when there is nothing to draw.
    ///
    /// `camera_view` is the view of the resolved camera; when absent the
    /// sprite's own view is used.
    fn export_render_parameters(&self, camera_view: Option<Camera2D>) -> Option<RenderParameters>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoundTexture {
    width: i32,
    height: i32,
}

/// Derived geometry computed ahead of a commit.
struct Geometry {
    clipping: PixelRect,
    destination: PixelRect,
}

impl Geometry {
    /// Lay out `clipping` at `position` with the given scale.
    ///
    /// Destination extents are truncated and never drop below one pixel.
    fn layout(position: Vector2, clipping: PixelRect, scale: Vector2) -> Self {
        Self {
            clipping,
            destination: PixelRect::new(
                position.x.floor() as i32,
                position.y.floor() as i32,
                ((clipping.width as f32 * scale.x) as i32).max(1),
                ((clipping.height as f32 * scale.y) as i32).max(1),
            ),
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct SpriteTransform {
    name: String,
    tag: Option<String>,
    texture_key: Option<String>,
    texture: Option<BoundTexture>,
    position: Vector2,
    destination: PixelRect,
    clipping: PixelRect,
    rotation: Rotation,
    tint: Color,
    flip: SpriteFlip,
    blend_mode: BlendMode,
    shader: Option<Arc<str>>,
    view: Camera2D,
    camera: Option<Entity>,
    enabled: bool,
    visible: bool,
    draw_order: i32,
}

impl SpriteTransform {
    /// Unbound sprite without a texture name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = non_empty(name.into(), "name")?;
        Ok(Self {
            name,
            tag: None,
            texture_key: None,
            texture: None,
            position: Vector2::zero(),
            destination: PixelRect::default(),
            clipping: PixelRect::default(),
            rotation: Rotation::default(),
            tint: Color::WHITE,
            flip: SpriteFlip::NONE,
            blend_mode: BlendMode::BLEND_ALPHA,
            shader: None,
            view: identity_view(),
            camera: None,
            enabled: true,
            visible: true,
            draw_order: 0,
        })
    }

    /// Unbound sprite that binds `texture_key` once the texture is loaded.
    pub fn named(name: impl Into<String>, texture_key: impl Into<String>) -> Result<Self> {
        let mut sprite = Self::new(name)?;
        sprite.texture_key = Some(non_empty(texture_key.into(), "texture key")?);
        Ok(sprite)
    }

    /// Sprite bound right away to `texture_key` from `store`.
    pub fn load(
        name: impl Into<String>,
        texture_key: impl Into<String>,
        store: &TextureStore,
    ) -> Result<Self> {
        let texture_key = texture_key.into();
        let texture = store.get(&texture_key).ok_or_else(|| {
            SpriteError::InvalidArgument(format!("texture '{}' is not loaded", texture_key))
        })?;
        Self::with_texture(name, texture_key, texture)
    }

    /// Sprite bound to `texture`, which is registered under `texture_key`.
    pub fn with_texture(
        name: impl Into<String>,
        texture_key: impl Into<String>,
        texture: &impl TextureSource,
    ) -> Result<Self> {
        let mut sprite = Self::new(name)?;
        sprite.set_texture(texture_key, texture)?;
        Ok(sprite)
    }

    // --------------- Identity and flags ---------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = non_empty(name.into(), "name")?;
        Ok(())
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) -> Result<()> {
        self.tag = Some(non_empty(tag.into(), "tag")?);
        Ok(())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    pub fn set_draw_order(&mut self, draw_order: i32) {
        self.draw_order = draw_order;
    }

    // --------------- Texture ---------------

    pub fn is_bound(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture_key(&self) -> Option<&str> {
        self.texture_key.as_deref()
    }

    /// Texture name waiting to be resolved, for sprites that are still unbound.
    pub fn pending_texture(&self) -> Option<&str> {
        match self.texture {
            Some(_) => None,
            None => self.texture_key.as_deref(),
        }
    }

    /// Bind a texture.
    ///
    /// A sprite without a usable clip gets the full texture. An existing clip
    /// is shrunk to fit the new texture; if its origin lies outside the
    /// texture it falls back to the full texture. The current scale is kept.
    pub fn set_texture(
        &mut self,
        texture_key: impl Into<String>,
        texture: &impl TextureSource,
    ) -> Result<()> {
        let texture_key = non_empty(texture_key.into(), "texture key")?;
        let (width, height) = texture.texture_size();
        if width <= 0 || height <= 0 {
            return Err(SpriteError::InvalidArgument(format!(
                "texture '{}' is empty ({}x{})",
                texture_key, width, height
            )));
        }

        let full = PixelRect::new(0, 0, width, height);
        let clipping = if self.clipping.has_area() {
            let shrunk = PixelRect::new(
                self.clipping.x,
                self.clipping.y,
                self.clipping.width.min(width - self.clipping.x),
                self.clipping.height.min(height - self.clipping.y),
            );
            if shrunk.has_area() { shrunk } else { full }
        } else {
            full
        };

        let geometry = Geometry::layout(self.position, clipping, self.current_scale());
        self.commit(geometry);
        self.texture = Some(BoundTexture { width, height });
        log::debug!(
            "sprite '{}' bound to '{}' ({}x{})",
            self.name,
            texture_key,
            width,
            height
        );
        self.texture_key = Some(texture_key);
        Ok(())
    }

    pub fn texture_size(&self) -> Result<(i32, i32)> {
        let tex = self.bound("query the texture size")?;
        Ok((tex.width, tex.height))
    }

    // --------------- Position ---------------

    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Move the top-left corner; the destination follows at whole pixels.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.destination.x = position.x.floor() as i32;
        self.destination.y = position.y.floor() as i32;
    }

    pub fn center_position(&self) -> Result<Vector2> {
        self.bound("query the center position")?;
        Ok(self.center_unchecked())
    }

    pub fn set_center_position(&mut self, center: Vector2) -> Result<()> {
        self.bound("set the center position")?;
        let half = self.half_size();
        self.set_position(Vector2::new(center.x - half.x, center.y - half.y));
        Ok(())
    }

    pub fn move_by(&mut self, shift: Vector2) {
        self.set_position(Vector2::new(
            self.position.x + shift.x,
            self.position.y + shift.y,
        ));
    }

    pub fn move_xy(&mut self, x: f32, y: f32) {
        self.move_by(Vector2::new(x, y));
    }

    pub fn move_center(&mut self, shift: Vector2) -> Result<()> {
        let center = self.center_position()?;
        self.set_center_position(Vector2::new(center.x + shift.x, center.y + shift.y))
    }

    pub fn move_center_xy(&mut self, x: f32, y: f32) -> Result<()> {
        self.move_center(Vector2::new(x, y))
    }

    /// Center the sprite horizontally in the viewport.
    pub fn center_horizontally(&mut self, screen: &ScreenSize) -> Result<()> {
        self.bound("center the sprite")?;
        let x = (screen.w - self.destination.width) as f32 / 2.0;
        self.set_position(Vector2::new(x, self.position.y));
        Ok(())
    }

    /// Center the sprite vertically in the viewport.
    pub fn center_vertically(&mut self, screen: &ScreenSize) -> Result<()> {
        self.bound("center the sprite")?;
        let y = (screen.h - self.destination.height) as f32 / 2.0;
        self.set_position(Vector2::new(self.position.x, y));
        Ok(())
    }

    pub fn center_image(&mut self, screen: &ScreenSize) -> Result<()> {
        self.center_horizontally(screen)?;
        self.center_vertically(screen)
    }

    // --------------- Size, scale, rectangles ---------------

    /// Ratio of destination size to clip size.
    pub fn scale(&self) -> Result<Vector2> {
        self.bound("query the scale")?;
        Ok(self.ratio())
    }

    pub fn set_scale(&mut self, scale: Vector2) -> Result<()> {
        self.bound("set the scale")?;
        if !(scale.x > 0.0 && scale.y > 0.0 && scale.x.is_finite() && scale.y.is_finite()) {
            return Err(SpriteError::InvalidArgument(format!(
                "scale must be positive and finite, got ({}, {})",
                scale.x, scale.y
            )));
        }
        let geometry = Geometry::layout(self.position, self.clipping, scale);
        self.commit(geometry);
        Ok(())
    }

    /// Destination `(width, height)` in pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.destination.width, self.destination.height)
    }

    pub fn size_vec(&self) -> Vector2 {
        self.destination.size_vec()
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> Result<()> {
        self.bound("set the size")?;
        if width <= 0 || height <= 0 {
            return Err(SpriteError::InvalidArgument(format!(
                "size must be positive, got {}x{}",
                width, height
            )));
        }
        self.destination.width = width;
        self.destination.height = height;
        Ok(())
    }

    pub fn destination(&self) -> PixelRect {
        self.destination
    }

    /// Place and size the sprite at once; both extents must exceed one pixel.
    pub fn set_destination(&mut self, destination: PixelRect) -> Result<()> {
        self.bound("set the destination")?;
        if destination.width <= 1 || destination.height <= 1 {
            return Err(SpriteError::InvalidArgument(format!(
                "destination must be larger than 1x1, got {}x{}",
                destination.width, destination.height
            )));
        }
        self.position = Vector2::new(destination.x as f32, destination.y as f32);
        self.destination = destination;
        Ok(())
    }

    pub fn clipping(&self) -> PixelRect {
        self.clipping
    }

    /// Select the texture region to draw, keeping the current scale.
    pub fn set_clipping(&mut self, clipping: PixelRect) -> Result<()> {
        let tex = self.bound("set the clipping")?;
        if clipping.x < 0 || clipping.y < 0 {
            return Err(SpriteError::InvalidArgument(format!(
                "clipping origin must not be negative, got ({}, {})",
                clipping.x, clipping.y
            )));
        }
        if !clipping.has_area() {
            return Err(SpriteError::InvalidArgument(format!(
                "clipping must have a positive size, got {}x{}",
                clipping.width, clipping.height
            )));
        }
        if !clipping.fits_within(tex.width, tex.height) {
            return Err(SpriteError::InvalidArgument(format!(
                "clipping {:?} exceeds the {}x{} texture",
                clipping, tex.width, tex.height
            )));
        }
        let geometry = Geometry::layout(self.position, clipping, self.ratio());
        self.commit(geometry);
        Ok(())
    }

    /// Rotation origin in texture pixels, always the clip's center.
    pub fn pivot(&self) -> Vector2 {
        Vector2::new(
            self.clipping.width as f32 / 2.0,
            self.clipping.height as f32 / 2.0,
        )
    }

    /// Axis-aligned rectangle enclosing the rotated sprite.
    pub fn bounds(&self) -> Result<PixelRect> {
        self.bound("query the bounds")?;
        if self.rotation.is_zero() {
            return Ok(self.destination);
        }

        let half_w = self.destination.width as f32 / 2.0;
        let half_h = self.destination.height as f32 / 2.0;
        let a = self.rotation.rotate(Vector2::new(half_w, -half_h));
        let b = self.rotation.rotate(Vector2::new(half_w, half_h));
        let extent = Vector2::new(a.x.abs().max(b.x.abs()), a.y.abs().max(b.y.abs()));
        let (cx, cy) = self.destination.center_f32();
        Ok(PixelRect::new(
            (cx - extent.x) as i32,
            (cy - extent.y) as i32,
            (extent.x * 2.0) as i32,
            (extent.y * 2.0) as i32,
        ))
    }

    // --------------- Rotation and orientation ---------------

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.degrees()
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation = Rotation::from_degrees(degrees);
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation.radians()
    }

    pub fn set_rotation_radians(&mut self, radians: f32) {
        self.rotation = Rotation::from_radians(radians);
    }

    /// Unit vector of `direction` under the current rotation.
    pub fn direction(&self, direction: Direction) -> Vector2 {
        if self.rotation.is_zero() {
            direction.axis()
        } else {
            self.rotation.rotate(direction.axis())
        }
    }

    /// Rotate the sprite so that `direction` points along `v`.
    pub fn set_direction(&mut self, direction: Direction, v: Vector2) -> Result<()> {
        let angle = direction.angle_to(v)?;
        self.set_rotation_radians(angle);
        Ok(())
    }

    /// Turn `direction` toward `target`, measured from the sprite's center.
    pub fn point_at(&mut self, direction: Direction, target: Vector2) -> Result<()> {
        let center = self.center_position()?;
        let towards = Vector2::new(target.x - center.x, target.y - center.y);
        self.set_direction(direction, towards)
    }

    /// Orbit the center around `point` by `degrees` and turn by the same angle.
    pub fn rotate_around(&mut self, point: Vector2, degrees: f32) -> Result<()> {
        let center = self.center_position()?;
        let offset = rotate_vector(
            Vector2::new(center.x - point.x, center.y - point.y),
            degrees.to_radians(),
        );
        self.set_center_position(Vector2::new(point.x + offset.x, point.y + offset.y))?;
        self.set_rotation_degrees(self.rotation_degrees() + degrees);
        Ok(())
    }

    pub fn up(&self) -> Vector2 {
        self.direction(Direction::Up)
    }

    pub fn down(&self) -> Vector2 {
        self.direction(Direction::Down)
    }

    pub fn left(&self) -> Vector2 {
        self.direction(Direction::Left)
    }

    pub fn right(&self) -> Vector2 {
        self.direction(Direction::Right)
    }

    pub fn set_up(&mut self, v: Vector2) -> Result<()> {
        self.set_direction(Direction::Up, v)
    }

    pub fn set_down(&mut self, v: Vector2) -> Result<()> {
        self.set_direction(Direction::Down, v)
    }

    pub fn set_left(&mut self, v: Vector2) -> Result<()> {
        self.set_direction(Direction::Left, v)
    }

    pub fn set_right(&mut self, v: Vector2) -> Result<()> {
        self.set_direction(Direction::Right, v)
    }

    pub fn up_point_at(&mut self, target: Vector2) -> Result<()> {
        self.point_at(Direction::Up, target)
    }

    pub fn down_point_at(&mut self, target: Vector2) -> Result<()> {
        self.point_at(Direction::Down, target)
    }

    pub fn left_point_at(&mut self, target: Vector2) -> Result<()> {
        self.point_at(Direction::Left, target)
    }

    pub fn right_point_at(&mut self, target: Vector2) -> Result<()> {
        self.point_at(Direction::Right, target)
    }

    // --------------- Render state ---------------

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    pub fn flip(&self) -> SpriteFlip {
        self.flip
    }

    pub fn set_flip(&mut self, flip: SpriteFlip) {
        self.flip = flip;
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.blend_mode = blend_mode;
    }

    pub fn shader(&self) -> Option<&str> {
        self.shader.as_deref()
    }

    pub fn set_shader(&mut self, shader: Option<&str>) {
        self.shader = shader.map(Arc::from);
    }

    /// Manual view, used when no camera is attached.
    pub fn view(&self) -> Camera2D {
        self.view
    }

    pub fn set_view(&mut self, view: Camera2D) {
        self.view = view;
    }

    pub fn set_camera(&mut self, camera: Option<Entity>) {
        self.camera = camera;
    }

    // --------------- Internals ---------------

    fn bound(&self, action: &str) -> Result<BoundTexture> {
        self.texture.ok_or_else(|| {
            SpriteError::InvalidState(format!(
                "cannot {} of sprite '{}' before a texture is bound",
                action, self.name
            ))
        })
    }

    fn ratio(&self) -> Vector2 {
        Vector2::new(
            self.destination.width as f32 / self.clipping.width as f32,
            self.destination.height as f32 / self.clipping.height as f32,
        )
    }

    /// Scale to carry over a rebind; 1 where there is nothing to measure.
    fn current_scale(&self) -> Vector2 {
        if !self.clipping.has_area() || !self.destination.has_area() {
            return Vector2::new(1.0, 1.0);
        }
        let ratio = self.ratio();
        Vector2::new(
            if ratio.x > 0.0 { ratio.x } else { 1.0 },
            if ratio.y > 0.0 { ratio.y } else { 1.0 },
        )
    }

    fn half_size(&self) -> Vector2 {
        Vector2::new(
            self.destination.width as f32 / 2.0,
            self.destination.height as f32 / 2.0,
        )
    }

    fn center_unchecked(&self) -> Vector2 {
        let half = self.half_size();
        Vector2::new(self.position.x + half.x, self.position.y + half.y)
    }

    fn commit(&mut self, geometry: Geometry) {
        self.clipping = geometry.clipping;
        self.destination = geometry.destination;
    }
}

impl SpriteDrawable for SpriteTransform {
    fn camera(&self) -> Option<Entity> {
        self.camera
    }

    fn export_render_parameters(&self, camera_view: Option<Camera2D>) -> Option<RenderParameters> {
        if !self.visible {
            return None;
        }
        self.texture?;
        let texture_key = self.texture_key.clone()?;

        let dest = self.destination;
        Some(RenderParameters {
            texture_key,
            source: self.clipping,
            destination: PixelRect::new(
                (dest.x as f32 + dest.width as f32 / 2.0) as i32,
                (dest.y as f32 + dest.height as f32 / 2.0) as i32,
                dest.width,
                dest.height,
            ),
            pivot: self.pivot(),
            rotation_radians: self.rotation.radians(),
            tint: self.tint,
            flip: self.flip,
            blend_mode: self.blend_mode,
            shader: self.shader.clone(),
            view: camera_view.unwrap_or(self.view),
            draw_order: self.draw_order,
        })
    }
}

fn non_empty(value: String, what: &str) -> Result<String> {
    if value.is_empty() {
        return Err(SpriteError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(value)
}
