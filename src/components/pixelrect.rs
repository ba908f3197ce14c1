//! Integer rectangle in pixel space.
//!
//! Clipping rectangles live in texture pixels and destination rectangles in
//! screen pixels; both are whole-pixel values. [`PixelRect`] converts to
//! raylib's float [`Rectangle`] only at draw time.

use raylib::prelude::{Rectangle, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer origin and extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when both extents are positive.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Integer center point, rounding toward the origin like the extents do.
    ///
    /// Saturates at the `i32` range for rectangles reaching past it.
    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    /// Same point as [`center`](Self::center), computed in float space.
    pub fn center_f32(&self) -> (f32, f32) {
        (
            self.x as f32 + (self.width / 2) as f32,
            self.y as f32 + (self.height / 2) as f32,
        )
    }

    /// Size as a float vector.
    pub fn size_vec(&self) -> Vector2 {
        Vector2::new(self.width as f32, self.height as f32)
    }

    /// Whether the rectangle lies inside a `width` x `height` area anchored at the origin.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width <= width - self.x
            && self.height <= height - self.y
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.x as f32,
            y: self.y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_truncates() {
        let r = PixelRect::new(10, 20, 5, 7);
        assert_eq!(r.center(), (12, 23));
        assert_eq!(r.center_f32(), (12.0, 23.0));
    }

    #[test]
    fn test_center_near_i32_max_saturates() {
        let r = PixelRect::new(i32::MAX - 10, i32::MAX, 100, 80);
        assert_eq!(r.center(), (i32::MAX, i32::MAX));
        let (cx, _) = r.center_f32();
        assert!(cx > (i32::MAX - 11) as f32);
    }

    #[test]
    fn test_has_area() {
        assert!(PixelRect::new(0, 0, 1, 1).has_area());
        assert!(!PixelRect::new(0, 0, 0, 10).has_area());
        assert!(!PixelRect::default().has_area());
    }

    #[test]
    fn test_fits_within() {
        assert!(PixelRect::new(0, 0, 100, 80).fits_within(100, 80));
        assert!(PixelRect::new(80, 0, 20, 80).fits_within(100, 80));
        assert!(!PixelRect::new(90, 0, 20, 80).fits_within(100, 80));
        assert!(!PixelRect::new(0, 1, 100, 80).fits_within(100, 80));
        assert!(!PixelRect::new(-1, 0, 10, 10).fits_within(100, 80));
    }

    #[test]
    fn test_to_rectangle() {
        let r = PixelRect::new(1, 2, 3, 4).to_rectangle();
        assert_eq!(r.x, 1.0);
        assert_eq!(r.y, 2.0);
        assert_eq!(r.width, 3.0);
        assert_eq!(r.height, 4.0);
    }
}
