//! Sprite-relative directions.
//!
//! Each [`Direction`] has a canonical axis in unrotated screen space (y-down).
//! Rotating the axis by the sprite's angle gives the current direction vector,
//! and [`Direction::angle_to`] solves the inverse: the angle that turns the
//! axis onto a given vector.

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit axis of this direction at rotation zero.
    pub fn axis(self) -> Vector2 {
        match self {
            Direction::Up => Vector2::new(0.0, -1.0),
            Direction::Down => Vector2::new(0.0, 1.0),
            Direction::Left => Vector2::new(-1.0, 0.0),
            Direction::Right => Vector2::new(1.0, 0.0),
        }
    }

    /// Signed angle in radians from this direction's axis to `v`.
    ///
    /// Only the direction of `v` matters, so it is not normalized first.
    /// Fails with [`SpriteError::DegenerateInput`] when `v` is zero or not finite.
    pub fn angle_to(self, v: Vector2) -> Result<f32> {
        check_direction(v)?;
        let axis = self.axis();
        let cross = axis.x * v.y - axis.y * v.x;
        let dot = axis.x * v.x + axis.y * v.y;
        Ok(cross.atan2(dot))
    }
}

fn check_direction(v: Vector2) -> Result<()> {
    if !v.x.is_finite() || !v.y.is_finite() || (v.x == 0.0 && v.y == 0.0) {
        return Err(SpriteError::DegenerateInput(format!(
            "({}, {}) has no direction",
            v.x, v.y
        )));
    }
    Ok(())
}

/// Normalize `v`, rejecting zero-length and non-finite vectors.
///
/// The vector is divided by its largest component first so the length
/// cannot overflow.
pub fn normalize(v: Vector2) -> Result<Vector2> {
    check_direction(v)?;
    let m = v.x.abs().max(v.y.abs());
    let (x, y) = (v.x / m, v.y / m);
    let len = (x * x + y * y).sqrt();
    Ok(Vector2::new(x / len, y / len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_angle_to_own_axis_is_zero() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(approx_eq(d.angle_to(d.axis()).unwrap(), 0.0));
        }
    }

    #[test]
    fn test_up_angle_in_all_quadrants() {
        let up = Direction::Up;
        assert!(approx_eq(up.angle_to(Vector2::new(1.0, 0.0)).unwrap(), FRAC_PI_2));
        assert!(approx_eq(up.angle_to(Vector2::new(-1.0, 0.0)).unwrap(), -FRAC_PI_2));
        assert!(approx_eq(up.angle_to(Vector2::new(0.0, 1.0)).unwrap().abs(), PI));
        assert!(approx_eq(up.angle_to(Vector2::new(1.0, -1.0)).unwrap(), FRAC_PI_4));
        assert!(approx_eq(up.angle_to(Vector2::new(1.0, 1.0)).unwrap(), 3.0 * FRAC_PI_4));
        assert!(approx_eq(up.angle_to(Vector2::new(-1.0, 1.0)).unwrap(), -3.0 * FRAC_PI_4));
        assert!(approx_eq(up.angle_to(Vector2::new(-1.0, -1.0)).unwrap(), -FRAC_PI_4));
    }

    #[test]
    fn test_right_angle_in_all_quadrants() {
        let right = Direction::Right;
        assert!(approx_eq(right.angle_to(Vector2::new(0.0, 1.0)).unwrap(), FRAC_PI_2));
        assert!(approx_eq(right.angle_to(Vector2::new(0.0, -1.0)).unwrap(), -FRAC_PI_2));
        assert!(approx_eq(right.angle_to(Vector2::new(-1.0, 1.0)).unwrap(), 3.0 * FRAC_PI_4));
        assert!(approx_eq(right.angle_to(Vector2::new(-1.0, -1.0)).unwrap(), -3.0 * FRAC_PI_4));
    }

    #[test]
    fn test_angle_ignores_magnitude() {
        let a = Direction::Up.angle_to(Vector2::new(3.0, -3.0)).unwrap();
        let b = Direction::Up.angle_to(Vector2::new(0.01, -0.01)).unwrap();
        assert!(approx_eq(a, b));
    }

    #[test]
    fn test_zero_vector_is_degenerate() {
        let err = Direction::Left.angle_to(Vector2::zero()).unwrap_err();
        assert!(matches!(err, SpriteError::DegenerateInput(_)));
        assert!(normalize(Vector2::new(f32::NAN, 0.0)).is_err());
        assert!(Direction::Up.angle_to(Vector2::new(f32::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_huge_vectors_keep_their_angle() {
        let far = Vector2::new(1e20, 0.0);
        assert!(approx_eq(Direction::Up.angle_to(far).unwrap(), FRAC_PI_2));
        assert!(approx_eq(
            Direction::Right.angle_to(Vector2::new(-3e38, -3e38)).unwrap(),
            -3.0 * FRAC_PI_4
        ));
        let n = normalize(far).unwrap();
        assert!(approx_eq(n.x, 1.0) && approx_eq(n.y, 0.0));
    }

    #[test]
    fn test_tiny_vectors_keep_their_angle() {
        let tiny = Vector2::new(0.0, 1e-30);
        assert!(approx_eq(Direction::Right.angle_to(tiny).unwrap(), FRAC_PI_2));
        assert!(approx_eq(normalize(tiny).unwrap().y, 1.0));
    }
}
