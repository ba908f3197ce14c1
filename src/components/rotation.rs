//! Canonical 2D rotation angle.
//!
//! The angle is stored in radians and always normalized into `[0, 2π)`,
//! negative inputs included. Screen space is y-down, so a positive angle
//! turns clockwise on screen, matching raylib's draw rotation.

use raylib::prelude::Vector2;
use std::f32::consts::TAU;

/// Normalized rotation angle in radians.
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    radians: f32,
}

impl Rotation {
    pub fn from_radians(radians: f32) -> Self {
        Self {
            radians: wrap(radians, TAU),
        }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(wrap(degrees, 360.0).to_radians())
    }

    pub fn radians(&self) -> f32 {
        self.radians
    }

    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }

    pub fn is_zero(&self) -> bool {
        self.radians == 0.0
    }

    /// Rotate `v` by this angle.
    pub fn rotate(&self, v: Vector2) -> Vector2 {
        rotate_vector(v, self.radians)
    }
}

/// Rotate a 2D vector by `radians`.
pub fn rotate_vector(v: Vector2, radians: f32) -> Vector2 {
    let (sin, cos) = radians.sin_cos();
    Vector2 {
        x: v.x * cos - v.y * sin,
        y: v.x * sin + v.y * cos,
    }
}

/// Non-negative remainder; `rem_euclid` may round up to `turn` for tiny negative inputs.
fn wrap(value: f32, turn: f32) -> f32 {
    let wrapped = value.rem_euclid(turn);
    if wrapped >= turn { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_degrees_wrap_into_full_turn() {
        assert!(approx_eq(Rotation::from_degrees(370.0).degrees(), 10.0));
        assert!(approx_eq(Rotation::from_degrees(360.0).degrees(), 0.0));
        assert!(approx_eq(Rotation::from_degrees(720.0 + 45.0).degrees(), 45.0));
    }

    #[test]
    fn test_negative_angles_are_non_negative() {
        assert!(approx_eq(Rotation::from_degrees(-90.0).degrees(), 270.0));
        assert!(approx_eq(Rotation::from_radians(-FRAC_PI_2).radians(), 3.0 * FRAC_PI_2));
        let tiny = Rotation::from_radians(-1e-9);
        assert!(tiny.radians() >= 0.0 && tiny.radians() < TAU);
    }

    #[test]
    fn test_zero_default() {
        assert!(Rotation::default().is_zero());
        assert!(Rotation::from_radians(TAU).is_zero());
    }

    #[test]
    fn test_rotate_quarter_turn_is_clockwise_on_screen() {
        let up = Vector2::new(0.0, -1.0);
        let r = Rotation::from_degrees(90.0).rotate(up);
        assert!(approx_eq(r.x, 1.0));
        assert!(approx_eq(r.y, 0.0));

        let r = rotate_vector(Vector2::new(1.0, 0.0), PI);
        assert!(approx_eq(r.x, -1.0));
        assert!(approx_eq(r.y, 0.0));
    }
}
