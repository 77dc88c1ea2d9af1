//! Angles and 2D Rotation
//!
//! All angles are in degrees.

use glam::Vec2;

/// Rotate `v` counter-clockwise about the origin by `degrees`.
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Reduce any angle to the half-open range `[0, 360)`.
///
/// The remainder lands in `(-360, 360)` for every finite input, so a single
/// `+360` is enough for negatives. A tiny negative remainder can round up to
/// exactly 360 after the add; that case folds to 0. NaN and infinities yield NaN.
pub fn normalize_angle(degrees: f32) -> f32 {
    let mut angle = degrees % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle >= 360.0 { 0.0 } else { angle }
}
