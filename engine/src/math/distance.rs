//! Squared-distance range checks.
//!
//! Both checks compare squared lengths, so no square root is taken.
//! Comparisons are strict: a point exactly on a boundary is outside.

use glam::Vec3;

/// True when `pos` lies strictly within `range` of `target`.
pub fn within_range(target: Vec3, pos: Vec3, range: f32) -> bool {
    pos.distance_squared(target) < range * range
}

/// True when `pos` lies strictly between `min_range` and `max_range` of `target`.
pub fn within_annulus(target: Vec3, pos: Vec3, min_range: f32, max_range: f32) -> bool {
    let sqr = pos.distance_squared(target);
    sqr < max_range * max_range && sqr > min_range * min_range
}
