//! Math Module
//!
//! Leaf geometry helpers: rect overlap, 2D rotation, angle normalization,
//! squared-distance checks and a minimal transform.

pub mod angle;
pub mod distance;
pub mod rect;
pub mod transform;

pub use angle::{normalize_angle, rotate};
pub use distance::{within_annulus, within_range};
pub use rect::Rect;
pub use transform::Transform;
