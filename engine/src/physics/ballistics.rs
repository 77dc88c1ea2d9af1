//! Ballistic launch solving
//!
//! Finds the initial velocity that carries a projectile from an origin to a
//! target in a fixed flight time under constant downward gravity, with no air
//! drag.
//!
//! # Example
//!
//! ```ignore
//! use engine_ext::physics::ballistics::launch_velocity;
//! use glam::Vec3;
//!
//! let v = launch_velocity(Vec3::new(20.0, 0.0, 0.0), Vec3::ZERO, 2.0, 9.81);
//! ```

use glam::Vec3;

use crate::config::EngineExtConfig;
use crate::error::{Error, Result};

/// Earth gravity magnitude (m/s²).
pub const EARTH_GRAVITY: f32 = 9.81;

/// Initial velocity that reaches `target` from `origin` after `time` seconds.
///
/// The horizontal (XZ) part covers the horizontal distance at constant speed.
/// The vertical part is `dy / time + 0.5 * gravity * time`, which makes up for
/// what gravity takes away over the flight.
///
/// # Arguments
/// * `target` - Landing point in world space
/// * `origin` - Launch point in world space
/// * `time` - Flight time in seconds; must be positive
/// * `gravity` - Downward gravity magnitude (m/s²)
///
/// # Returns
/// The launch velocity in m/s. A zero `time` divides by zero and yields
/// non-finite components; see [`try_launch_velocity`] for a checked version.
pub fn launch_velocity(target: Vec3, origin: Vec3, time: f32, gravity: f32) -> Vec3 {
    let displacement = target - origin;
    let horizontal = Vec3::new(displacement.x, 0.0, displacement.z);

    let horizontal_speed = horizontal.length() / time;
    let vertical_speed = displacement.y / time + 0.5 * gravity * time;

    let mut velocity = horizontal.normalize_or_zero() * horizontal_speed;
    velocity.y = vertical_speed;
    velocity
}

/// [`launch_velocity`] that rejects non-positive or non-finite flight times.
pub fn try_launch_velocity(target: Vec3, origin: Vec3, time: f32, gravity: f32) -> Result<Vec3> {
    if !time.is_finite() || time <= 0.0 {
        return Err(Error::InvalidFlightTime(time));
    }
    Ok(launch_velocity(target, origin, time, gravity))
}

/// Position `t` seconds after launching from `origin` with `velocity`.
pub fn position_at(origin: Vec3, velocity: Vec3, gravity: f32, t: f32) -> Vec3 {
    origin + velocity * t - Vec3::Y * (0.5 * gravity * t * t)
}

/// Gravity setting for launch solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticsConfig {
    /// Downward gravity magnitude (m/s²).
    pub gravity: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
        }
    }
}

impl From<&EngineExtConfig> for BallisticsConfig {
    fn from(config: &EngineExtConfig) -> Self {
        Self {
            gravity: config.gravity,
        }
    }
}

impl BallisticsConfig {
    pub fn with_gravity(gravity: f32) -> Self {
        Self { gravity }
    }

    pub fn launch_velocity(&self, target: Vec3, origin: Vec3, time: f32) -> Vec3 {
        launch_velocity(target, origin, time, self.gravity)
    }

    pub fn position_at(&self, origin: Vec3, velocity: Vec3, t: f32) -> Vec3 {
        position_at(origin, velocity, self.gravity, t)
    }
}
