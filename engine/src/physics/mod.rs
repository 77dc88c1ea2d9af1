//! Physics module
//!
//! Trajectory solving for projectiles under constant gravity.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Gravity is a downward magnitude (positive number, applied along -Y)

pub mod ballistics;

pub use ballistics::{BallisticsConfig, launch_velocity, position_at, try_launch_velocity};
