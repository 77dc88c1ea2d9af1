//! Minimal world transform (position + orientation).

use glam::{Mat3, Quat, Vec3};

/// Position and rotation of an object in world space.
///
/// The object's facing is its local +Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotation taking +Z to `direction` with +Y as close to `up` as possible.
    ///
    /// Returns `None` for a zero direction. When `direction` is parallel to
    /// `up`, world +X is used to pick the roll.
    pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
        let forward = direction.try_normalize()?;
        let right = up
            .cross(forward)
            .try_normalize()
            .or_else(|| Vec3::X.cross(forward).cross(forward).try_normalize())?;
        let up = forward.cross(right);
        Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_faces_positive_z() {
        assert_eq!(Transform::default().forward(), Vec3::Z);
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        for dir in [Vec3::X, Vec3::NEG_X, Vec3::NEG_Z, Vec3::new(1.0, 0.0, 1.0)] {
            let rotation = Transform::look_rotation(dir, Vec3::Y).unwrap();
            assert!((rotation * Vec3::Z - dir.normalize()).length() < 1e-5, "dir = {:?}", dir);
            assert!((rotation * Vec3::Y - Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn test_look_rotation_zero_direction() {
        assert!(Transform::look_rotation(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_look_rotation_parallel_to_up() {
        let rotation = Transform::look_rotation(Vec3::Y, Vec3::Y).unwrap();
        assert!((rotation * Vec3::Z - Vec3::Y).length() < 1e-5);
    }
}
