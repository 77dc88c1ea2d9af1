//! Raycast Module
//!
//! Screen-point rays for a camera, used for pointer picking and plane
//! intersection. Screen points are normalized UV coordinates (0-1, 0-1) with
//! (0,0) at the bottom-left, the same convention as [`crate::input::PointerState`].

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::frustum::Frustum;

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Host capability: a camera that can produce frustum planes and screen rays.
pub trait Camera {
    /// Combined `projection * view` matrix with 0..1 clip depth.
    fn view_projection(&self) -> Mat4;

    /// Ray from the camera through a normalized screen point.
    fn screen_point_to_ray(&self, uv: Vec2) -> Ray;

    fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_projection())
    }
}

/// A perspective camera described by position, orientation and lens.
///
/// The camera looks down its local -Z axis, with +Y up and +X right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space (meters)
    pub position: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Near plane distance in meters
    pub near: f32,
    /// Far plane distance in meters
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 8.0),
            rotation: Quat::IDENTITY,
            fov_y: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    /// Default lens placed at `position`, oriented to look at `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            rotation: look_rotation(target - position),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_aspect(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }
}

impl Camera for PerspectiveCamera {
    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    fn screen_point_to_ray(&self, uv: Vec2) -> Ray {
        // Convert UV to NDC (-1 to 1)
        let ndc = uv * 2.0 - Vec2::ONE;
        let half_fov = (self.fov_y * 0.5).tan();

        let direction = self.forward()
            + self.right() * ndc.x * self.aspect_ratio * half_fov
            + self.up() * ndc.y * half_fov;
        Ray::new(self.position, direction)
    }
}

/// Camera orientation whose -Z axis points along `forward`.
fn look_rotation(forward: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    // Looking straight up or down - use world -Z as the up reference
    let up_ref = if forward.y.abs() > 0.99 {
        Vec3::NEG_Z
    } else {
        Vec3::Y
    };
    let right = forward.cross(up_ref).normalize();
    let up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = PerspectiveCamera::default();
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((camera.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_looking_at_points_forward_at_target() {
        let camera = PerspectiveCamera::looking_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        let expected = Vec3::new(0.0, -1.0, -1.0).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
    }

    #[test]
    fn test_looking_straight_down() {
        let camera = PerspectiveCamera::looking_at(Vec3::new(0.0, 20.0, 0.0), Vec3::ZERO);
        assert!((camera.forward() - Vec3::NEG_Y).length() < 1e-5);
        assert!(camera.up().is_finite());
    }

    #[test]
    fn test_center_ray_matches_forward() {
        let camera =
            PerspectiveCamera::looking_at(Vec3::new(3.0, 5.0, 7.0), Vec3::new(0.0, 1.0, 0.0));
        let ray = camera.screen_point_to_ray(Vec2::splat(0.5));
        assert_eq!(ray.origin, camera.position);
        assert!((ray.direction - camera.forward()).length() < 1e-5);
    }

    #[test]
    fn test_ray_direction_normalized() {
        let camera = PerspectiveCamera::looking_at(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for y in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let ray = camera.screen_point_to_ray(Vec2::new(x, y));
                let len = ray.direction.length();
                assert!(
                    (len - 1.0).abs() < 0.001,
                    "Ray should be normalized, got length {}",
                    len
                );
            }
        }
    }

    #[test]
    fn test_corner_ray_projects_to_screen_corner() {
        let camera = PerspectiveCamera::default();
        let ray = camera.screen_point_to_ray(Vec2::new(1.0, 1.0));
        let clip = camera.view_projection() * ray.at(10.0).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!((ndc.x - 1.0).abs() < 1e-3, "ndc.x = {}", ndc.x);
        assert!((ndc.y - 1.0).abs() < 1e-3, "ndc.y = {}", ndc.y);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.at(3.0), Vec3::new(0.0, 0.0, 3.0));
    }
}
