//! Pointer-to-Plane Projection
//!
//! Casts the camera ray under the pointer onto a horizontal plane through a
//! reference point, and optionally turns a transform to face the hit.

use glam::{Vec2, Vec3};

use super::frustum::Plane;
use super::raycast::Camera;
use crate::config::EngineExtConfig;
use crate::math::Transform;

/// Where the pointer ray meets the horizontal plane through `reference`.
///
/// # Arguments
/// * `camera` - Camera the pointer ray is cast from
/// * `pointer_uv` - Normalized pointer position, (0,0) bottom-left, see
///   [`crate::input::PointerState::normalized_position`]
/// * `reference` - Any point on the plane; only its Y is used
///
/// # Returns
/// * `Some(Vec3)` - The intersection point on the plane
/// * `None` - If the ray is parallel to the plane or the plane is behind the camera
pub fn pointer_hit<C: Camera + ?Sized>(
    camera: &C,
    pointer_uv: Vec2,
    reference: Vec3,
) -> Option<Vec3> {
    let plane = Plane::from_normal_and_point(Vec3::Y, reference);
    let ray = camera.screen_point_to_ray(pointer_uv);
    plane.raycast(&ray).map(|t| ray.at(t))
}

/// Like [`pointer_hit`], but returns `Vec3::ZERO` when the ray misses.
///
/// A miss and a genuine hit at the world origin are indistinguishable here;
/// use [`pointer_hit`] when that matters.
pub fn pointer_on_plane<C: Camera + ?Sized>(
    camera: &C,
    pointer_uv: Vec2,
    reference: Vec3,
) -> Vec3 {
    pointer_hit(camera, pointer_uv, reference).unwrap_or(Vec3::ZERO)
}

/// Turn `transform` toward the pointer hit on its own horizontal plane.
///
/// # Arguments
/// * `transform` - Transform to rotate; its position picks the plane height
/// * `camera` - Camera the pointer ray is cast from
/// * `pointer_uv` - Normalized pointer position, (0,0) bottom-left
/// * `speed` - Slerp rate per second
/// * `dt` - Frame time in seconds; the slerp factor is `speed * dt` clamped to [0, 1]
///
/// # Returns
/// `true` if the rotation was updated. `false` leaves the transform untouched:
/// the ray missed, or the hit coincides with the transform's position.
pub fn face_pointer<C: Camera + ?Sized>(
    transform: &mut Transform,
    camera: &C,
    pointer_uv: Vec2,
    speed: f32,
    dt: f32,
) -> bool {
    let Some(hit) = pointer_hit(camera, pointer_uv, transform.position) else {
        return false;
    };
    let Some(target) = Transform::look_rotation(hit - transform.position, Vec3::Y) else {
        return false;
    };

    let t = (speed * dt).clamp(0.0, 1.0);
    transform.rotation = transform.rotation.slerp(target, t);
    true
}

/// [`face_pointer`] turning at `config.facing_speed`.
pub fn face_pointer_with_config<C: Camera + ?Sized>(
    transform: &mut Transform,
    camera: &C,
    pointer_uv: Vec2,
    config: &EngineExtConfig,
    dt: f32,
) -> bool {
    face_pointer(transform, camera, pointer_uv, config.facing_speed, dt)
}
