//! Frustum Visibility
//!
//! Plane extraction from a view-projection matrix and the conservative
//! box-versus-frustum test used to decide whether a renderable can be seen.
//!
//! ## Conventions
//!
//! - Planes store `normal` and `distance` such that `normal · p + distance >= 0`
//!   for points on the inside.
//! - Clip depth runs 0..1, matching `glam::Mat4::perspective_rh`.
//! - Plane order is left, right, bottom, top, near, far.

use glam::{Mat4, Vec3, Vec4};

use super::raycast::{Camera, Ray};

/// Rays closer to parallel than this never hit a plane.
pub const PARALLEL_EPSILON: f32 = 1e-4;

/// An infinite plane in Hessian normal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing to the inside half-space
    pub normal: Vec3,
    /// Signed offset from the origin along `normal`
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` with the given normal (normalized here).
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Build from raw `(a, b, c, d)` coefficients, normalizing so `|normal| == 1`.
    pub fn from_coefficients(v: Vec4) -> Self {
        let normal = v.truncate();
        let len = normal.length();
        if len <= f32::EPSILON {
            return Self::new(Vec3::ZERO, v.w);
        }
        Self::new(normal / len, v.w / len)
    }

    /// Signed distance from the plane; positive on the inside.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Distance along `ray` to the plane.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the hit lies
    /// behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -self.signed_distance(ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Corner furthest along `normal`.
    fn positive_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::select(normal.cmpge(Vec3::ZERO), self.max, self.min)
    }
}

/// Host capability: anything with world-space bounds (a renderer, a collider).
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

impl Bounded for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// The six planes of a camera's visible volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract planes from a combined `projection * view` matrix.
    pub fn from_view_projection(m: Mat4) -> Self {
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));
        Self {
            planes: [
                Plane::from_coefficients(r3 + r0), // left
                Plane::from_coefficients(r3 - r0), // right
                Plane::from_coefficients(r3 + r1), // bottom
                Plane::from_coefficients(r3 - r1), // top
                Plane::from_coefficients(r2),      // near (0..1 depth)
                Plane::from_coefficients(r3 - r2), // far
            ],
        }
    }

    /// Conservative box test.
    ///
    /// False only when the box lies entirely outside at least one plane. Boxes
    /// near a frustum corner may report true while being invisible.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(aabb.positive_vertex(plane.normal)) >= 0.0)
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(point) >= 0.0)
    }
}

/// Check whether `renderable` may be visible from `camera`.
pub fn is_visible_from<R, C>(renderable: &R, camera: &C) -> bool
where
    R: Bounded + ?Sized,
    C: Camera + ?Sized,
{
    camera.frustum().intersects_aabb(&renderable.bounds())
}
