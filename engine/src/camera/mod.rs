//! Camera Module
//!
//! Frustum visibility, screen-space rays and pointer-to-plane projection.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod frustum;
pub mod pointer;
pub mod raycast;

pub use frustum::{Aabb, Bounded, Frustum, Plane, is_visible_from};
pub use pointer::{face_pointer, face_pointer_with_config, pointer_hit, pointer_on_plane};
pub use raycast::{Camera, PerspectiveCamera, Ray};
