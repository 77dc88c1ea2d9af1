//! Engine Extensions Library
//!
//! Small leaf helpers layered on a host game engine's object model.
//! Nothing here owns a scene, a render loop or an input system; the host's
//! state is consumed through narrow capability traits, and every trait ships
//! with a plain concrete implementation so the helpers can be used standalone.
//!
//! # Modules
//!
//! - [`animator`] - Animator parameter lookup
//! - [`camera`] - Frustum visibility, screen rays and pointer-to-plane projection
//! - [`components`] - First-component lookup through a reusable scratch buffer
//! - [`hierarchy`] - Child teardown with immediate or deferred destruction
//! - [`input`] - Pointer position tracking
//! - [`layers`] - Layer-mask membership
//! - [`math`] - Rect overlap, 2D rotation, angle normalization, distance checks
//! - [`physics`] - Trajectory solving
//! - [`time`] - Time scale, frame clock and the time-scale pulse
//! - [`ui`] - Scroll snapping and color alpha mutation
//! - [`runtime`] - Process-wide running flag and global time scale
//! - [`config`] - JSON-loadable defaults
//!
//! # Example
//!
//! ```ignore
//! use engine_ext::camera::{PerspectiveCamera, pointer_on_plane};
//! use engine_ext::input::PointerState;
//! use engine_ext::physics::launch_velocity;
//! use glam::Vec3;
//!
//! let camera = PerspectiveCamera::looking_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
//! let mut pointer = PointerState::new();
//! pointer.set_position(960.0, 540.0, 1920, 1080);
//!
//! if let Some(uv) = pointer.normalized_position() {
//!     let aim = pointer_on_plane(&camera, uv, Vec3::ZERO);
//!     let velocity = launch_velocity(aim, Vec3::new(0.0, 1.0, 0.0), 1.5, 9.81);
//! }
//! ```

pub mod animator;
pub mod camera;
pub mod components;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod input;
pub mod layers;
pub mod math;
pub mod physics;
pub mod runtime;
pub mod time;
pub mod ui;

pub use animator::{Animator, AnimatorExt, AnimatorParameter, ParameterKind, ParameterList};
pub use camera::{
    Aabb, Bounded, Camera, Frustum, PerspectiveCamera, Plane, Ray, face_pointer,
    face_pointer_with_config, is_visible_from, pointer_hit, pointer_on_plane,
};
pub use components::{
    ComponentBag, ComponentContainer, ComponentRef, ComponentScratch, first_component,
    first_component_by_id,
};
pub use config::EngineExtConfig;
pub use error::{Error, Result};
pub use hierarchy::{
    DestroyMode, NodeId, NodeTree, SceneTree, destroy_children, destroy_children_auto,
};
pub use input::PointerState;
pub use layers::{LayerMask, Layered};
pub use math::{Rect, Transform, normalize_angle, rotate, within_annulus, within_range};
pub use physics::{BallisticsConfig, launch_velocity, try_launch_velocity};
pub use time::{Clock, PulseState, TimeScale, TimeScalePulse};
pub use ui::{Color, Graphic, HasColor, HasColorExt, ScrollRect, ScrollView, ScrollViewExt};
