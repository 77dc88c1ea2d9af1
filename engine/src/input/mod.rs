//! Input Module
//!
//! Pointer position tracking, decoupled from any specific windowing system.
//!
//! # Example
//!
//! ```rust,ignore
//! use engine_ext::input::PointerState;
//!
//! let mut pointer = PointerState::new();
//! pointer.set_position(100.0, 50.0, 800, 600);
//! if let Some(uv) = pointer.normalized_position() {
//!     // Use normalized position for raycasting
//! }
//! ```

pub mod pointer;

pub use pointer::PointerState;
