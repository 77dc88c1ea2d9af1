//! UI Helpers
//!
//! Scroll snapping for scrollable views and alpha mutation for anything
//! with a color.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color, one `f32` per channel.
///
/// Channel values are not clamped anywhere in this crate.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

static_assertions::assert_eq_size!(Color, [f32; 4]);

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same RGB, different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Host capability: a UI element with a settable color.
pub trait HasColor {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
}

/// Alpha mutation for every [`HasColor`].
pub trait HasColorExt: HasColor {
    /// Replace only the alpha channel. Returns `self` for chaining.
    ///
    /// `alpha` is passed through as-is; values outside `[0, 1]` are the host's concern.
    fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        let color = self.color().with_alpha(alpha);
        self.set_color(color);
        self
    }
}

impl<T: HasColor + ?Sized> HasColorExt for T {}

/// A plain colored UI element (image, label, panel).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub color: Color,
}

impl Graphic {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl HasColor for Graphic {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Host capability: a view whose scroll offset is a normalized `[0,1]x[0,1]` position.
pub trait ScrollView {
    fn normalized_position(&self) -> Vec2;
    fn set_normalized_position(&mut self, position: Vec2);
}

/// Snap-to-extreme helpers for every [`ScrollView`].
pub trait ScrollViewExt: ScrollView {
    /// Jump to the top edge, `(0, 1)`.
    fn scroll_to_top(&mut self) {
        self.set_normalized_position(Vec2::new(0.0, 1.0));
    }

    /// Jump to the bottom edge, `(0, 0)`.
    fn scroll_to_bottom(&mut self) {
        self.set_normalized_position(Vec2::ZERO);
    }
}

impl<T: ScrollView + ?Sized> ScrollViewExt for T {}

/// Minimal scroll view state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollRect {
    pub normalized_position: Vec2,
}

impl ScrollView for ScrollRect {
    fn normalized_position(&self) -> Vec2 {
        self.normalized_position
    }

    fn set_normalized_position(&mut self, position: Vec2) {
        self.normalized_position = position;
    }
}
