//! Pointer state.
//!
//! Window events report pixels with the origin at the top-left. Raycasting
//! wants normalized coordinates with the origin at the bottom-left, Y up.

use glam::Vec2;

/// Current pointer position, if the pointer is over the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Normalized UV position (0.0 to 1.0), bottom-left origin.
    pub position: Option<Vec2>,

    /// Raw pixel position, top-left origin.
    pub position_pixels: Option<Vec2>,

    /// Previous normalized position for delta calculations.
    pub last_position: Option<Vec2>,

    /// Whether the pointer is inside the window.
    pub in_window: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from raw pixel coordinates.
    ///
    /// A zero-sized window clears the position instead of dividing by zero.
    pub fn set_position(&mut self, x: f64, y: f64, window_width: u32, window_height: u32) {
        self.last_position = self.position;

        if window_width == 0 || window_height == 0 {
            self.position = None;
            self.position_pixels = None;
            return;
        }

        self.position_pixels = Some(Vec2::new(x as f32, y as f32));

        let norm_x = x as f32 / window_width as f32;
        let norm_y = 1.0 - (y as f32 / window_height as f32); // Flip Y
        self.position = Some(Vec2::new(norm_x, norm_y));
        self.in_window = true;
    }

    pub fn normalized_position(&self) -> Option<Vec2> {
        self.position
    }

    /// Normalized movement since the previous update.
    pub fn delta(&self) -> Option<Vec2> {
        Some(self.position? - self.last_position?)
    }

    pub fn enter_window(&mut self) {
        self.in_window = true;
    }

    /// Pointer left the window; positions are forgotten.
    pub fn leave_window(&mut self) {
        self.in_window = false;
        self.position = None;
        self.position_pixels = None;
        self.last_position = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
