use std::f64::consts::PI;

/// Fraction of the remaining distance covered by the pointer offset each frame
pub const POINTER_SMOOTHING: f64 = 0.1;

/// Input delivered by the host, consumed by the widget between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a horizontal position in surface pixels
    PointerMoved { x: f64 },
    /// Pointer left the surface
    PointerLeft,
    /// Surface changed size, in device pixels
    Resized { width: usize, height: usize },
}

/// Pointer-driven rotation around Y, eased towards its goal
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerRotation {
    /// Angle currently applied
    pub offset: f64,
    /// Angle the pointer asks for
    pub goal: f64,
}

impl PointerRotation {
    /// Maps a horizontal pointer position to a goal in [-PI, PI]
    pub fn point_at(&mut self, x: f64, surface_width: usize) {
        if surface_width == 0 {
            return;
        }
        self.goal = 2.0 * PI * (x / surface_width as f64 - 0.5);
    }

    pub fn release(&mut self) {
        self.goal = 0.0;
    }

    /// Moves the offset a fixed fraction closer to the goal. Runs once per
    /// frame, so convergence speed follows the frame rate.
    pub fn step(&mut self) {
        self.offset += (self.goal - self.offset) * POINTER_SMOOTHING;
    }
}
