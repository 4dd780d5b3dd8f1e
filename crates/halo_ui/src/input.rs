//! Pointer input and the per-frame tick.
//!
//! The host supplies one [`Frame`] per displayed frame and discrete
//! pointer-down / pointer-up events in between.

use crate::layout::Viewport;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button.
    Left,
    /// Secondary (right) button.
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Maps the host's numeric button code (0 = left, 1 = right, 2 = middle).
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Middle),
            _ => None,
        }
    }

    /// Returns true for the primary button.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Returns true for the secondary button.
    #[must_use]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Pointer position in scaled screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
}

impl Pointer {
    /// Creates a pointer position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Input for one displayed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Pointer position this frame.
    pub pointer: Pointer,
    /// Interpolation fraction between the last two simulation steps.
    pub partial_ticks: f32,
    /// Drawable area, used to clamp dragged and resized windows.
    pub viewport: Viewport,
}

impl Frame {
    /// Creates a frame.
    #[must_use]
    pub const fn new(pointer: Pointer, partial_ticks: f32, viewport: Viewport) -> Self {
        Self {
            pointer,
            partial_ticks,
            viewport,
        }
    }

    /// Same frame with the pointer moved.
    #[must_use]
    pub const fn at(self, x: i32, y: i32) -> Self {
        Self {
            pointer: Pointer::new(x, y),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_codes() {
        assert_eq!(MouseButton::from_code(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_code(1), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_code(2), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_code(7), None);
        assert!(MouseButton::Left.is_primary());
        assert!(MouseButton::Right.is_secondary());
    }

    #[test]
    fn test_frame_at_moves_pointer_only() {
        let frame = Frame::new(Pointer::new(1, 2), 0.5, Viewport::new(640, 480));
        let moved = frame.at(30, 40);
        assert_eq!(moved.pointer, Pointer::new(30, 40));
        assert_eq!(moved.partial_ticks, 0.5);
        assert_eq!(moved.viewport, frame.viewport);
    }
}
