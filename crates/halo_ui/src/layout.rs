//! Layout primitives on the host's scaled pixel grid.

/// A rectangle in screen coordinates (scaled pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// Both edges are inclusive on both axes, so a `w × h` rect accepts
    /// `w + 1` columns of pointer positions.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Returns the same rect with a different height.
    #[must_use]
    pub const fn with_height(self, height: i32) -> Self {
        Self { height, ..self }
    }
}

/// Size of the host's drawable area in scaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamps an origin so a `width × height` box stays on screen.
    ///
    /// Each axis lands in `[0, viewport - size]`; when the box is larger than
    /// the viewport the origin pins to 0.
    #[must_use]
    pub fn clamp_origin(&self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        (
            x.min(self.width - width).max(0),
            y.min(self.height - height).max(0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(854, 480)
    }
}

/// Vertical stacking cursor used by containers.
///
/// Children are placed top to bottom in insertion order, each advancing the
/// cursor by its own current height plus the gap.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    x: i32,
    y: i32,
    gap: i32,
}

impl Column {
    /// Starts a column at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32, gap: i32) -> Self {
        Self { x, y, gap }
    }

    /// Places an item of `height` and returns its origin.
    pub fn place(&mut self, height: i32) -> (i32, i32) {
        let origin = (self.x, self.y);
        self.y += height + self.gap;
        origin
    }

    /// Y coordinate the next item would be placed at.
    #[must_use]
    pub const fn cursor(&self) -> i32 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_inclusive() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(10, 20));
        assert!(rect.contains(110, 70));
        assert!(rect.contains(50, 30));
        assert!(!rect.contains(9, 30));
        assert!(!rect.contains(111, 30));
        assert!(!rect.contains(50, 71));
        assert!(!rect.contains(50, 19));
    }

    #[test]
    fn test_clamp_origin() {
        let viewport = Viewport::new(800, 600);

        assert_eq!(viewport.clamp_origin(-20, -5, 200, 100), (0, 0));
        assert_eq!(viewport.clamp_origin(700, 580, 200, 100), (600, 500));
        assert_eq!(viewport.clamp_origin(100, 100, 200, 100), (100, 100));
        assert_eq!(viewport.clamp_origin(50, 50, 1_000, 100), (0, 50));
    }

    #[test]
    fn test_column_stacking() {
        let mut column = Column::new(8, 24, 6);

        assert_eq!(column.place(12), (8, 24));
        assert_eq!(column.place(16), (8, 42));
        assert_eq!(column.place(12), (8, 64));
        assert_eq!(column.cursor(), 82);
    }
}
