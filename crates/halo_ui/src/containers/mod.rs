//! Containers: components that own and lay out children.
//!
//! Both containers stack their children vertically in insertion order and
//! re-query every child's height each frame, so a child that grows (an
//! [`ExpandableMod`](crate::controls::ExpandableMod) sliding open) pushes its
//! siblings down on the next frame.

mod panel;
mod window;

pub use panel::Panel;
pub use window::Window;

use crate::component::Component;
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Column;

/// Pointer gesture a container is tracking between press and release.
///
/// A single enum keeps drag and resize mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No button held on the container.
    #[default]
    Idle,
    /// Moving the container.
    Dragging {
        /// Pointer minus origin at press time.
        offset: (i32, i32),
    },
    /// Resizing from the bottom-right handle.
    Resizing {
        /// Far corner minus pointer at press time.
        offset: (i32, i32),
    },
}

impl Gesture {
    /// Check if this is a move.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Check if this is a resize.
    #[inline]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Check if no gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Ordered, exclusively owned children of a container.
#[derive(Default)]
pub(crate) struct Children {
    items: Vec<Box<dyn Component>>,
}

impl Children {
    pub(crate) fn push(&mut self, child: Box<dyn Component>) {
        self.items.push(child);
    }

    pub(crate) fn as_slice(&self) -> &[Box<dyn Component>] {
        &self.items
    }

    /// Stacks children from `(x, y)` at `width`, `gap` apart.
    pub(crate) fn layout(&mut self, x: i32, y: i32, width: i32, gap: i32) {
        let mut column = Column::new(x, y, gap);
        for child in &mut self.items {
            let (cx, cy) = column.place(child.height());
            child.set_position(cx, cy);
            child.set_width(width);
        }
    }

    /// Number of leading children whose bottom edge stays at or above `limit`.
    ///
    /// Layout is a single column, so the first child that overflows hides
    /// every child after it.
    pub(crate) fn fitting(&self, limit: i32) -> usize {
        self.items
            .iter()
            .take_while(|child| child.bounds().y + child.height() <= limit)
            .count()
    }

    pub(crate) fn update(&mut self, frame: &Frame, shown: usize) {
        for child in self.items.iter_mut().take(shown) {
            child.update(frame);
        }
    }

    pub(crate) fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>, shown: usize) {
        for child in self.items.iter().take(shown) {
            child.render(frame, cx);
        }
    }

    /// Offers a press to the first `shown` children until one consumes it.
    pub(crate) fn mouse_down(
        &mut self,
        pointer: Pointer,
        button: MouseButton,
        cx: &mut EventContext<'_>,
        shown: usize,
    ) -> bool {
        self.items
            .iter_mut()
            .take(shown)
            .any(|child| child.mouse_down(pointer, button, cx))
    }

    /// Releases reach every child, shown or not.
    pub(crate) fn mouse_up(&mut self, pointer: Pointer, button: MouseButton) {
        for child in &mut self.items {
            child.mouse_up(pointer, button);
        }
    }
}
