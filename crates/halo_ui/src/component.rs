//! The contract every widget implements.

use crate::animation::Animation;
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;

/// Approach rate of the hover highlight.
pub const HOVER_RATE: f32 = 8.0;

/// State shared by every widget: bounds, visibility and hover.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    /// Bounding rectangle.
    pub bounds: Rect,
    /// Hidden widgets ignore input and draw nothing.
    pub visible: bool,
    hovered: bool,
    hover: Animation,
}

impl ComponentBase {
    /// Creates visible, unhovered state at `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
            hovered: false,
            hover: Animation::new(0.0, HOVER_RATE),
        }
    }

    /// Returns true if the pointer was over the widget at the last update.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Hover highlight, 0.0 (idle) to 1.0 (fully hovered).
    #[must_use]
    pub fn hover_progress(&self) -> f32 {
        self.hover.value()
    }

    /// Recomputes hover state and advances the hover highlight.
    ///
    /// `over` is the widget's own hit test for this frame's pointer.
    pub fn update_hover(&mut self, over: bool, partial_ticks: f32) {
        if over != self.hovered {
            self.hovered = over;
            self.hover.animate_to(if over { 1.0 } else { 0.0 });
        }
        self.hover.update(partial_ticks);
    }
}

/// Base trait for all widgets.
///
/// The host drives a tree of components through four entry points: a
/// per-frame [`update`](Self::update), a per-frame [`render`](Self::render),
/// and the discrete [`mouse_down`](Self::mouse_down) /
/// [`mouse_up`](Self::mouse_up) events.
pub trait Component {
    /// Returns the widget's shared state.
    fn base(&self) -> &ComponentBase;

    /// Returns mutable access to the widget's shared state.
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Advances per-frame state (hover, animations, gestures).
    fn update(&mut self, frame: &Frame) {
        if !self.base().visible {
            return;
        }
        let over = self.is_mouse_over(frame.pointer);
        self.base_mut().update_hover(over, frame.partial_ticks);
    }

    /// Emits draw calls. Draws nothing while hidden.
    fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>);

    /// Handles a pointer press. Returns true if the press was consumed.
    fn mouse_down(&mut self, _pointer: Pointer, _button: MouseButton, _cx: &mut EventContext<'_>) -> bool {
        false
    }

    /// Handles a pointer release, wherever it happened.
    ///
    /// Transient state (drags, held sliders) must be cleared here
    /// unconditionally.
    fn mouse_up(&mut self, _pointer: Pointer, _button: MouseButton) {}

    /// Returns true iff the pointer lies within the bounds, edges included.
    fn is_mouse_over(&self, pointer: Pointer) -> bool {
        self.base().bounds.contains(pointer.x, pointer.y)
    }

    /// Height the widget occupies in its parent's layout this frame.
    fn height(&self) -> i32 {
        self.base().bounds.height
    }

    /// Moves the widget.
    fn set_position(&mut self, x: i32, y: i32) {
        let bounds = &mut self.base_mut().bounds;
        bounds.x = x;
        bounds.y = y;
    }

    /// Resizes the widget. Leaves keep their fixed height.
    fn set_width(&mut self, width: i32) {
        self.base_mut().bounds.width = width;
    }

    /// Current bounds.
    fn bounds(&self) -> Rect {
        self.base().bounds
    }

    /// Returns true unless hidden.
    fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Shows or hides the widget.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    /// Hover highlight, 0.0 (idle) to 1.0 (fully hovered).
    fn hover_progress(&self) -> f32 {
        self.base().hover_progress()
    }
}
