//! Draggable grouping panel with an open/close fade.

use crate::animation::Animation;
use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;
use crate::style::{channel, Argb};

use super::{Children, Gesture};

/// Titled panel. Unlike [`Window`](super::Window) it has a fixed size and
/// no minimize control; it opens and closes as a whole instead.
pub struct Panel {
    base: ComponentBase,
    title: String,
    children: Children,
    gesture: Gesture,
    open: bool,
    open_anim: Animation,
}

impl Panel {
    /// Header strip height.
    pub const HEADER_HEIGHT: i32 = 24;
    /// Inner padding.
    pub const PADDING: i32 = 12;
    /// Vertical gap between children.
    pub const SPACING: i32 = 8;
    const HEADER_INSET: i32 = 2;
    const CORNER_RADIUS: i32 = 8;
    const SHADOW_SIZE: i32 = 4;
    const SHADOW_OPACITY: f32 = 0.5;
    const OPEN_RATE: f32 = 12.0;

    /// Creates an open panel.
    #[must_use]
    pub fn new(title: impl Into<String>, bounds: Rect) -> Self {
        Self {
            base: ComponentBase::new(bounds),
            title: title.into(),
            children: Children::default(),
            gesture: Gesture::Idle,
            open: true,
            open_anim: Animation::new(1.0, Self::OPEN_RATE),
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Component + 'static) -> Self {
        self.add_child(Box::new(child));
        self
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: Box<dyn Component>) {
        self.children.push(child);
        self.layout_children();
    }

    /// Children, in order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Component>] {
        self.children.as_slice()
    }

    /// Title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gesture currently in progress.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns true once opening was requested.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open progress, 0.0 (closed) to 1.0 (open).
    #[must_use]
    pub fn open_progress(&self) -> f32 {
        self.open_anim.value()
    }

    /// Opens or closes the panel.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        self.open_anim.animate_to(if open { 1.0 } else { 0.0 });
    }

    /// Flips open/closed.
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    fn layout_children(&mut self) {
        let Rect { x, y, width, .. } = self.base.bounds;
        self.children.layout(
            x + Self::PADDING,
            y + Self::HEADER_HEIGHT + Self::PADDING,
            width - Self::PADDING * 2,
            Self::SPACING,
        );
    }

    fn children_live(&self) -> bool {
        self.open_anim.value() > 0.1
    }

    fn header(&self) -> Rect {
        let Rect { x, y, width, .. } = self.base.bounds;
        Rect::new(x, y + Self::HEADER_INSET, width, Self::HEADER_HEIGHT)
    }
}

impl Component for Panel {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn update(&mut self, frame: &Frame) {
        if !self.base.visible {
            return;
        }

        self.open_anim.update(frame.partial_ticks);
        if let Gesture::Dragging { offset } = self.gesture {
            let (x, y) = frame.viewport.clamp_origin(
                frame.pointer.x - offset.0,
                frame.pointer.y - offset.1,
                self.base.bounds.width,
                self.base.bounds.height,
            );
            self.base.bounds.x = x;
            self.base.bounds.y = y;
        }

        let over = self.is_mouse_over(frame.pointer);
        self.base.update_hover(over, frame.partial_ticks);

        self.layout_children();
        if self.open_anim.value() > 0.01 {
            let count = self.children.as_slice().len();
            self.children.update(frame, count);
        }
    }

    fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible || self.open_anim.value() < 0.01 {
            return;
        }

        let bounds = self.base.bounds;
        cx.renderer.shadow(bounds, Self::CORNER_RADIUS, Self::SHADOW_SIZE, Self::SHADOW_OPACITY);
        cx.renderer.rounded_rect(bounds, Self::CORNER_RADIUS, cx.theme.panel_background);

        let border_alpha = channel(100.0 + self.hover_progress() * 50.0);
        cx.renderer.rounded_rect(bounds.with_height(2), Self::CORNER_RADIUS, cx.theme.accent.with_alpha(border_alpha));

        let header = self.header();
        cx.renderer.rounded_rect(header, Self::CORNER_RADIUS, Argb::grey(150, 30));
        let title_y = header.y + (Self::HEADER_HEIGHT - cx.fonts.line_height()) / 2;
        cx.renderer.text(&self.title, bounds.x + Self::PADDING, title_y, cx.theme.text);

        if self.children_live() {
            let count = self.children.as_slice().len();
            self.children.render(frame, cx, count);
        }
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.is_mouse_over(pointer) {
            return false;
        }

        let header = self.header();
        if button.is_primary() && pointer.y >= header.y && pointer.y <= header.bottom() {
            let offset = (pointer.x - self.base.bounds.x, pointer.y - self.base.bounds.y);
            self.gesture = Gesture::Dragging { offset };
            tracing::debug!("Panel '{}' drag started (offset {:?})", self.title, offset);
            return true;
        }

        if !self.children_live() {
            return false;
        }
        let count = self.children.as_slice().len();
        self.children.mouse_down(pointer, button, cx, count)
    }

    fn mouse_up(&mut self, pointer: Pointer, button: MouseButton) {
        if self.gesture.is_dragging() {
            tracing::debug!("Panel '{}' drag ended", self.title);
        }
        self.gesture = Gesture::Idle;
        self.children.mouse_up(pointer, button);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.base.bounds.x = x;
        self.base.bounds.y = y;
        self.layout_children();
    }

    fn set_width(&mut self, width: i32) {
        self.base.bounds.width = width;
        self.layout_children();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Button, Setting};
    use crate::testing::{frame, Harness};

    fn panel() -> Panel {
        Panel::new("Appearance", Rect::new(100, 100, 220, 160))
            .with_child(Setting::new("Show Version", false))
            .with_child(Button::new("Apply", 0, 20))
    }

    #[test]
    fn test_children_laid_out_below_header() {
        let panel = panel();
        let first = panel.children()[0].bounds();
        let second = panel.children()[1].bounds();
        assert_eq!(first, Rect::new(112, 136, 196, 18));
        assert_eq!(second.y, 136 + 18 + 8);
    }

    #[test]
    fn test_drag_by_header() {
        let mut panel = panel();
        let mut harness = Harness::new();

        assert!(harness.press(&mut panel, 110, 110, MouseButton::Left));
        assert!(panel.gesture().is_dragging());

        panel.update(&frame(210, 160));
        assert_eq!((panel.bounds().x, panel.bounds().y), (200, 150));
        assert_eq!(panel.children()[0].bounds().x, 212);

        panel.mouse_up(Pointer::new(0, 0), MouseButton::Left);
        assert!(panel.gesture().is_idle());
    }

    #[test]
    fn test_closed_panel_draws_and_routes_nothing() {
        let mut panel = panel();
        let mut harness = Harness::new();

        panel.toggle();
        assert!(!panel.is_open());
        for _ in 0..100 {
            panel.update(&frame(0, 0));
        }
        assert_eq!(panel.open_progress(), 0.0);

        assert!(harness.render(&panel, &frame(0, 0)).is_empty());
        assert!(!harness.press(&mut panel, 150, 140, MouseButton::Left));

        panel.set_open(true);
        for _ in 0..100 {
            panel.update(&frame(0, 0));
        }
        assert!(harness.press(&mut panel, 150, 140, MouseButton::Left));
    }
}
