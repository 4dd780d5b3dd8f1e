//! Top-level draggable, resizable, minimizable window.
//!
//! # Gestures
//!
//! A primary press is resolved in this order:
//!
//! 1. resize handle (bottom-right square, only while fully expanded)
//! 2. minimize button in the header
//! 3. anywhere else in the header strip starts a drag
//! 4. children, while the body is visible
//!
//! Drag and resize follow the pointer in [`update`](Component::update) and
//! end on any release, wherever it happens.
//!
//! # Minimize
//!
//! `minimized` flips instantly; the rendered height trails it through an
//! animation. Hit testing, clamping and child visibility all read the
//! animated height.

use crate::animation::Animation;
use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::controls::DISCLOSE_VOLUME;
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::{Rect, Viewport};
use crate::persistence::WindowLayout;
use crate::style::Argb;

use super::{Children, Gesture};

/// Titled top-level window owning a column of children.
pub struct Window {
    base: ComponentBase,
    title: String,
    children: Children,
    gesture: Gesture,
    minimized: bool,
    minimize: Animation,
}

impl Window {
    /// Header strip height; also the fully minimized height.
    pub const HEADER_HEIGHT: i32 = 16;
    /// Inner padding around the child column.
    pub const PADDING: i32 = 8;
    /// Vertical gap between children.
    pub const SPACING: i32 = 6;
    /// Side of the resize handle square.
    pub const RESIZE_HANDLE: i32 = 8;
    /// Smallest width a resize can produce.
    pub const MIN_WIDTH: i32 = 200;
    /// Smallest height a resize can produce.
    pub const MIN_HEIGHT: i32 = 100;
    const CORNER_RADIUS: i32 = 2;
    const SHADOW_SIZE: i32 = 2;
    const SHADOW_OPACITY: f32 = 0.3;
    const BUTTON_SIZE: i32 = 10;
    const MINIMIZE_RATE: f32 = 10.0;

    /// Creates an expanded window. Size is floored at the minimums.
    #[must_use]
    pub fn new(title: impl Into<String>, bounds: Rect) -> Self {
        let mut window = Self {
            base: ComponentBase::new(bounds),
            title: title.into(),
            children: Children::default(),
            gesture: Gesture::Idle,
            minimized: false,
            minimize: Animation::new(1.0, Self::MINIMIZE_RATE),
        };
        window.apply_size(bounds.width, bounds.height);
        window
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Component + 'static) -> Self {
        self.add_child(Box::new(child));
        self
    }

    /// Appends a child. Insertion order is layout and render order.
    pub fn add_child(&mut self, child: Box<dyn Component>) {
        self.children.push(child);
        self.layout_children();
    }

    /// Children, in order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Component>] {
        self.children.as_slice()
    }

    /// Title shown in the header.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gesture currently in progress.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns true once minimize was requested, even mid-animation.
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Expansion progress, 1.0 = fully expanded, 0.0 = header only.
    #[must_use]
    pub fn minimize_progress(&self) -> f32 {
        self.minimize.value()
    }

    /// Target of the minimize animation.
    #[must_use]
    pub fn minimize_target(&self) -> f32 {
        self.minimize.target()
    }

    /// Flips between minimized and expanded.
    pub fn toggle_minimize(&mut self) {
        self.set_minimized(!self.minimized);
    }

    /// Requests a state; the height animates toward it from wherever it is.
    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
        self.minimize.animate_to(if minimized { 0.0 } else { 1.0 });
        tracing::debug!("Window '{}' minimized: {}", self.title, minimized);
    }

    /// Height currently drawn: header-only blended toward the full height.
    #[must_use]
    pub fn rendered_height(&self) -> i32 {
        let progress = self.minimize.value();
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let height = (self.base.bounds.height as f32 * progress
            + Self::HEADER_HEIGHT as f32 * (1.0 - progress)) as i32;
        height
    }

    /// Geometry to persist: origin and full (unminimized) size.
    #[must_use]
    pub fn layout(&self) -> WindowLayout {
        WindowLayout::from(self.base.bounds)
    }

    /// Moves and resizes from a persisted record, keeping the minimums.
    pub fn apply_layout(&mut self, layout: WindowLayout) {
        self.base.bounds.x = layout.x;
        self.base.bounds.y = layout.y;
        self.apply_size(layout.width, layout.height);
    }

    fn apply_size(&mut self, width: i32, height: i32) {
        self.base.bounds.width = width.max(Self::MIN_WIDTH);
        self.base.bounds.height = height.max(Self::MIN_HEIGHT);
        self.layout_children();
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

    /// Children that fit above the bottom padding at the rendered height.
    fn shown_children(&self) -> usize {
        if self.minimize.value() <= 0.1 {
            return 0;
        }
        let limit = self.base.bounds.y + self.rendered_height() - Self::PADDING;
        self.children.fitting(limit)
    }

    fn minimize_button(&self) -> Rect {
        let Rect { x, y, width, .. } = self.base.bounds;
        Rect::new(
            x + width - Self::PADDING - Self::BUTTON_SIZE,
            y + (Self::HEADER_HEIGHT - Self::BUTTON_SIZE) / 2,
            Self::BUTTON_SIZE,
            Self::BUTTON_SIZE,
        )
    }

    /// Resize square, present only while fully expanded.
    fn resize_handle(&self) -> Option<Rect> {
        if self.minimized || self.minimize.value() < 0.99 {
            return None;
        }
        let bounds = self.base.bounds;
        let height = self.rendered_height();
        Some(Rect::new(
            bounds.right() - Self::RESIZE_HANDLE,
            bounds.y + height - Self::RESIZE_HANDLE,
            Self::RESIZE_HANDLE,
            Self::RESIZE_HANDLE,
        ))
    }

    fn follow_pointer(&mut self, pointer: Pointer, viewport: Viewport) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { offset } => {
                let (x, y) = viewport.clamp_origin(
                    pointer.x - offset.0,
                    pointer.y - offset.1,
                    self.base.bounds.width,
                    self.rendered_height(),
                );
                self.base.bounds.x = x;
                self.base.bounds.y = y;
            }
            Gesture::Resizing { offset } => {
                let Rect { x, y, .. } = self.base.bounds;
                let width = (pointer.x - x + offset.0).min(viewport.width - x);
                let height = (pointer.y - y + offset.1).min(viewport.height - y);
                self.apply_size(width, height);
            }
        }
    }

    /// Pulls an expanded (or expanding) window back inside the viewport at
    /// its full height. A drag while minimized only clamps the header.
    fn keep_on_screen(&mut self, viewport: Viewport) {
        if self.minimized {
            return;
        }
        let Rect { x, y, width, height } = self.base.bounds;
        let (clamped_x, clamped_y) = viewport.clamp_origin(x, y, width, height);
        if (clamped_x, clamped_y) != (x, y) {
            self.base.bounds.x = clamped_x;
            self.base.bounds.y = clamped_y;
            tracing::debug!("Window '{}' pulled back on screen at ({}, {})", self.title, clamped_x, clamped_y);
        }
    }

    fn render_frame(&self, height: i32, cx: &mut RenderContext<'_>) {
        let bounds = self.base.bounds.with_height(height);
        let accent = cx.theme.accent;

        cx.renderer.shadow(bounds, Self::CORNER_RADIUS, Self::SHADOW_SIZE, Self::SHADOW_OPACITY);
        cx.renderer.rounded_rect(bounds, Self::CORNER_RADIUS, cx.theme.window_background);

        let (left, top, right, bottom) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
        cx.renderer.rect(left, top, right, top + 1, accent);
        cx.renderer.rect(left, top, left + 1, bottom, accent);
        cx.renderer.rect(right - 1, top, right, bottom, accent);
        cx.renderer.rect(left, bottom - 1, right, bottom, accent);

        let header = bounds.with_height(Self::HEADER_HEIGHT);
        cx.renderer.rounded_rect(header, Self::CORNER_RADIUS, cx.theme.header_background);
        cx.renderer.rect(left, header.bottom() - 1, right, header.bottom(), accent);

        let title_y = top + (Self::HEADER_HEIGHT - cx.fonts.line_height()) / 2;
        cx.renderer.text(&self.title, left + Self::PADDING, title_y, cx.theme.text);
    }

    fn render_minimize_button(&self, pointer: Pointer, cx: &mut RenderContext<'_>) {
        let button = self.minimize_button();
        let hot = button.contains(pointer.x, pointer.y);
        let fill = if hot { cx.theme.accent.with_alpha(200) } else { cx.theme.control_idle };
        cx.renderer.rounded_rect(button, 1, fill);

        let icon = if self.minimized { "+" } else { "-" };
        let icon_x = button.x + (Self::BUTTON_SIZE - cx.fonts.text_width(icon)) / 2;
        let icon_color = if hot { cx.theme.text } else { Argb::opaque(0xCC_CCCC) };
        cx.renderer.text(icon, icon_x, button.y + 1, icon_color);
    }
}

impl Component for Window {
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

        self.minimize.update(frame.partial_ticks);
        self.follow_pointer(frame.pointer, frame.viewport);
        self.keep_on_screen(frame.viewport);

        let over = self.is_mouse_over(frame.pointer);
        self.base.update_hover(over, frame.partial_ticks);

        self.layout_children();
        let shown = self.shown_children();
        self.children.update(frame, shown);
    }

    fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let height = self.rendered_height();
        if height < Self::HEADER_HEIGHT {
            return;
        }

        self.render_frame(height, cx);
        self.render_minimize_button(frame.pointer, cx);

        if height > Self::HEADER_HEIGHT {
            self.children.render(frame, cx, self.shown_children());
        }

        if let Some(handle) = self.resize_handle() {
            let fill = if handle.contains(frame.pointer.x, frame.pointer.y) {
                cx.theme.accent.with_alpha(200)
            } else {
                Argb::grey(150, 50)
            };
            cx.renderer.rounded_rect(handle, 1, fill);
        }
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.is_mouse_over(pointer) {
            return false;
        }

        if button.is_primary() {
            let Rect { x, y, .. } = self.base.bounds;

            if let Some(handle) = self.resize_handle() {
                if handle.contains(pointer.x, pointer.y) {
                    let offset = (
                        self.base.bounds.right() - pointer.x,
                        y + self.rendered_height() - pointer.y,
                    );
                    self.gesture = Gesture::Resizing { offset };
                    tracing::debug!("Window '{}' resize started", self.title);
                    return true;
                }
            }

            if self.minimize_button().contains(pointer.x, pointer.y) {
                self.toggle_minimize();
                cx.click(DISCLOSE_VOLUME);
                return true;
            }

            if pointer.y >= y && pointer.y <= y + Self::HEADER_HEIGHT {
                let offset = (pointer.x - x, pointer.y - y);
                self.gesture = Gesture::Dragging { offset };
                tracing::debug!("Window '{}' drag started (offset {:?})", self.title, offset);
                return true;
            }
        }

        if self.minimized {
            return false;
        }
        let shown = self.shown_children();
        self.children.mouse_down(pointer, button, cx, shown)
    }

    fn mouse_up(&mut self, pointer: Pointer, button: MouseButton) {
        if !self.gesture.is_idle() {
            tracing::debug!("Window '{}' gesture ended at {:?}", self.title, self.base.bounds);
            self.gesture = Gesture::Idle;
        }
        self.children.mouse_up(pointer, button);
    }

    fn is_mouse_over(&self, pointer: Pointer) -> bool {
        self.base
            .bounds
            .with_height(self.rendered_height())
            .contains(pointer.x, pointer.y)
    }

    fn height(&self) -> i32 {
        self.rendered_height()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.base.bounds.x = x;
        self.base.bounds.y = y;
        self.layout_children();
    }

    fn set_width(&mut self, width: i32) {
        let height = self.base.bounds.height;
        self.apply_size(width, height);
    }
}
