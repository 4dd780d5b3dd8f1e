//! Push buttons.

use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;
use crate::style::{channel, Argb};

use super::{ClickHandler, ToggleHandler, CLICK_VOLUME};

/// Vertical offset that centres one line of text inside `height`.
fn centred_text_y(y: i32, height: i32, line_height: i32) -> i32 {
    y + (height - line_height) / 2
}

/// Rounded push button with a hover-tinted background.
pub struct Button {
    base: ComponentBase,
    text: String,
    enabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    const CORNER_RADIUS: i32 = 6;
    const DISABLED_TEXT: Argb = Argb::opaque(0x88_8888);

    /// Creates an enabled button.
    #[must_use]
    pub fn new(text: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            base: ComponentBase::new(Rect::new(0, 0, width, height)),
            text: text.into(),
            enabled: true,
            on_click: None,
        }
    }

    /// Registers the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Caption.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the caption.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns false while the button ignores clicks.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Component for Button {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&self, _frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let bounds = self.base.bounds;
        let hover = self.hover_progress();
        let level = channel(30.0 + hover * 20.0);
        let background = Argb::grey(channel(150.0 + hover * 50.0), level);
        cx.renderer.rounded_rect(bounds, Self::CORNER_RADIUS, background);

        if hover > 0.1 {
            cx.renderer.rounded_rect(
                bounds.with_height(2),
                Self::CORNER_RADIUS,
                cx.theme.accent.with_alpha_fraction(hover, 150),
            );
        }

        let text_x = bounds.x + (bounds.width - cx.fonts.text_width(&self.text)) / 2;
        let text_y = centred_text_y(bounds.y, bounds.height, cx.fonts.line_height());
        let color = if self.enabled { cx.theme.text } else { Self::DISABLED_TEXT };
        cx.renderer.text(&self.text, text_x, text_y, color);
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.enabled || !self.is_mouse_over(pointer) || !button.is_primary() {
            return false;
        }

        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
        cx.click(CLICK_VOLUME);
        true
    }
}

/// Selectable category tab. The accent fill marks the selected state.
pub struct CategoryButton {
    base: ComponentBase,
    label: String,
    selected: bool,
    on_select: Option<ToggleHandler>,
}

impl CategoryButton {
    const CORNER_RADIUS: i32 = 4;
    const IDLE_TEXT: Argb = Argb::opaque(0xCC_CCCC);

    /// Creates an unselected tab.
    #[must_use]
    pub fn new(label: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            base: ComponentBase::new(Rect::new(0, 0, width, height)),
            label: label.into(),
            selected: false,
            on_select: None,
        }
    }

    /// Registers the handler called with the new selection state.
    #[must_use]
    pub fn on_select(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true while selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection without calling the handler.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl Component for CategoryButton {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&self, _frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let bounds = self.base.bounds;
        let hover = self.hover_progress();
        let background = if self.selected {
            cx.theme.accent.with_alpha(200)
        } else {
            Argb::grey(channel(100.0 + hover * 80.0), channel(20.0 + hover * 15.0))
        };
        cx.renderer.rounded_rect(bounds, Self::CORNER_RADIUS, background);

        if self.selected || hover > 0.1 {
            let border = if self.selected {
                cx.theme.accent
            } else {
                cx.theme.accent.with_alpha_fraction(hover, 150)
            };
            cx.renderer.rounded_rect(bounds.with_height(2), Self::CORNER_RADIUS, border);
        }

        let text_x = bounds.x + (bounds.width - cx.fonts.text_width(&self.label)) / 2;
        let text_y = centred_text_y(bounds.y, bounds.height, cx.fonts.line_height());
        let color = if self.selected || hover > 0.5 { cx.theme.text } else { Self::IDLE_TEXT };
        cx.renderer.text(&self.label, text_x, text_y, color);
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.is_mouse_over(pointer) || !button.is_primary() {
            return false;
        }

        self.selected = !self.selected;
        if let Some(handler) = self.on_select.as_mut() {
            handler(self.selected);
        }
        cx.click(CLICK_VOLUME);
        true
    }
}
