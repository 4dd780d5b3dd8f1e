//! Highlighted-text mod toggle.

use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;
use crate::style::{channel, Argb};

use super::{ToggleHandler, CLICK_VOLUME};

/// Single-line toggle: the label lights up in the accent colour when on.
pub struct Toggle {
    base: ComponentBase,
    label: String,
    value: bool,
    momentary: bool,
    on_toggle: Option<ToggleHandler>,
}

impl Toggle {
    /// Fixed height.
    pub const HEIGHT: i32 = 12;
    /// Size of the "enabled" dot.
    const DOT_SIZE: i32 = 3;

    /// Creates a toggle.
    #[must_use]
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            base: ComponentBase::new(Rect::new(0, 0, 0, Self::HEIGHT)),
            label: label.into(),
            value,
            momentary: false,
            on_toggle: None,
        }
    }

    /// Sets the initial width.
    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.base.bounds.width = width;
        self
    }

    /// Registers the change handler.
    #[must_use]
    pub fn on_toggle(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Makes the toggle an action: it reports `true` and falls back to off.
    #[must_use]
    pub fn momentary(mut self) -> Self {
        self.momentary = true;
        self.value = false;
        self
    }

    /// Label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current state.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Sets the state without calling the handler.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl Component for Toggle {
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

        let Rect { x, y, height, .. } = self.base.bounds;
        let color = if self.value {
            cx.theme.accent
        } else {
            Argb::grey(255, channel(100.0 + self.hover_progress() * 100.0))
        };
        cx.renderer.text(&self.label, x, y, color);

        if self.value {
            let dot_x = x + cx.fonts.text_width(&self.label) + 4;
            let dot_y = y + (height - Self::DOT_SIZE) / 2;
            cx.renderer.rounded_rect(
                Rect::new(dot_x, dot_y, Self::DOT_SIZE, Self::DOT_SIZE),
                Self::DOT_SIZE / 2,
                cx.theme.accent,
            );
        }
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.is_mouse_over(pointer) || !button.is_primary() {
            return false;
        }

        self.value = !self.value;
        if let Some(handler) = self.on_toggle.as_mut() {
            handler(self.value);
        }
        if self.momentary {
            self.value = false;
        }
        cx.click(CLICK_VOLUME);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;
    use crate::testing::{frame, Harness};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn placed(toggle: Toggle) -> Toggle {
        let mut toggle = toggle.with_width(100);
        toggle.set_position(10, 10);
        toggle
    }

    #[test]
    fn test_click_flips_and_reports() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut toggle = placed(Toggle::new("Sprint", false).on_toggle(move |v| sink.borrow_mut().push(v)));
        let mut harness = Harness::new();

        assert!(harness.press(&mut toggle, 20, 15, MouseButton::Left));
        assert!(toggle.value());
        assert!(harness.press(&mut toggle, 20, 15, MouseButton::Left));
        assert!(!toggle.value());

        assert_eq!(*seen.borrow(), [true, false]);
        assert_eq!(harness.feedback.clicks, [CLICK_VOLUME, CLICK_VOLUME]);
    }

    #[test]
    fn test_ignores_misses_secondary_and_hidden() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut toggle = placed(Toggle::new("Sprint", false).on_toggle(move |_| *sink.borrow_mut() += 1));
        let mut harness = Harness::new();

        assert!(!harness.press(&mut toggle, 200, 15, MouseButton::Left));
        assert!(!harness.press(&mut toggle, 20, 15, MouseButton::Right));
        toggle.set_visible(false);
        assert!(!harness.press(&mut toggle, 20, 15, MouseButton::Left));

        assert_eq!(*count.borrow(), 0);
        assert!(!toggle.value());
    }

    #[test]
    fn test_momentary_reports_then_resets() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let mut toggle = placed(Toggle::new("Reset Position", true).momentary().on_toggle(move |v| sink.borrow_mut().push(v)));
        let mut harness = Harness::new();

        assert!(!toggle.value());
        assert!(harness.press(&mut toggle, 20, 15, MouseButton::Left));
        assert!(harness.press(&mut toggle, 20, 15, MouseButton::Left));

        assert_eq!(*fired.borrow(), [true, true]);
        assert!(!toggle.value());
    }

    #[test]
    fn test_enabled_label_uses_accent_and_dot() {
        let toggle = placed(Toggle::new("Sprint", true));
        let mut harness = Harness::new();
        let list = harness.render(&toggle, &frame(0, 0));

        assert_eq!(list.len(), 2);
        assert!(matches!(
            &list.commands()[0],
            RenderCommand::Text { color, .. } if *color == harness.theme.accent
        ));
        assert!(matches!(
            list.commands()[1],
            RenderCommand::RoundedRect { bounds: Rect { x: 50, .. }, .. }
        ));
    }
}
