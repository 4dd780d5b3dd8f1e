//! Labelled on/off switch.

use crate::animation::Animation;
use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;
use crate::style::{lerp, Argb};

use super::{ToggleHandler, CLICK_VOLUME};

/// Label on the left, sliding switch on the right.
pub struct Setting {
    base: ComponentBase,
    label: String,
    value: bool,
    knob: Animation,
    on_toggle: Option<ToggleHandler>,
}

impl Setting {
    /// Fixed height (the switch height).
    pub const HEIGHT: i32 = 18;
    /// Switch width.
    pub const SWITCH_WIDTH: i32 = 36;
    const SWITCH_RADIUS: i32 = 9;
    const KNOB_INSET: i32 = 2;
    const KNOB_RATE: f32 = 10.0;

    /// Creates a switch.
    #[must_use]
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            base: ComponentBase::new(Rect::new(0, 0, 0, Self::HEIGHT)),
            label: label.into(),
            value,
            knob: Animation::new(if value { 1.0 } else { 0.0 }, Self::KNOB_RATE),
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

    /// Current state.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Sets the state without calling the handler. The knob still slides.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
        self.knob.animate_to(if value { 1.0 } else { 0.0 });
    }

    /// Knob position, 0.0 (off) to 1.0 (on).
    #[must_use]
    pub fn knob_progress(&self) -> f32 {
        self.knob.value()
    }

    fn switch_bounds(&self) -> Rect {
        let bounds = self.base.bounds;
        Rect::new(bounds.right() - Self::SWITCH_WIDTH, bounds.y, Self::SWITCH_WIDTH, Self::HEIGHT)
    }
}

impl Component for Setting {
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
        let over = self.is_mouse_over(frame.pointer);
        self.base.update_hover(over, frame.partial_ticks);
        self.knob.update(frame.partial_ticks);
    }

    fn render(&self, _frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let bounds = self.base.bounds;
        let text_y = bounds.y + (bounds.height - cx.fonts.line_height()) / 2;
        cx.renderer.text(&self.label, bounds.x, text_y, cx.theme.text);

        let switch = self.switch_bounds();
        let fill = if self.value { cx.theme.accent } else { Argb::grey(255, 30) };
        cx.renderer.rounded_rect(switch, Self::SWITCH_RADIUS, fill);

        let border = Argb::grey(255, 50);
        cx.renderer.rect(switch.x, switch.y, switch.right(), switch.y + 1, border);
        cx.renderer.rect(switch.x, switch.bottom() - 1, switch.right(), switch.bottom(), border);
        cx.renderer.rect(switch.x, switch.y, switch.x + 1, switch.bottom(), border);
        cx.renderer.rect(switch.right() - 1, switch.y, switch.right(), switch.bottom(), border);

        let knob_size = Self::HEIGHT - Self::KNOB_INSET * 2;
        let min_x = switch.x + Self::KNOB_INSET;
        let max_x = switch.right() - knob_size - Self::KNOB_INSET;
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let knob_x = lerp(min_x as f32, max_x as f32, self.knob.value()) as i32;
        let knob = Rect::new(knob_x, switch.y + Self::KNOB_INSET, knob_size, knob_size);
        cx.renderer.rounded_rect(knob, knob_size / 2, Argb::WHITE);
        cx.renderer.rect(knob.x, knob.y, knob.right(), knob.y + 1, Argb::grey(200, 200));
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !self.is_mouse_over(pointer) || !button.is_primary() {
            return false;
        }

        self.set_value(!self.value);
        if let Some(handler) = self.on_toggle.as_mut() {
            handler(self.value);
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
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_knob_slides_after_click() {
        let last = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last);
        let mut setting = Setting::new("Show Version", false)
            .with_width(120)
            .on_toggle(move |v| sink.set(Some(v)));
        let mut harness = Harness::new();

        assert!(harness.press(&mut setting, 60, 5, MouseButton::Left));
        assert_eq!(last.get(), Some(true));
        assert_eq!(setting.knob_progress(), 0.0);

        for _ in 0..100 {
            setting.update(&frame(60, 5));
        }
        assert_eq!(setting.knob_progress(), 1.0);
    }

    #[test]
    fn test_switch_right_aligned() {
        let mut setting = Setting::new("Show Version", true).with_width(120);
        setting.set_position(10, 20);
        let mut harness = Harness::new();
        let list = harness.render(&setting, &frame(0, 0));

        let switch = list
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::RoundedRect { bounds, color, .. } if *color == harness.theme.accent => Some(*bounds),
                _ => None,
            })
            .expect("switch drawn in accent colour");
        assert_eq!(switch, Rect::new(94, 20, 36, 18));
    }
}
