//! Mod toggle with a collapsible list of nested settings.
//!
//! The label band behaves like a [`Toggle`](super::Toggle). A secondary
//! click on the label or the disclosure icon slides the nested settings open
//! beneath it; the reported height follows the slide, so the enclosing
//! window's column reflows every frame while the animation runs.

use crate::animation::Animation;
use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::{Column, Rect};
use crate::style::{channel, Argb};

use super::{ToggleHandler, CLICK_VOLUME, DISCLOSE_VOLUME};

/// Toggleable mod entry owning nested settings.
///
/// Invariant: `height() == BASE_HEIGHT + round(progress × Σ(child height + SPACING))`.
pub struct ExpandableMod {
    base: ComponentBase,
    label: String,
    value: bool,
    expanded: bool,
    expand: Animation,
    settings: Vec<Box<dyn Component>>,
    on_toggle: Option<ToggleHandler>,
}

impl ExpandableMod {
    /// Height of the label band.
    pub const BASE_HEIGHT: i32 = 12;
    /// Gap above and between nested settings.
    pub const SPACING: i32 = 6;
    /// Horizontal indent of nested settings.
    pub const INDENT: i32 = 8;
    const EXPAND_RATE: f32 = 10.0;
    /// Extra slack to the right of the icon that still counts as disclosure.
    const DISCLOSURE_SLACK: i32 = 20;
    const ICON_GAP: i32 = 4;
    const DOT_SIZE: i32 = 3;
    const ICON_COLOR: Argb = Argb::opaque(0xAA_AAAA);

    /// Creates a collapsed entry.
    #[must_use]
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            base: ComponentBase::new(Rect::new(0, 0, 0, Self::BASE_HEIGHT)),
            label: label.into(),
            value,
            expanded: false,
            expand: Animation::new(0.0, Self::EXPAND_RATE),
            settings: Vec::new(),
            on_toggle: None,
        }
    }

    /// Sets the initial width.
    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.base.bounds.width = width;
        self
    }

    /// Registers the handler called when the label band flips the value.
    #[must_use]
    pub fn on_toggle(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Appends a nested setting.
    #[must_use]
    pub fn with_setting(mut self, setting: impl Component + 'static) -> Self {
        self.add_setting(Box::new(setting));
        self
    }

    /// Appends a nested setting. Settings keep insertion order.
    pub fn add_setting(&mut self, setting: Box<dyn Component>) {
        self.settings.push(setting);
        self.layout();
    }

    /// Nested settings, in order.
    #[must_use]
    pub fn settings(&self) -> &[Box<dyn Component>] {
        &self.settings
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

    /// Returns true once expansion was requested, even mid-slide.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens or closes the nested list. The height slides to match.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.expand.animate_to(if expanded { 1.0 } else { 0.0 });
    }

    /// Slide progress, 0.0 (collapsed) to 1.0 (fully open).
    #[must_use]
    pub fn expand_progress(&self) -> f32 {
        self.expand.value()
    }

    /// Sum of nested heights plus one gap each.
    fn content_height(&self) -> i32 {
        self.settings.iter().map(|s| s.height() + Self::SPACING).sum()
    }

    fn current_height(&self) -> i32 {
        let content = self.content_height();
        if content == 0 {
            return Self::BASE_HEIGHT;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let open = (self.expand.value() * content as f32).round() as i32;
        Self::BASE_HEIGHT + open
    }

    fn layout(&mut self) {
        let Rect { x, y, width, .. } = self.base.bounds;
        let mut column = Column::new(x + Self::INDENT, y + Self::BASE_HEIGHT + Self::SPACING, Self::SPACING);
        for setting in &mut self.settings {
            let (sx, sy) = column.place(setting.height());
            setting.set_position(sx, sy);
            setting.set_width(width - Self::INDENT * 2);
        }
        self.base.bounds.height = self.current_height();
    }

    /// Settings whose full height fits inside the current slide.
    fn revealed(&self) -> impl Iterator<Item = &Box<dyn Component>> + '_ {
        let limit = self.base.bounds.y + self.current_height();
        self.settings.iter().filter(move |s| s.bounds().bottom() <= limit)
    }

    fn indicator(&self) -> &'static str {
        if self.expanded {
            "v"
        } else {
            ">"
        }
    }

    fn indicator_x(&self, label_width: i32) -> i32 {
        self.base.bounds.x + label_width + Self::ICON_GAP
    }

    fn in_label_band(&self, pointer: Pointer) -> bool {
        let Rect { x, y, width, .. } = self.base.bounds;
        Rect::new(x, y, width, Self::BASE_HEIGHT).contains(pointer.x, pointer.y)
    }

    fn toggle_expanded(&mut self, cx: &mut EventContext<'_>) {
        self.set_expanded(!self.expanded);
        cx.click(DISCLOSE_VOLUME);
    }
}

impl Component for ExpandableMod {
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
        self.expand.update(frame.partial_ticks);
        self.layout();

        let over = self.is_mouse_over(frame.pointer);
        self.base.update_hover(over, frame.partial_ticks);

        if self.expand.value() > 0.1 {
            for setting in &mut self.settings {
                setting.update(frame);
            }
        }
    }

    fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let Rect { x, y, .. } = self.base.bounds;
        let label_color = if self.value {
            cx.theme.accent
        } else {
            Argb::grey(255, channel(100.0 + self.hover_progress() * 100.0))
        };
        cx.renderer.text(&self.label, x, y, label_color);

        let indicator = self.indicator();
        let indicator_x = self.indicator_x(cx.fonts.text_width(&self.label));
        cx.renderer.text(indicator, indicator_x, y, Self::ICON_COLOR);

        if self.value {
            let dot_x = indicator_x + cx.fonts.text_width(indicator) + Self::ICON_GAP;
            let dot_y = y + (Self::BASE_HEIGHT - Self::DOT_SIZE) / 2;
            cx.renderer.rounded_rect(
                Rect::new(dot_x, dot_y, Self::DOT_SIZE, Self::DOT_SIZE),
                Self::DOT_SIZE / 2,
                cx.theme.accent,
            );
        }

        if self.expand.value() > 0.1 {
            for setting in self.revealed() {
                setting.render(frame, cx);
            }
        }
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible {
            return false;
        }

        let label_width = cx.fonts.text_width(&self.label);
        let indicator_x = self.indicator_x(label_width);

        if self.in_label_band(pointer) {
            match button {
                MouseButton::Left => {
                    let icon_right = indicator_x + cx.fonts.text_width(self.indicator());
                    if pointer.x >= indicator_x && pointer.x <= icon_right {
                        self.toggle_expanded(cx);
                    } else {
                        self.value = !self.value;
                        if let Some(handler) = self.on_toggle.as_mut() {
                            handler(self.value);
                        }
                        cx.click(CLICK_VOLUME);
                    }
                    return true;
                }
                MouseButton::Right if pointer.x <= indicator_x + Self::DISCLOSURE_SLACK => {
                    self.toggle_expanded(cx);
                    return true;
                }
                _ => {}
            }
        }

        if !self.expanded || !button.is_primary() {
            return false;
        }

        let limit = self.base.bounds.y + self.current_height();
        self.settings
            .iter_mut()
            .filter(|s| s.bounds().bottom() <= limit)
            .any(|s| s.mouse_down(pointer, button, cx))
    }

    fn mouse_up(&mut self, pointer: Pointer, button: MouseButton) {
        for setting in &mut self.settings {
            setting.mouse_up(pointer, button);
        }
    }

    fn height(&self) -> i32 {
        self.current_height()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.base.bounds.x = x;
        self.base.bounds.y = y;
        self.layout();
    }

    fn set_width(&mut self, width: i32) {
        self.base.bounds.width = width;
        self.layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Slider, Toggle};
    use crate::testing::{frame, Harness};
    use std::cell::Cell;
    use std::rc::Rc;

    fn auto_clicker() -> ExpandableMod {
        let mut entry = ExpandableMod::new("Auto-Clicker", false)
            .with_width(180)
            .with_setting(Toggle::new("Left", false))
            .with_setting(Toggle::new("Right", false));
        entry.set_position(10, 10);
        entry
    }

    fn settle(entry: &mut ExpandableMod) {
        for _ in 0..200 {
            entry.update(&frame(0, 0));
        }
    }

    #[test]
    fn test_secondary_click_expands_to_full_height() {
        let mut entry = auto_clicker();
        let mut harness = Harness::new();
        assert_eq!(entry.height(), 12);

        assert!(harness.press(&mut entry, 15, 15, MouseButton::Right));
        assert!(entry.is_expanded());
        assert_eq!(harness.feedback.clicks, [DISCLOSE_VOLUME]);

        entry.update(&frame(0, 0));
        let mid = entry.height();
        assert!(mid > 12 && mid <= 48, "height mid-slide was {mid}");

        settle(&mut entry);
        assert!(entry.expand_progress() >= 0.99);
        assert_eq!(entry.height(), 48);
        assert_eq!(entry.bounds().height, 48);
    }

    #[test]
    fn test_primary_click_on_label_flips_value() {
        let last = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last);
        let mut entry = auto_clicker().on_toggle(move |v| sink.set(Some(v)));
        let mut harness = Harness::new();

        assert!(harness.press(&mut entry, 15, 15, MouseButton::Left));
        assert!(entry.value());
        assert!(!entry.is_expanded());
        assert_eq!(last.get(), Some(true));
    }

    #[test]
    fn test_primary_click_on_icon_discloses() {
        let mut entry = auto_clicker();
        let mut harness = Harness::new();

        // "Auto-Clicker" is 72 wide, so the icon starts at 10 + 72 + 4.
        assert!(harness.press(&mut entry, 87, 15, MouseButton::Left));
        assert!(entry.is_expanded());
        assert!(!entry.value());
    }

    #[test]
    fn test_nested_layout_and_forwarding() {
        let mut entry = auto_clicker();
        let mut harness = Harness::new();

        // Collapsed: nested rows are not clickable.
        assert!(!harness.press(&mut entry, 30, 30, MouseButton::Left));

        entry.set_expanded(true);
        settle(&mut entry);

        let first = entry.settings()[0].bounds();
        let second = entry.settings()[1].bounds();
        assert_eq!(first, Rect::new(18, 28, 164, 12));
        assert_eq!(second, Rect::new(18, 46, 164, 12));

        assert!(harness.press(&mut entry, 30, 30, MouseButton::Left));
        assert!(!entry.value());
    }

    #[test]
    fn test_collapse_after_slider_drag() {
        let mut entry = ExpandableMod::new("Chest ESP", true)
            .with_width(200)
            .with_setting(Slider::new("Red", 100.0, 0.0, 255.0));
        entry.set_expanded(true);
        settle(&mut entry);

        let mut harness = Harness::new();
        let track_x = entry.settings()[0].bounds().x + Slider::TRACK_OFFSET;
        let y = entry.settings()[0].bounds().y + 4;
        assert!(harness.press(&mut entry, track_x + 40, y, MouseButton::Left));

        entry.set_expanded(false);
        entry.mouse_up(Pointer::new(0, 0), MouseButton::Left);
        settle(&mut entry);
        assert_eq!(entry.height(), 12);
    }

    #[test]
    fn test_empty_entry_never_grows() {
        let mut entry = ExpandableMod::new("Sprint", false).with_width(100);
        entry.set_expanded(true);
        settle(&mut entry);
        assert_eq!(entry.height(), 12);
    }
}
