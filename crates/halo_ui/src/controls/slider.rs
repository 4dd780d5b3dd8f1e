//! Horizontal numeric slider.
//!
//! The track sits at a fixed offset from the slider's left edge so stacked
//! sliders line up regardless of label length. Values are `f64`; everything
//! else in the tree is integer pixels.

use crate::component::{Component, ComponentBase};
use crate::context::{EventContext, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Rect;
use crate::style::Argb;

use super::{SliderHandler, CLICK_VOLUME};

/// Labelled slider over `[min, max]`.
///
/// Invariant: `min <= value <= max` after every mutation, mid-drag included.
pub struct Slider {
    base: ComponentBase,
    label: String,
    value: f64,
    min: f64,
    max: f64,
    dragging: bool,
    on_change: Option<SliderHandler>,
}

impl Slider {
    /// Fixed height.
    pub const HEIGHT: i32 = 16;
    /// Track offset from the slider's left edge.
    pub const TRACK_OFFSET: i32 = 60;
    /// Track width.
    pub const TRACK_WIDTH: i32 = 80;
    const TRACK_HEIGHT: i32 = 6;
    const HANDLE_SIZE: i32 = 10;

    /// Creates a slider. A reversed range is swapped; `value` is clamped.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let mut slider = Self {
            base: ComponentBase::new(Rect::new(0, 0, 0, Self::HEIGHT)),
            label: label.into(),
            value: min,
            min,
            max,
            dragging: false,
            on_change: None,
        };
        slider.set_value(value);
        slider
    }

    /// Sets the initial width.
    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.base.bounds.width = width;
        self
    }

    /// Registers the change handler. See [`SliderHandler`].
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(f64) -> Option<f64> + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true between a press on the track and the next release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Stores `value` clamped to the range. NaN becomes `min`.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.clamp(value);
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    fn track_x(&self) -> i32 {
        self.base.bounds.x + Self::TRACK_OFFSET
    }

    /// Value under a pointer column. Ends of the track map exactly onto the
    /// range ends.
    fn value_at(&self, pointer_x: i32) -> f64 {
        if self.max == self.min {
            return self.min;
        }
        let t = (f64::from(pointer_x - self.track_x()) / f64::from(Self::TRACK_WIDTH)).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.max
        } else {
            self.clamp(self.min + (self.max - self.min) * t)
        }
    }

    /// Fraction of the track covered by the current value.
    fn fill_fraction(&self) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    fn apply(&mut self, value: f64) {
        self.value = value;
        if let Some(handler) = self.on_change.as_mut() {
            if let Some(adjusted) = handler(value) {
                self.value = self.clamp(adjusted);
            }
        }
    }
}

impl Component for Slider {
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

        if self.dragging {
            let value = self.value_at(frame.pointer.x);
            if value != self.value {
                self.apply(value);
            }
        }
    }

    fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>) {
        if !self.base.visible {
            return;
        }

        let Rect { x, y, height, .. } = self.base.bounds;
        cx.renderer.text(&self.label, x, y, cx.theme.text);

        let track_x = self.track_x();
        let track_y = y + (height - Self::TRACK_HEIGHT) / 2;
        cx.renderer.rect(
            track_x,
            track_y,
            track_x + Self::TRACK_WIDTH,
            track_y + Self::TRACK_HEIGHT,
            cx.theme.track,
        );

        #[allow(clippy::cast_possible_truncation)]
        let filled = (f64::from(Self::TRACK_WIDTH) * self.fill_fraction()) as i32;
        if filled > 1 {
            cx.renderer.rect(track_x, track_y, track_x + filled, track_y + Self::TRACK_HEIGHT, cx.theme.accent);
        }

        let handle = Rect::new(
            track_x + filled - Self::HANDLE_SIZE / 2,
            y + (height - Self::HANDLE_SIZE) / 2,
            Self::HANDLE_SIZE,
            Self::HANDLE_SIZE,
        );
        let outline = Rect::new(handle.x - 1, handle.y - 1, Self::HANDLE_SIZE + 2, Self::HANDLE_SIZE + 2);
        cx.renderer.rounded_rect(outline, outline.width / 2, Argb::grey(255, 100));

        let handle_hot = self.dragging || handle.contains(frame.pointer.x, frame.pointer.y);
        let handle_color = if handle_hot { Argb::WHITE } else { Argb::grey(255, 240) };
        cx.renderer.rounded_rect(handle, Self::HANDLE_SIZE / 2, handle_color);

        let text = format!("{:.1}", self.value);
        cx.renderer.text(&text, track_x + Self::TRACK_WIDTH + 4, y, cx.theme.text_muted);
    }

    fn mouse_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        if !self.base.visible || !button.is_primary() {
            return false;
        }

        let track_x = self.track_x();
        let Rect { y, height, .. } = self.base.bounds;
        let on_track = pointer.x >= track_x
            && pointer.x <= track_x + Self::TRACK_WIDTH
            && pointer.y >= y
            && pointer.y <= y + height;
        if !on_track {
            return false;
        }

        self.dragging = true;
        let value = self.value_at(pointer.x);
        self.apply(value);
        cx.click(CLICK_VOLUME);
        true
    }

    fn mouse_up(&mut self, _pointer: Pointer, _button: MouseButton) {
        self.dragging = false;
    }
}
