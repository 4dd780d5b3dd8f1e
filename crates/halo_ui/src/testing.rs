//! Shared fixtures for unit tests.

use crate::component::Component;
use crate::context::{EventContext, Feedback, MonospaceMetrics, RenderContext};
use crate::input::{Frame, MouseButton, Pointer};
use crate::layout::Viewport;
use crate::render::CommandList;
use crate::style::Theme;

pub const VIEWPORT: Viewport = Viewport::new(800, 600);

/// Frame at `(x, y)` with a full partial tick on an 800×600 viewport.
pub fn frame(x: i32, y: i32) -> Frame {
    Frame::new(Pointer::new(x, y), 1.0, VIEWPORT)
}

#[derive(Default)]
pub struct CountingFeedback {
    pub clicks: Vec<f32>,
}

impl Feedback for CountingFeedback {
    fn play_click(&mut self, volume: f32, _pitch: f32) {
        self.clicks.push(volume);
    }
}

pub struct Harness {
    pub fonts: MonospaceMetrics,
    pub feedback: CountingFeedback,
    pub theme: Theme,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            fonts: MonospaceMetrics::default(),
            feedback: CountingFeedback::default(),
            theme: Theme::DEFAULT,
        }
    }

    pub fn events(&mut self) -> EventContext<'_> {
        EventContext::new(&self.fonts, &mut self.feedback)
    }

    pub fn press(&mut self, component: &mut dyn Component, x: i32, y: i32, button: MouseButton) -> bool {
        let mut cx = self.events();
        component.mouse_down(Pointer::new(x, y), button, &mut cx)
    }

    pub fn render(&mut self, component: &dyn Component, frame: &Frame) -> CommandList {
        let mut list = CommandList::new();
        let mut cx = RenderContext::new(&mut list, &self.fonts, &self.theme);
        component.render(frame, &mut cx);
        list
    }
}
