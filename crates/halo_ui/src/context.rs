//! Host services handed explicitly to widgets.
//!
//! Widgets reach font metrics, click feedback and the renderer only through
//! these contexts, never through process-wide state.

use crate::render::Renderer;
use crate::style::Theme;

/// Text measurement supplied by the host font.
pub trait FontMetrics {
    /// Width of `text` in scaled pixels.
    fn text_width(&self, text: &str) -> i32;

    /// Height of one line of text.
    fn line_height(&self) -> i32 {
        8
    }
}

/// Audible feedback for qualifying clicks. Fire-and-forget.
pub trait Feedback {
    /// Plays the UI click sound.
    fn play_click(&mut self, volume: f32, pitch: f32);
}

/// Fixed-advance metrics for hosts without a font, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character.
    pub char_width: i32,
    /// Line height.
    pub line_height: i32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            char_width: 6,
            line_height: 8,
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> i32 {
        i32::try_from(text.chars().count())
            .unwrap_or(i32::MAX)
            .saturating_mul(self.char_width)
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Feedback sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn play_click(&mut self, _volume: f32, _pitch: f32) {}
}

/// Everything a widget needs while drawing.
pub struct RenderContext<'a> {
    /// Draw call sink.
    pub renderer: &'a mut dyn Renderer,
    /// Text measurement.
    pub fonts: &'a dyn FontMetrics,
    /// Colours.
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    /// Bundles the drawing services for one frame.
    pub fn new(renderer: &'a mut dyn Renderer, fonts: &'a dyn FontMetrics, theme: &'a Theme) -> Self {
        Self { renderer, fonts, theme }
    }
}

/// Everything a widget needs while handling a click.
pub struct EventContext<'a> {
    /// Text measurement, for hit regions that follow label widths.
    pub fonts: &'a dyn FontMetrics,
    /// Click sounds.
    pub feedback: &'a mut dyn Feedback,
}

impl<'a> EventContext<'a> {
    /// Bundles the event services for one pointer event.
    pub fn new(fonts: &'a dyn FontMetrics, feedback: &'a mut dyn Feedback) -> Self {
        Self { fonts, feedback }
    }

    /// Plays the standard control click.
    pub fn click(&mut self, volume: f32) {
        self.feedback.play_click(volume, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_width() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.text_width(""), 0);
        assert_eq!(metrics.text_width("Sprint"), 36);
        assert_eq!(metrics.line_height(), 8);
    }
}
