//! Drawing seam between the widget tree and the host renderer.
//!
//! Widgets never rasterize anything. They call the four primitives of
//! [`Renderer`]; the host implements it directly or records into a
//! [`CommandList`] and replays the list on its own schedule.

use crate::layout::Rect;
use crate::style::Argb;

/// Immediate-mode renderer supplied by the host.
pub trait Renderer {
    /// Filled rectangle with rounded corners.
    ///
    /// Implementations clamp `radius` to `min(width, height) / 2`.
    fn rounded_rect(&mut self, bounds: Rect, radius: i32, color: Argb);

    /// Plain filled rectangle given by its edges.
    fn rect(&mut self, left: i32, top: i32, right: i32, bottom: i32, color: Argb);

    /// Single line of text with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32, color: Argb);

    /// Soft drop shadow behind `bounds`. `opacity` is in `[0, 1]`.
    fn shadow(&mut self, bounds: Rect, radius: i32, blur: i32, opacity: f32);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Rounded rectangle.
    RoundedRect {
        /// Bounds.
        bounds: Rect,
        /// Corner radius, already clamped.
        radius: i32,
        /// Fill colour.
        color: Argb,
    },
    /// Unrounded rectangle.
    Rect {
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
        /// Right edge.
        right: i32,
        /// Bottom edge.
        bottom: i32,
        /// Fill colour.
        color: Argb,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
        /// Text colour.
        color: Argb,
    },
    /// Drop shadow.
    Shadow {
        /// Bounds of the shadowed surface.
        bounds: Rect,
        /// Corner radius.
        radius: i32,
        /// Blur size in pixels.
        blur: i32,
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
}

/// Clamps a corner radius to what a `bounds`-sized rectangle can hold.
#[must_use]
pub fn clamp_radius(bounds: Rect, radius: i32) -> i32 {
    radius.min(bounds.width.min(bounds.height) / 2).max(0)
}

/// Expands a shadow into stacked translucent rounded rects.
///
/// For renderers without a blur primitive: layer `i` of `blur` grows the
/// bounds by `blur - i` on every side and carries
/// `opacity * (1 - i / blur) * 0.3` of black.
#[must_use]
pub fn shadow_layers(bounds: Rect, radius: i32, blur: i32, opacity: f32) -> Vec<RenderCommand> {
    let blur = blur.max(0);
    let opacity = opacity.clamp(0.0, 1.0);
    let mut layers = Vec::with_capacity(usize::try_from(blur).unwrap_or(0));

    for i in 0..blur {
        #[allow(clippy::cast_precision_loss)]
        let falloff = 1.0 - i as f32 / blur as f32;
        let layer = Rect::new(
            bounds.x - blur + i,
            bounds.y - blur + i,
            bounds.width + (blur - i) * 2,
            bounds.height + (blur - i) * 2,
        );
        layers.push(RenderCommand::RoundedRect {
            bounds: layer,
            radius: clamp_radius(layer, radius),
            color: Argb::BLACK.with_alpha_fraction(opacity * falloff * 0.3, 255),
        });
    }

    layers
}

/// Records draw calls for later replay.
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<RenderCommand>,
}

impl CommandList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
        }
    }

    /// Clears the list for a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, in submission order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Texts recorded this frame, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replays every recorded command into another renderer.
    pub fn replay(&self, target: &mut dyn Renderer) {
        for command in &self.commands {
            match command {
                RenderCommand::RoundedRect { bounds, radius, color } => {
                    target.rounded_rect(*bounds, *radius, *color);
                }
                RenderCommand::Rect { left, top, right, bottom, color } => {
                    target.rect(*left, *top, *right, *bottom, *color);
                }
                RenderCommand::Text { text, x, y, color } => target.text(text, *x, *y, *color),
                RenderCommand::Shadow { bounds, radius, blur, opacity } => {
                    target.shadow(*bounds, *radius, *blur, *opacity);
                }
            }
        }
    }
}

impl Renderer for CommandList {
    fn rounded_rect(&mut self, bounds: Rect, radius: i32, color: Argb) {
        self.commands.push(RenderCommand::RoundedRect {
            bounds,
            radius: clamp_radius(bounds, radius),
            color,
        });
    }

    fn rect(&mut self, left: i32, top: i32, right: i32, bottom: i32, color: Argb) {
        self.commands.push(RenderCommand::Rect { left, top, right, bottom, color });
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Argb) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }

    fn shadow(&mut self, bounds: Rect, radius: i32, blur: i32, opacity: f32) {
        self.commands.push(RenderCommand::Shadow {
            bounds,
            radius,
            blur,
            opacity: opacity.clamp(0.0, 1.0),
        });
    }
}
