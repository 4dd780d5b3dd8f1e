//! # HALO UI
//!
//! Frame-driven widget framework for an in-game overlay:
//! - Animated values that ease toward discrete targets
//! - Windows that drag, resize and minimize
//! - Leaf controls (toggles, sliders, buttons, expandable mods)
//! - A root screen that routes pointer input across windows
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FRAME PIPELINE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  Host tick → Screen::update → Screen::render → Renderer  │
//! │      ↓             ↓                ↓             ↓      │
//! │  Frame       Gestures/Anims    Draw calls     Host GPU   │
//! │                                                          │
//! │  pointer down → first window that consumes it            │
//! │  pointer up   → every window, unconditionally            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution model
//!
//! Everything runs on the host's render thread, once per displayed frame.
//! Nothing blocks, nothing is shared. The framework never draws pixels and
//! never persists anything itself: drawing goes through [`Renderer`], layout
//! persistence through [`LayoutStore`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod component;
pub mod containers;
pub mod context;
pub mod controls;
pub mod error;
pub mod input;
pub mod layout;
pub mod persistence;
pub mod render;
pub mod screen;
pub mod style;

#[cfg(test)]
mod testing;

pub use animation::{ease_out_cubic, Animation};
pub use component::{Component, ComponentBase};
pub use containers::{Panel, Window};
pub use context::{EventContext, Feedback, FontMetrics, MonospaceMetrics, RenderContext, SilentFeedback};
pub use controls::{Button, CategoryButton, ExpandableMod, Setting, Slider, Toggle};
pub use error::{UiError, UiResult};
pub use input::{Frame, MouseButton, Pointer};
pub use layout::{Column, Rect, Viewport};
pub use persistence::{LayoutStore, MemoryLayoutStore, WindowLayout};
pub use render::{CommandList, RenderCommand, Renderer};
pub use screen::Screen;
pub use style::{Argb, Theme};
