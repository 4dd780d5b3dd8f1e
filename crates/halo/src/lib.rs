//! # HALO
//!
//! In-game overlay menu built on [`halo_ui`].
//!
//! - [`config`]: the persisted TOML configuration shared with game-side features
//! - [`menu`]: the four category windows and their controls
//! - [`overlay`]: the open/close gate the host drives each frame
//!
//! The host owns the render thread, the renderer, the font and the sound
//! engine. It calls [`Overlay::open`] when the menu key is pressed, then
//! [`Overlay::frame`] every frame and the pointer methods on input, and
//! [`Overlay::close`] on escape.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod menu;
pub mod overlay;

pub use config::{ConfigError, ConfigResult, ConfigStore, ModConfig, SharedConfig};
pub use menu::{Menu, ResetRequest};
pub use overlay::Overlay;
