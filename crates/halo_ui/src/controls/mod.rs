//! Leaf controls.
//!
//! Each control owns one discrete value and reports changes through a typed
//! handler registered at construction. Handlers receive the new value; they
//! never need a reference back to the control that called them.

mod button;
mod expandable;
mod setting;
mod slider;
mod toggle;

pub use button::{Button, CategoryButton};
pub use expandable::ExpandableMod;
pub use setting::Setting;
pub use slider::Slider;
pub use toggle::Toggle;

/// Called with the new state after a boolean control flips.
pub type ToggleHandler = Box<dyn FnMut(bool)>;

/// Called once per qualifying click.
pub type ClickHandler = Box<dyn FnMut()>;

/// Called with every new slider value.
///
/// Returning `Some(v)` replaces the stored value with `v` (still clamped to
/// the slider's range), which lets the owner enforce cross-field rules.
pub type SliderHandler = Box<dyn FnMut(f64) -> Option<f64>>;

/// Click volume for value changes.
pub(crate) const CLICK_VOLUME: f32 = 0.3;

/// Click volume for disclosure and minimize toggles.
pub(crate) const DISCLOSE_VOLUME: f32 = 0.2;
