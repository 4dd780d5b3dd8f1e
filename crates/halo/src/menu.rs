//! The category menu: four windows built from a configuration snapshot.
//!
//! Every control writes straight into the shared configuration through its
//! change handler. Nothing here holds a reference back into the widget tree;
//! the one action that needs the tree (resetting window positions) is posted
//! as a [`ResetRequest`] and carried out by the overlay after dispatch.

use std::cell::Cell;
use std::rc::Rc;

use halo_ui::{ExpandableMod, Screen, Slider, Toggle, UiResult, Viewport, Window, WindowLayout};

use crate::config::{ModConfig, SharedConfig};

/// Category windows, in creation (and dispatch) order.
pub const WINDOW_NAMES: [&str; 4] = ["Combat", "Render", "Movement", "Client"];

/// Default window width.
pub const WINDOW_WIDTH: i32 = 200;

/// Default top edge of the window row.
pub const DEFAULT_Y: i32 = 50;

/// Range of both clicks-per-second sliders.
const CPS_RANGE: (f64, f64) = (1.0, 30.0);

/// Default geometry: a horizontally centred row of windows.
#[must_use]
pub fn default_layout(name: &str, viewport: Viewport) -> WindowLayout {
    let index = WINDOW_NAMES.iter().position(|n| *n == name).unwrap_or(0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let count = WINDOW_NAMES.len() as i32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let index = index as i32;
    let row_x = (viewport.width - WINDOW_WIDTH * count) / 2;
    let height = if name == "Combat" { 200 } else { 150 };
    WindowLayout::new(row_x + index * WINDOW_WIDTH, DEFAULT_Y, WINDOW_WIDTH, height)
}

/// Set by the Reset Position action, consumed by whoever owns the screen.
#[derive(Debug, Clone, Default)]
pub struct ResetRequest(Rc<Cell<bool>>);

impl ResetRequest {
    /// Posts a request.
    pub fn request(&self) {
        self.0.set(true);
    }

    /// Returns true once per posted request.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// The built menu.
pub struct Menu {
    screen: Screen,
    reset: ResetRequest,
}

impl Menu {
    /// Builds all category windows at their default layout.
    ///
    /// # Errors
    ///
    /// Propagates [`halo_ui::UiError`] from window registration.
    pub fn build(config: &SharedConfig, viewport: Viewport) -> UiResult<Self> {
        let reset = ResetRequest::default();
        let mut screen = Screen::new();

        for name in WINDOW_NAMES {
            let mut window = Window::new(name, default_layout(name, viewport).rect());
            match name {
                "Combat" => window.add_child(Box::new(auto_clicker(config))),
                "Render" => window.add_child(Box::new(chest_esp(config))),
                "Movement" => window.add_child(Box::new(sprint(config))),
                _ => {
                    window.add_child(Box::new(show_version(config)));
                    window.add_child(Box::new(reset_position(&reset)));
                }
            }
            screen.add_window(name, window)?;
        }

        Ok(Self { screen, reset })
    }

    /// The window collection.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The window collection, for dispatch.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Returns true once after the Reset Position action fired.
    pub fn take_reset_request(&self) -> bool {
        self.reset.take()
    }

    /// Moves every window back to its default layout.
    ///
    /// # Errors
    ///
    /// Returns [`halo_ui::UiError::UnknownWindow`] if a category window is
    /// missing from the screen.
    pub fn apply_default_layouts(&mut self, viewport: Viewport) -> UiResult<()> {
        for name in WINDOW_NAMES {
            self.screen.set_layout(name, default_layout(name, viewport))?;
        }
        Ok(())
    }
}

fn row_width() -> i32 {
    WINDOW_WIDTH - Window::PADDING * 2
}

fn auto_clicker(config: &SharedConfig) -> ExpandableMod {
    let snapshot = config.read().clone();

    let cfg = SharedConfig::clone(config);
    let min_cps = Slider::new("Min CPS", snapshot.auto_clicker_min_cps, CPS_RANGE.0, CPS_RANGE.1).on_change(
        move |value| {
            let mut config = cfg.write();
            if value > config.auto_clicker_max_cps {
                config.auto_clicker_min_cps = config.auto_clicker_max_cps;
                Some(config.auto_clicker_max_cps)
            } else {
                config.auto_clicker_min_cps = value;
                None
            }
        },
    );

    let cfg = SharedConfig::clone(config);
    let max_cps = Slider::new("Max CPS", snapshot.auto_clicker_max_cps, CPS_RANGE.0, CPS_RANGE.1).on_change(
        move |value| {
            let mut config = cfg.write();
            if value < config.auto_clicker_min_cps {
                config.auto_clicker_max_cps = config.auto_clicker_min_cps;
                Some(config.auto_clicker_min_cps)
            } else {
                config.auto_clicker_max_cps = value;
                None
            }
        },
    );

    let cfg = SharedConfig::clone(config);
    ExpandableMod::new("Auto-Clicker", snapshot.auto_clicker_enabled)
        .with_width(row_width())
        .on_toggle(move |enabled| cfg.write().auto_clicker_enabled = enabled)
        .with_setting(min_cps)
        .with_setting(max_cps)
}

fn chest_esp(config: &SharedConfig) -> ExpandableMod {
    let snapshot = config.read().clone();
    let cfg = SharedConfig::clone(config);
    let entry = ExpandableMod::new("Chest ESP", snapshot.chest_esp_enabled)
        .with_width(row_width())
        .on_toggle(move |enabled| cfg.write().chest_esp_enabled = enabled);

    entry
        .with_setting(channel_slider(config, "Red", snapshot.chest_esp_red, |c, v| c.chest_esp_red = v))
        .with_setting(channel_slider(config, "Green", snapshot.chest_esp_green, |c, v| c.chest_esp_green = v))
        .with_setting(channel_slider(config, "Blue", snapshot.chest_esp_blue, |c, v| c.chest_esp_blue = v))
}

fn channel_slider(config: &SharedConfig, label: &str, initial: u8, store: fn(&mut ModConfig, u8)) -> Slider {
    let cfg = SharedConfig::clone(config);
    Slider::new(label, f64::from(initial), 0.0, 255.0).on_change(move |value| {
        store(&mut cfg.write(), color_channel(value));
        None
    })
}

/// Rounds a slider value onto a colour channel.
fn color_channel(value: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = value.round().clamp(0.0, 255.0) as u8;
    channel
}

fn sprint(config: &SharedConfig) -> Toggle {
    let cfg = SharedConfig::clone(config);
    Toggle::new("Sprint", config.read().sprint_enabled)
        .with_width(row_width())
        .on_toggle(move |enabled| cfg.write().sprint_enabled = enabled)
}

fn show_version(config: &SharedConfig) -> Toggle {
    let cfg = SharedConfig::clone(config);
    Toggle::new("Show Version", config.read().show_version)
        .with_width(row_width())
        .on_toggle(move |enabled| cfg.write().show_version = enabled)
}

fn reset_position(reset: &ResetRequest) -> Toggle {
    let reset = reset.clone();
    Toggle::new("Reset Position", false)
        .momentary()
        .with_width(row_width())
        .on_toggle(move |_| reset.request())
}
