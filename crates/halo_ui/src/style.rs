//! Colours and the overlay theme.
//!
//! Dark translucent surfaces with a single configurable accent colour reused
//! for every enabled, selected or hovered state.

/// Packed `0xAARRGGBB` colour, the format the host renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Solid black.
    pub const BLACK: Self = Self::new(255, 0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Packs channels as `(alpha << 24) | (red << 16) | (green << 8) | blue`.
    #[must_use]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Opaque colour from a `0xRRGGBB` value.
    #[must_use]
    pub const fn opaque(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Neutral grey with the given level on every channel.
    #[must_use]
    pub const fn grey(alpha: u8, level: u8) -> Self {
        Self::new(alpha, level, level, level)
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `0xRRGGBB` without alpha.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Returns a new colour with different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | self.rgb())
    }

    /// Alpha from a `[0, 1]` fraction scaled onto `max`.
    #[must_use]
    pub fn with_alpha_fraction(self, fraction: f32, max: u8) -> Self {
        self.with_alpha(channel(fraction * f32::from(max)))
    }
}

/// Converts a float to a colour channel, saturating at both ends.
#[must_use]
pub fn channel(value: f32) -> u8 {
    // truncation matches the host's int colour maths
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = value.clamp(0.0, 255.0) as u8;
    byte
}

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Complete theme for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Accent colour (opaque).
    pub accent: Argb,
    /// Window body.
    pub window_background: Argb,
    /// Window header strip.
    pub header_background: Argb,
    /// Panel body.
    pub panel_background: Argb,
    /// Primary text.
    pub text: Argb,
    /// Secondary text (values, hints).
    pub text_muted: Argb,
    /// Inactive control surfaces.
    pub control_idle: Argb,
    /// Slider track.
    pub track: Argb,
}

impl Theme {
    /// Near-black windows with a cyan-blue accent.
    pub const DEFAULT: Self = Self {
        accent: Argb::new(255, 100, 150, 255),
        window_background: Argb::grey(255, 10),
        header_background: Argb::grey(255, 5),
        panel_background: Argb::grey(200, 20),
        text: Argb::opaque(0xFF_FFFF),
        text_muted: Argb::opaque(0xAA_AAAA),
        control_idle: Argb::grey(150, 40),
        track: Argb::grey(255, 200),
    };

    /// Same theme with a different accent, given as `0xRRGGBB`.
    #[must_use]
    pub const fn with_accent(self, rgb: u32) -> Self {
        Self {
            accent: Argb::opaque(rgb),
            ..self
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let color = Argb::new(0x80, 0x11, 0x22, 0x33);
        assert_eq!(color.0, 0x8011_2233);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x11);
        assert_eq!(color.green(), 0x22);
        assert_eq!(color.blue(), 0x33);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let accent = Argb::opaque(0x6496FF);
        let faded = accent.with_alpha(150);
        assert_eq!(faded.rgb(), 0x6496FF);
        assert_eq!(faded.alpha(), 150);
    }

    #[test]
    fn test_channel_saturates() {
        assert_eq!(channel(-3.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(127.9), 127);
    }

    #[test]
    fn test_theme_accent_override() {
        let theme = Theme::DEFAULT.with_accent(0xFF0000);
        assert_eq!(theme.accent, Argb::new(255, 255, 0, 0));
        assert_eq!(theme.text, Theme::DEFAULT.text);
    }
}
