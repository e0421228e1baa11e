//! Core types shared by the halo crates.

use std::time::Duration;

use ratatui::style::Color;

/// Interval between two animation ticks (~12 frames per second).
pub const TICK: Duration = Duration::from_millis(83);

/// Rows kept free at the bottom of the screen for the banner.
pub const BANNER_RESERVED_ROWS: u16 = 4;

/// Rows between the top of the screen and the logo.
pub const LOGO_TOP_PADDING: u16 = 2;

/// Size assumed when the terminal cannot report its own.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Base pink of the logo and banner.
pub const BASE_TINT: Tint = Tint::new(231, 172, 172);

/// Placeholder color for banner characters not yet typed.
pub const HIDDEN_TINT: Tint = Tint::new(50, 30, 30);

/// An RGB base color that can be dimmed by an intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray with the same value on every channel.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Scale every channel by `intensity`, truncating towards zero.
    ///
    /// Intensities outside `0.0..=1.0` (and NaN) are clamped first.
    pub fn scaled(self, intensity: f32) -> Self {
        let k = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        let scale = |c: u8| (c as f32 * k) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Convert to a true-color terminal color.
    pub const fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// How colors reach the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit foreground colors.
    #[default]
    TrueColor,
    /// Glyphs only, for terminals without ANSI color support.
    Plain,
}

impl ColorMode {
    /// Resolve a tint to the color actually emitted, if any.
    pub fn apply(self, tint: Tint) -> Option<Color> {
        match self {
            ColorMode::TrueColor => Some(tint.color()),
            ColorMode::Plain => None,
        }
    }
}

/// Geometry of the ring logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParams {
    /// Outer radius in rows.
    pub radius: u16,
    /// Width of the ring band, measured inwards from the radius.
    pub thickness: f32,
    /// Character cell height divided by width.
    pub aspect_ratio: f32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            radius: 6,
            thickness: 1.0,
            // Most terminal fonts are about twice as tall as wide
            aspect_ratio: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_scaled() {
        assert_eq!(BASE_TINT.scaled(1.0), BASE_TINT);
        assert_eq!(BASE_TINT.scaled(0.5), Tint::new(115, 86, 86));
        assert_eq!(BASE_TINT.scaled(0.0), Tint::gray(0));
    }

    #[test]
    fn test_tint_scaled_clamps() {
        assert_eq!(BASE_TINT.scaled(3.0), BASE_TINT);
        assert_eq!(BASE_TINT.scaled(-1.0), Tint::gray(0));
        assert_eq!(BASE_TINT.scaled(f32::NAN), Tint::gray(0));
    }

    #[test]
    fn test_color_mode_apply() {
        assert_eq!(
            ColorMode::TrueColor.apply(HIDDEN_TINT),
            Some(Color::Rgb(50, 30, 30))
        );
        assert_eq!(ColorMode::Plain.apply(HIDDEN_TINT), None);
    }

    #[test]
    fn test_ring_params_default() {
        let ring = RingParams::default();
        assert_eq!(ring.radius, 6);
        assert_eq!(ring.thickness, 1.0);
        assert_eq!(ring.aspect_ratio, 2.0);
    }
}
