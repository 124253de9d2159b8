//! Normalized RGBA color value.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::clamp_unit;
use crate::config::{CHANNEL_MAX, DEFAULT_TONE_FACTOR};

/// Color with four channels normalized to `[0.0, 1.0]`.
///
/// Constructors, deserialization and all color operations clamp their
/// input. The fields stay public for reading; a struct literal is the only
/// way to build an out-of-range value, and any operation applied to it
/// clamps the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Unchecked wire form of [`Color`].
#[derive(Deserialize)]
struct RawColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::new(raw.red, raw.green, raw.blue, raw.alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    pub const TRANSPARENT: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Create a color, clamping each channel into range.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Create an opaque color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from 8-bit channels.
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        use crate::parser::byte_to_channel as norm;
        Self {
            red: norm(red),
            green: norm(green),
            blue: norm(blue),
            alpha: norm(alpha),
        }
    }

    /// 8-bit channels in RGBA order, truncating each `channel * 255`.
    pub fn to_bytes(&self) -> [u8; 4] {
        let trunc = |c: f64| (c * CHANNEL_MAX) as u8;
        [
            trunc(self.red),
            trunc(self.green),
            trunc(self.blue),
            trunc(self.alpha),
        ]
    }

    /// Same color with the RGB channels replaced, alpha kept.
    pub(crate) fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue), self.alpha)
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Lighten by the default factor.
    #[must_use]
    pub fn lighter(self) -> Self {
        crate::transform::lighten(self, DEFAULT_TONE_FACTOR)
    }

    /// Darken by the default factor.
    #[must_use]
    pub fn darker(self) -> Self {
        crate::transform::darken(self, DEFAULT_TONE_FACTOR)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::generator::to_hex_with_alpha(*self))
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parser::from_hex(value)
    }
}
