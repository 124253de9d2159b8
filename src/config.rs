//! Configuration constants and settings for color handling.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Largest value of an 8-bit channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Default blend factor for lighten/darken.
pub const DEFAULT_TONE_FACTOR: f64 = 0.2;

/// Upper bound of an opacity percentage.
pub const OPACITY_MAX: i32 = 100;

/// Tolerance for a channel surviving a hex round trip (one byte step).
pub const HEX_ROUND_TRIP_TOLERANCE: f64 = 1.0 / CHANNEL_MAX;

/// Hex encoding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HexLayout {
    /// `RGB` shorthand, each digit doubled.
    Rgb,
    /// `RRGGBB`, opaque.
    #[default]
    Rrggbb,
    /// `AARRGGBB`, alpha first.
    Aarrggbb,
    /// `RRGGBBAA`, alpha last.
    Rrggbbaa,
}

impl HexLayout {
    /// Layout accepted by the general decoder for a given digit count.
    ///
    /// Eight digits map to the alpha-first form; the alpha-last form is only
    /// reachable through the dedicated RGBA decoder.
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(HexLayout::Rgb),
            6 => Some(HexLayout::Rrggbb),
            8 => Some(HexLayout::Aarrggbb),
            _ => None,
        }
    }

    /// Number of hex digits in this layout.
    pub fn digit_count(&self) -> usize {
        match self {
            HexLayout::Rgb => 3,
            HexLayout::Rrggbb => 6,
            HexLayout::Aarrggbb | HexLayout::Rrggbbaa => 8,
        }
    }

    /// Whether the layout carries an alpha byte.
    pub fn has_alpha(&self) -> bool {
        matches!(self, HexLayout::Aarrggbb | HexLayout::Rrggbbaa)
    }
}

impl std::fmt::Display for HexLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexLayout::Rgb => write!(f, "RGB"),
            HexLayout::Rrggbb => write!(f, "RRGGBB"),
            HexLayout::Aarrggbb => write!(f, "AARRGGBB"),
            HexLayout::Rrggbbaa => write!(f, "RRGGBBAA"),
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Clamp into `[0, 1]`, mapping NaN to zero.
    #[inline]
    pub fn clamp_unit(value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}
