//! Hex color encoding.

use std::fmt::Write;

use crate::config::HexLayout;
use crate::model::Color;

/// Format a color's bytes in the given layout, uppercase with a leading `#`.
///
/// Channels are converted with `(channel * 255) as u8`, truncating rather
/// than rounding. The shorthand layout keeps only the high digit of each
/// byte.
pub fn format_hex(color: Color, layout: HexLayout) -> String {
    let [r, g, b, a] = color.to_bytes();
    let mut out = String::with_capacity(1 + layout.digit_count());
    out.push('#');

    match layout {
        HexLayout::Rgb => {
            for byte in [r, g, b] {
                write!(out, "{:X}", byte >> 4).unwrap();
            }
        }
        HexLayout::Rrggbb => write!(out, "{:02X}{:02X}{:02X}", r, g, b).unwrap(),
        HexLayout::Aarrggbb => write!(out, "{:02X}{:02X}{:02X}{:02X}", a, r, g, b).unwrap(),
        HexLayout::Rrggbbaa => write!(out, "{:02X}{:02X}{:02X}{:02X}", r, g, b, a).unwrap(),
    }

    out
}

/// Encode as `#RRGGBB`; alpha is dropped.
pub fn to_hex(color: Color) -> String {
    format_hex(color, HexLayout::Rrggbb)
}

/// Encode as `#RRGGBBAA` (alpha last).
pub fn to_hex_with_alpha(color: Color) -> String {
    format_hex(color, HexLayout::Rrggbbaa)
}
