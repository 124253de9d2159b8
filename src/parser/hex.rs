//! Hex color decoding.

use crate::config::{HexLayout, CHANNEL_MAX};
use crate::error::{ColorError, Result};
use crate::model::Color;

/// Strip a leading `#` and surrounding whitespace.
fn hex_digits(hex: &str) -> Result<&str> {
    if hex.trim().is_empty() {
        return Err(ColorError::invalid_format(hex, "empty color string"));
    }
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    Ok(digits)
}

/// Decode consecutive digit pairs into bytes.
fn decode_pairs<const N: usize>(original: &str, digits: &[u8]) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    for (slot, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
        let hi = nibble(pair[0]);
        let lo = nibble(pair[1]);
        match (hi, lo) {
            (Some(h), Some(l)) => *slot = h << 4 | l,
            _ => return Err(ColorError::invalid_format(original, "invalid hex digits")),
        }
    }
    Ok(out)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn layout_for(hex: &str, digits: &str) -> Result<HexLayout> {
    HexLayout::from_digit_count(digits.len())
        .ok_or_else(|| ColorError::invalid_format(hex, "expected 3, 6 or 8 hex digits"))
}

/// Layout `from_hex` would decode this string with.
pub fn detect_layout(hex: &str) -> Result<HexLayout> {
    let digits = hex_digits(hex)?;
    layout_for(hex, digits)
}

/// Decode digits already known to match `layout` in length.
fn decode_layout(hex: &str, digits: &[u8], layout: HexLayout) -> Result<Color> {
    let [r, g, b, a] = match layout {
        HexLayout::Rgb => {
            let doubled: Vec<u8> = digits.iter().flat_map(|&d| [d, d]).collect();
            let [r, g, b] = decode_pairs::<3>(hex, &doubled)?;
            [r, g, b, 255]
        }
        HexLayout::Rrggbb => {
            let [r, g, b] = decode_pairs::<3>(hex, digits)?;
            [r, g, b, 255]
        }
        HexLayout::Aarrggbb => {
            let [a, r, g, b] = decode_pairs::<4>(hex, digits)?;
            [r, g, b, a]
        }
        HexLayout::Rrggbbaa => decode_pairs::<4>(hex, digits)?,
    };

    Ok(Color::from_bytes(r, g, b, a))
}

/// Parse a hex color.
///
/// The allowed formats are:
/// * #RGB (each digit doubled)
/// * #RRGGBB
/// * #AARRGGBB (alpha first)
///
/// The `#` is optional and surrounding whitespace is ignored.
pub fn from_hex(hex: &str) -> Result<Color> {
    let digits = hex_digits(hex)?;
    let layout = layout_for(hex, digits)?;
    decode_layout(hex, digits.as_bytes(), layout)
}

/// Parse an 8-digit `#RRGGBBAA` color (alpha last).
///
/// No shorthand forms are accepted.
pub fn from_hex_rgba(hex: &str) -> Result<Color> {
    let digits = hex_digits(hex)?;
    if digits.len() != HexLayout::Rrggbbaa.digit_count() {
        return Err(ColorError::invalid_format(hex, "expected 8 hex digits"));
    }
    decode_layout(hex, digits.as_bytes(), HexLayout::Rrggbbaa)
}

/// Normalize a byte the same way the decoders do.
#[inline]
pub fn byte_to_channel(byte: u8) -> f64 {
    byte as f64 / CHANNEL_MAX
}
