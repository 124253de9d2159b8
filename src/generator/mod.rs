//! Hex color encoding.

mod hex;

pub use hex::{format_hex, to_hex, to_hex_with_alpha};
