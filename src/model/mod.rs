//! Data model types for colors and palettes.

mod color;
mod palette;

pub use color::Color;
pub use palette::{key_prefix, ColorResource, Palette};
