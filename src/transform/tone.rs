//! Lighten/darken by linear interpolation toward white or black.

use crate::config::float_cmp::clamp_unit;
use crate::model::Color;

/// Blend the RGB channels toward white by `factor` (clamped to `[0, 1]`).
///
/// Each channel becomes `c + (1 - c) * factor`; alpha is left alone.
#[must_use]
pub fn lighten(color: Color, factor: f64) -> Color {
    let factor = clamp_unit(factor);
    color.map_rgb(|c| c + (1.0 - c) * factor)
}

/// Blend the RGB channels toward black by `factor` (clamped to `[0, 1]`).
///
/// Each channel becomes `c * (1 - factor)`; alpha is left alone.
#[must_use]
pub fn darken(color: Color, factor: f64) -> Color {
    let factor = clamp_unit(factor);
    color.map_rgb(|c| c * (1.0 - factor))
}
