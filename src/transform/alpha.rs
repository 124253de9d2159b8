//! Alpha channel setters.

use crate::config::OPACITY_MAX;
use crate::model::Color;

/// Replace the alpha channel, clamped to `[0, 1]`.
#[must_use]
pub fn with_alpha(color: Color, alpha: f64) -> Color {
    Color::new(color.red, color.green, color.blue, alpha)
}

/// Replace the alpha channel from a percentage, clamped to `0..=100`.
#[must_use]
pub fn with_opacity(color: Color, percentage: i32) -> Color {
    let percentage = percentage.clamp(0, OPACITY_MAX);
    with_alpha(color, percentage as f64 / OPACITY_MAX as f64)
}
