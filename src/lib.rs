//! xaml-colors - Color utilities and `Colors.xaml` palette scanning.
//!
//! This library provides the color side of a MAUI resource accessor
//! generator: normalized RGBA colors, alpha/opacity setters, lighten/darken
//! blends, hex encoding and decoding, and a scanner that reads the
//! `<Color x:Key="...">` entries of a resource dictionary into a [`Palette`].
//!
//! # Example
//!
//! ```
//! use xaml_colors::{from_hex, lighten, to_hex, with_opacity};
//!
//! let primary = from_hex("#512BD4").unwrap();
//! let hover = lighten(primary, 0.2);
//! let overlay = with_opacity(primary, 50);
//! assert_eq!(to_hex(primary), "#512BD4");
//! assert!(hover.red > primary.red);
//! assert_eq!(overlay.alpha, 0.5);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::HexLayout;
pub use error::{ColorError, Result};
pub use generator::{format_hex, to_hex, to_hex_with_alpha};
pub use model::{Color, ColorResource, Palette};
pub use parser::{detect_layout, from_hex, from_hex_rgba, named_color, parse_resource_dictionary};
pub use transform::{darken, lighten, with_alpha, with_opacity};
pub use validation::{validate_palette, ValidationResult};

/// Read and validate the colors of a resource dictionary.
///
/// This is the high-level pipeline:
/// 1. Scan the `<Color>` entries
/// 2. Validate keys and values
/// 3. Log warnings, fail on errors
///
/// # Arguments
///
/// * `content` - Text of a `Colors.xaml` resource dictionary
///
/// # Returns
///
/// The palette in document order.
pub fn load_palette(content: &str) -> Result<Palette> {
    let palette = parse_resource_dictionary(content)?;
    tracing::debug!("Scanned {} color(s)", palette.len());

    let validation = validate_palette(&palette)?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    if !validation.passed {
        for err in &validation.errors {
            tracing::error!("{}", err);
        }
        return Err(ColorError::ValidationFailed {
            count: validation.errors.len(),
        });
    }

    Ok(palette)
}
