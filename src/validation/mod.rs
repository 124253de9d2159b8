//! Palette validation.

mod validate;

pub use validate::{is_valid_identifier, validate_palette, validate_resource, ValidationResult};
