//! Validation logic for color palettes.

use std::collections::HashMap;

use crate::error::{ColorError, Result};
use crate::generator::to_hex_with_alpha;
use crate::model::{ColorResource, Palette};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check that a key can name a generated member: a letter or `_`, then
/// letters, digits or `_`.
pub fn is_valid_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Validate a whole palette.
pub fn validate_palette(palette: &Palette) -> Result<ValidationResult> {
    let mut result = ValidationResult::ok();

    if palette.is_empty() {
        return Err(ColorError::NoColorsFound);
    }

    let mut first_line: HashMap<&str, usize> = HashMap::new();
    let mut by_value: HashMap<String, &str> = HashMap::new();

    for resource in &palette.resources {
        result.merge(validate_resource(resource));

        if let Some(line) = first_line.get(resource.key.as_str()) {
            let duplicate = ColorError::DuplicateKey {
                key: resource.key.clone(),
            };
            result.add_error(format!(
                "Line {}: {} (first defined at line {})",
                resource.line, duplicate, line
            ));
            continue;
        }
        first_line.insert(&resource.key, resource.line);

        let hex = to_hex_with_alpha(resource.color);
        if let Some(existing) = by_value.get(&hex) {
            result.add_warning(format!(
                "Line {}: '{}' has the same value {} as '{}'",
                resource.line, resource.key, hex, existing
            ));
        } else {
            by_value.insert(hex, &resource.key);
        }
    }

    Ok(result)
}

/// Validate a single resource.
pub fn validate_resource(resource: &ColorResource) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !is_valid_identifier(&resource.key) {
        result.add_error(format!(
            "Line {}: Key '{}' is not a valid identifier",
            resource.line, resource.key
        ));
    }

    if resource.color.is_transparent() {
        result.add_warning(format!(
            "Line {}: '{}' is fully transparent",
            resource.line, resource.key
        ));
    }

    result
}
