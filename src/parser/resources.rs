//! Reader for `<Color>` entries of a MAUI resource dictionary.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{ColorError, Result};
use crate::model::{Color, ColorResource, Palette};

use super::hex::from_hex;
use super::named::named_color;

/// Default XML namespace of MAUI XAML documents.
pub const MAUI_NAMESPACE: &str = "http://schemas.microsoft.com/dotnet/2021/maui";

/// Namespaces bound to the `x:` prefix in MAUI XAML.
pub const XAML_NAMESPACES: &[&str] = &[
    "http://schemas.microsoft.com/winfx/2009/xaml",
    "http://schemas.microsoft.com/winfx/2006/xaml",
];

/// Decode a `<Color>` value: a named color or a hex string.
pub fn parse_color_value(value: &str) -> Result<Color> {
    match named_color(value) {
        Some(color) => Ok(color),
        None => from_hex(value),
    }
}

fn is_maui_color(node: &Node) -> bool {
    node.is_element()
        && node.tag_name().name() == "Color"
        && node.tag_name().namespace() == Some(MAUI_NAMESPACE)
}

fn resource_key<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    XAML_NAMESPACES
        .iter()
        .find_map(|ns| node.attribute((*ns, "Key")))
}

/// Parse all `<Color x:Key="...">value</Color>` entries from dictionary text.
///
/// Values may be hex strings or MAUI color names; other elements are
/// ignored. Line numbers are 1-based.
pub fn parse_resource_dictionary(content: &str) -> Result<Palette> {
    let doc = Document::parse(content)?;
    let mut palette = Palette::new();

    for node in doc.descendants().filter(is_maui_color) {
        let line = doc.text_pos_at(node.range().start).row as usize;

        let key = resource_key(&node).ok_or(ColorError::MissingKey { line })?;

        let value = node.text().map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ColorError::ParseError {
                line,
                message: format!("color '{}' has no value", key),
            });
        }

        let color = parse_color_value(value).map_err(|e| ColorError::ParseError {
            line,
            message: format!("color '{}': {}", key, e),
        })?;

        debug!("Line {}: {} = {}", line, key, value);
        palette.push(ColorResource::new(key, color, line));
    }

    Ok(palette)
}
