//! Hex color and resource dictionary parsing.

mod hex;
mod named;
mod resources;

pub use hex::{byte_to_channel, detect_layout, from_hex, from_hex_rgba};
pub use named::named_color;
pub use resources::{parse_color_value, parse_resource_dictionary, MAUI_NAMESPACE, XAML_NAMESPACES};
