//! Color transformations: alpha/opacity setters and lighten/darken blends.

mod alpha;
mod tone;

pub use alpha::{with_alpha, with_opacity};
pub use tone::{darken, lighten};
