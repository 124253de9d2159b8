//! Palette of keyed color resources read from a resource dictionary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Color;

/// A single `<Color x:Key="...">` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorResource {
    /// Resource key (`x:Key`).
    pub key: String,
    /// Decoded color value.
    pub color: Color,
    /// 1-based source line of the element.
    pub line: usize,
}

impl ColorResource {
    /// Create a new resource.
    pub fn new(key: impl Into<String>, color: Color, line: usize) -> Self {
        Self {
            key: key.into(),
            color,
            line,
        }
    }

    /// Group prefix of this resource's key.
    pub fn prefix(&self) -> &str {
        key_prefix(&self.key)
    }
}

/// Leading PascalCase word of a key.
///
/// The first character is always kept, followed by every lowercase letter
/// up to the next uppercase letter, digit or separator.
pub fn key_prefix(key: &str) -> &str {
    let mut chars = key.char_indices();
    if chars.next().is_none() {
        return key;
    }
    let end = chars
        .find(|(_, c)| !c.is_lowercase())
        .map(|(i, _)| i)
        .unwrap_or(key.len());
    &key[..end]
}

/// Ordered collection of color resources, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub resources: Vec<ColorResource>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource.
    pub fn push(&mut self, resource: ColorResource) {
        self.resources.push(resource);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Look up the first resource with the given key.
    pub fn get(&self, key: &str) -> Option<&ColorResource> {
        self.resources.iter().find(|r| r.key == key)
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.key.as_str())
    }

    /// Keys sorted ordinally.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// Resources grouped by key prefix, each group sorted by key.
    pub fn groups(&self) -> BTreeMap<&str, Vec<&ColorResource>> {
        let mut groups: BTreeMap<&str, Vec<&ColorResource>> = BTreeMap::new();
        for resource in &self.resources {
            groups.entry(resource.prefix()).or_default().push(resource);
        }
        for members in groups.values_mut() {
            members.sort_by(|a, b| a.key.cmp(&b.key));
        }
        groups
    }
}

impl FromIterator<ColorResource> for Palette {
    fn from_iter<I: IntoIterator<Item = ColorResource>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}
