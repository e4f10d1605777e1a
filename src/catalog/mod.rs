mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single launchable item: display name, short description and the
/// invocation string handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "cmd")]
    pub invocation: String,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        invocation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            invocation: invocation.into(),
        }
    }
}

/// Accent color of a category, stored as plain RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` token. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for AccentColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color '{value}'"))
    }
}

impl From<AccentColor> for String {
    fn from(value: AccentColor) -> Self {
        value.to_hex()
    }
}

/// A named, colored group of entries shown as one sidebar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    pub color: AccentColor,
    #[serde(rename = "items")]
    pub entries: Vec<CatalogEntry>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: AccentColor,
        entries: Vec<CatalogEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color,
            entries,
        }
    }

    /// Export the category as `{icon, color, items: [{name, desc, cmd}]}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "icon": self.icon,
            "color": self.color.to_hex(),
            "items": self.entries,
        })
    }
}

/// Stable identifier of an entry inside a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    pub category: usize,
    pub entry: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{name}'")]
pub struct NotFoundError {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),
}

/// Immutable catalog of categories in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The compiled-in catalog of Windows configuration surfaces.
    pub fn builtin() -> Self {
        let categories = builtin::categories();
        let index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(index.len(), categories.len());
        Self { categories, index }
    }

    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            if index.insert(c.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCategory(c.name.clone()));
            }
        }
        Ok(Self { categories, index })
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, name: &str) -> Result<&Category, NotFoundError> {
        self.index
            .get(name)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| NotFoundError {
                name: name.to_string(),
            })
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn entry(&self, id: EntryId) -> Option<(&Category, &CatalogEntry)> {
        let category = self.categories.get(id.category)?;
        let entry = category.entries.get(id.entry)?;
        Some((category, entry))
    }

    /// Iterate all entries in registry order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Category, &CatalogEntry)> {
        self.categories.iter().enumerate().flat_map(|(ci, c)| {
            c.entries.iter().enumerate().map(move |(ei, e)| {
                (
                    EntryId {
                        category: ci,
                        entry: ei,
                    },
                    c,
                    e,
                )
            })
        })
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_color_parses_hex() {
        assert_eq!(
            AccentColor::from_hex("#3b82f6"),
            Some(AccentColor::rgb(0x3b, 0x82, 0xf6))
        );
        assert_eq!(AccentColor::from_hex("10B981").map(|c| c.to_hex()), Some("#10b981".into()));
        assert_eq!(AccentColor::from_hex("#fff"), None);
        assert_eq!(AccentColor::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn category_exports_items_shape() {
        let cat = Category::new(
            "Apps",
            "📦",
            AccentColor::rgb(0x63, 0x66, 0xf1),
            vec![CatalogEntry::new("Default Apps", "Set default programs", "ms-settings:defaultapps")],
        );
        let json = cat.to_json();
        assert_eq!(json["color"], "#6366f1");
        assert_eq!(json["items"][0]["desc"], "Set default programs");
        assert_eq!(json["items"][0]["cmd"], "ms-settings:defaultapps");
    }

    #[test]
    fn entry_lookup_by_id() {
        let catalog = Catalog::builtin();
        let (cat, entry) = catalog
            .entry(EntryId {
                category: 0,
                entry: 0,
            })
            .unwrap();
        assert_eq!(cat.name, "System");
        assert_eq!(entry.invocation, "msinfo32");
        assert!(catalog
            .entry(EntryId {
                category: 0,
                entry: 99,
            })
            .is_none());
    }
}
