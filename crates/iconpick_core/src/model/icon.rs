//! Icon record model.
//!
//! # Responsibility
//! - Define the normalized record for one selectable icon.
//! - Expose the derived icon-name enumeration used to validate stored values.
//!
//! # Invariants
//! - `name` comes from the descriptor file base name, never its content.
//! - `name` is unique across one catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalized icon entry.
///
/// Field names on the wire follow the upstream descriptor format, so the
/// generated artifacts stay readable next to the source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Lowercase-hyphenated identifier, e.g. `arrow-up`.
    pub name: String,
    /// Descriptor schema reference, kept verbatim.
    #[serde(rename = "$schema")]
    pub schema_version: String,
    pub contributors: Vec<String>,
    /// Free-form search keywords.
    pub tags: Vec<String>,
    /// Category names; may reference categories that do not exist.
    pub categories: Vec<String>,
}

impl IconRecord {
    /// Creates a record with empty metadata.
    ///
    /// Mostly useful for fixtures and hand-assembled catalogs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_version: String::new(),
            contributors: Vec::new(),
            tags: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered set of every icon name in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconNames {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl IconNames {
    pub fn from_records(icons: &[IconRecord]) -> Self {
        let ordered: Vec<String> = icons.iter().map(|icon| icon.name.clone()).collect();
        let lookup = ordered.iter().cloned().collect();
        Self { ordered, lookup }
    }

    /// Returns whether `name` is a known icon.
    ///
    /// Exact, case-sensitive comparison.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Names in catalog order.
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{IconNames, IconRecord};

    #[test]
    fn serializes_with_upstream_field_names() {
        let mut icon = IconRecord::new("arrow-up")
            .with_tags(["direction", "north"])
            .with_categories(["arrows"]);
        icon.schema_version = "../icon.schema.json".to_string();
        icon.contributors = vec!["colebemis".to_string()];

        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["name"], "arrow-up");
        assert_eq!(json["$schema"], "../icon.schema.json");
        assert_eq!(json["tags"][1], "north");
        assert_eq!(json["categories"][0], "arrows");
        assert_eq!(json["contributors"][0], "colebemis");
    }

    #[test]
    fn icon_names_keep_catalog_order_and_lookup() {
        let icons = vec![IconRecord::new("zap"), IconRecord::new("anchor")];
        let names = IconNames::from_records(&icons);

        assert_eq!(names.as_slice(), ["zap".to_string(), "anchor".to_string()]);
        assert!(names.contains("anchor"));
        assert!(!names.contains("Anchor"));
        assert_eq!(names.len(), 2);
    }
}
