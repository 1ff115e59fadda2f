//! Category record model.

use serde::{Deserialize, Serialize};

/// Normalized category entry used as a picker group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Lowercase-hyphenated identifier, e.g. `arrows`.
    pub name: String,
    /// Descriptor schema reference, kept verbatim.
    #[serde(rename = "$schema")]
    pub schema_version: String,
    /// Human-readable group title.
    pub title: String,
    /// Representative glyph; may name an icon missing from the catalog.
    #[serde(rename = "icon")]
    pub icon_name: String,
}

impl CategoryRecord {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        icon_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            schema_version: String::new(),
            title: title.into(),
            icon_name: icon_name.into(),
        }
    }
}
