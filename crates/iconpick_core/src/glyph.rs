//! Name-to-glyph lookup table.
//!
//! # Responsibility
//! - Map every catalog icon name to the UI glyph component that renders it.
//! - Make unknown names an explicit fallback branch instead of a failure.
//!
//! # Invariants
//! - Every catalog icon resolves to itself.
//! - Unknown names always resolve to [`GlyphRef::fallback`].

use crate::catalog::Catalog;
use std::collections::HashMap;

/// Icon shown when a name has no glyph.
pub const FALLBACK_GLYPH_NAME: &str = "circle-help";
const FALLBACK_GLYPH_COMPONENT: &str = "HelpCircle";

/// Renderable glyph reference handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRef {
    /// Catalog identifier, e.g. `arrow-up`.
    pub name: String,
    /// UI component identifier, e.g. `ArrowUp`.
    pub component: String,
}

impl GlyphRef {
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            component: component_name(name),
        }
    }

    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_GLYPH_NAME.to_string(),
            component: FALLBACK_GLYPH_COMPONENT.to_string(),
        }
    }
}

/// Result of a glyph lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGlyph<'a> {
    pub glyph: &'a GlyphRef,
    /// `true` when the requested name was unknown.
    pub is_fallback: bool,
}

/// Explicit glyph table built once from a catalog.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    entries: HashMap<String, GlyphRef>,
    fallback: GlyphRef,
}

impl GlyphTable {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let entries = catalog
            .icons()
            .iter()
            .map(|icon| (icon.name.clone(), GlyphRef::for_name(&icon.name)))
            .collect();
        Self {
            entries,
            fallback: GlyphRef::fallback(),
        }
    }

    pub fn resolve(&self, name: &str) -> ResolvedGlyph<'_> {
        match self.entries.get(name) {
            Some(glyph) => ResolvedGlyph {
                glyph,
                is_fallback: false,
            },
            None => ResolvedGlyph {
                glyph: &self.fallback,
                is_fallback: true,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Converts a hyphenated icon name to its PascalCase component name.
///
/// `arrow-up` becomes `ArrowUp`; `dice-6` becomes `Dice6`.
pub fn component_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{component_name, GlyphTable, FALLBACK_GLYPH_NAME};
    use crate::catalog::Catalog;
    use crate::model::icon::IconRecord;

    #[test]
    fn component_name_is_pascal_case() {
        assert_eq!(component_name("arrow-up"), "ArrowUp");
        assert_eq!(component_name("a-arrow-down"), "AArrowDown");
        assert_eq!(component_name("dice-6"), "Dice6");
        assert_eq!(component_name("home"), "Home");
    }

    #[test]
    fn known_names_resolve_to_their_glyph() {
        let catalog = Catalog::new(vec![IconRecord::new("arrow-up")], Vec::new()).unwrap();
        let table = GlyphTable::from_catalog(&catalog);

        let resolved = table.resolve("arrow-up");
        assert!(!resolved.is_fallback);
        assert_eq!(resolved.glyph.component, "ArrowUp");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unknown_names_resolve_to_fallback() {
        let table = GlyphTable::from_catalog(&Catalog::default());

        let resolved = table.resolve("no-such-icon");
        assert!(resolved.is_fallback);
        assert_eq!(resolved.glyph.name, FALLBACK_GLYPH_NAME);
        assert_eq!(resolved.glyph.component, "HelpCircle");
    }
}
