//! Contains-match filtering and category grouping over an injected catalog.
//!
//! # Responsibility
//! - Decide which icons match a query.
//! - Partition matches into per-category groups for the picker popover.
//!
//! # Invariants
//! - Output is fully determined by catalog content, query and cap.
//! - Groups never contain the same icon twice and are never empty.
//! - Groups are ordered by title; the uncategorized group sorts as `""`.

use crate::catalog::Catalog;
use crate::model::category::CategoryRecord;
use crate::model::icon::IconRecord;
use std::collections::HashMap;

/// Per-group icon limit used by the picker popover.
pub const DEFAULT_RESULT_CAP: usize = 50;

/// One rendered section of picker results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGroup<'a> {
    /// `None` for the uncategorized bucket.
    pub category: Option<&'a CategoryRecord>,
    /// Matching icons in catalog order, at most `cap` long.
    pub icons: Vec<&'a IconRecord>,
}

impl<'a> IconGroup<'a> {
    fn new(category: Option<&'a CategoryRecord>) -> Self {
        Self {
            category,
            icons: Vec::new(),
        }
    }

    /// Sort key: category title, or `""` for the uncategorized bucket.
    pub fn title(&self) -> &'a str {
        self.category.map_or("", |category| category.title.as_str())
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.is_none()
    }

    fn push_capped(&mut self, icon: &'a IconRecord, cap: usize) {
        if self.icons.len() >= cap {
            return;
        }
        // One icon is pushed for all its categories before the next one, so a
        // repeat can only be the tail.
        if self.icons.last().is_some_and(|last| last.name == icon.name) {
            return;
        }
        self.icons.push(icon);
    }
}

/// Returns whether `icon` matches `query`.
///
/// An empty query matches everything. Otherwise the lowercase query must be a
/// substring of the lowercase name, of any tag, or of any category name.
pub fn icon_matches(icon: &IconRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_needle(icon, &query.to_lowercase())
}

fn matches_needle(icon: &IconRecord, needle: &str) -> bool {
    contains_folded(&icon.name, needle)
        || icon.tags.iter().any(|tag| contains_folded(tag, needle))
        || icon
            .categories
            .iter()
            .any(|category| contains_folded(category, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keeps icons matching `query`, preserving input order.
///
/// Filtering an already filtered list with the same query is a no-op.
pub fn filter_icons<'a, I>(icons: I, query: &str) -> Vec<&'a IconRecord>
where
    I: IntoIterator<Item = &'a IconRecord>,
{
    if query.is_empty() {
        return icons.into_iter().collect();
    }
    let needle = query.to_lowercase();
    icons
        .into_iter()
        .filter(|icon| matches_needle(icon, &needle))
        .collect()
}

/// Filters the catalog by `query` and groups matches by category.
///
/// An icon lands in every group it lists. Category names that do not
/// resolve, and icons without categories, fall into a single uncategorized
/// group. Each group keeps its first `cap` icons in catalog order.
///
/// Icons with an empty category list are grouped as uncategorized on
/// purpose: an empty query must list every icon, and dropping them would
/// make those icons unselectable.
pub fn group_icons<'a>(catalog: &'a Catalog, query: &str, cap: usize) -> Vec<IconGroup<'a>> {
    let mut groups: Vec<IconGroup<'a>> = Vec::new();
    let mut group_positions: HashMap<&'a str, usize> = HashMap::new();
    let mut uncategorized_position: Option<usize> = None;

    for icon in filter_icons(catalog.icons(), query) {
        let mut resolved_any = false;
        for category_name in &icon.categories {
            let Some(category) = catalog.category(category_name) else {
                continue;
            };
            resolved_any = true;
            let position = *group_positions
                .entry(category.name.as_str())
                .or_insert_with(|| {
                    groups.push(IconGroup::new(Some(category)));
                    groups.len() - 1
                });
            groups[position].push_capped(icon, cap);
        }

        let has_unresolved = icon
            .categories
            .iter()
            .any(|category_name| catalog.category(category_name).is_none());
        if has_unresolved || !resolved_any {
            let position = *uncategorized_position.get_or_insert_with(|| {
                groups.push(IconGroup::new(None));
                groups.len() - 1
            });
            groups[position].push_capped(icon, cap);
        }
    }

    groups.retain(|group| !group.icons.is_empty());
    groups.sort_by(|left, right| left.title().cmp(right.title()));
    groups
}
