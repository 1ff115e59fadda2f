//! Render-ready view model for the icon field.
//!
//! The host toolkit draws exactly what this model describes: the selection
//! box, the trigger button, and (while open) the grouped icon grid.

use crate::catalog::Catalog;
use crate::field::session::PickerSession;
use crate::glyph::{GlyphRef, GlyphTable};
use crate::search::index::IconGroup;

pub const PLACEHOLDER_NO_SELECTION: &str = "No icon selected";
pub const PLACEHOLDER_SEARCH: &str = "Search icons...";
pub const LABEL_CHANGE: &str = "Change";
pub const LABEL_SELECT: &str = "Select";
pub const LABEL_CLEAR: &str = "Clear Selection";
/// Section key used for the uncategorized group.
pub const UNCATEGORIZED_KEY: &str = "uncategorized";

/// What the selection box shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDisplay {
    Empty {
        placeholder: &'static str,
    },
    Selected {
        name: String,
        glyph: GlyphRef,
        /// Stored value no longer present in the catalog.
        is_fallback: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: String,
    pub glyph: GlyphRef,
    pub is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCell {
    pub name: String,
    pub glyph: GlyphRef,
    pub selected: bool,
}

/// One category section of the popover grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSection {
    /// Stable key: category name or [`UNCATEGORIZED_KEY`].
    pub key: String,
    /// Present for resolved categories when headers are enabled.
    pub header: Option<SectionHeader>,
    /// Icon cells chunked into rows of `grid_columns`.
    pub rows: Vec<Vec<IconCell>>,
}

impl PickerSection {
    pub fn icon_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub label: String,
    pub hint: Option<String>,
    pub error: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub selection: SelectionDisplay,
    pub trigger_label: &'static str,
    pub is_open: bool,
    pub query: String,
    pub search_placeholder: &'static str,
    /// Clear button is offered only while open with a value.
    pub clear_label: Option<&'static str>,
    /// Empty while the popover is closed.
    pub sections: Vec<PickerSection>,
}

/// Builds the view model for `session` against `catalog`.
pub fn render(session: &PickerSession, catalog: &Catalog, glyphs: &GlyphTable) -> PickerView {
    let props = session.props();
    let selection = if session.has_value() {
        let resolved = glyphs.resolve(session.value());
        SelectionDisplay::Selected {
            name: session.value().to_string(),
            glyph: resolved.glyph.clone(),
            is_fallback: resolved.is_fallback,
        }
    } else {
        SelectionDisplay::Empty {
            placeholder: PLACEHOLDER_NO_SELECTION,
        }
    };

    let sections = if session.is_open() {
        session
            .groups(catalog)
            .iter()
            .map(|group| render_section(session, group, glyphs))
            .collect()
    } else {
        Vec::new()
    };

    PickerView {
        label: props.label.clone(),
        hint: props.hint.clone(),
        error: props.error.clone(),
        required: props.required,
        disabled: session.is_disabled(),
        selection,
        trigger_label: if session.has_value() {
            LABEL_CHANGE
        } else {
            LABEL_SELECT
        },
        is_open: session.is_open(),
        query: session.query().to_string(),
        search_placeholder: PLACEHOLDER_SEARCH,
        clear_label: (session.is_open() && session.has_value()).then_some(LABEL_CLEAR),
        sections,
    }
}

fn render_section(session: &PickerSession, group: &IconGroup<'_>, glyphs: &GlyphTable) -> PickerSection {
    let config = session.config();
    let header = match group.category {
        Some(category) if config.show_category_headers => {
            let resolved = glyphs.resolve(&category.icon_name);
            Some(SectionHeader {
                title: category.title.clone(),
                glyph: resolved.glyph.clone(),
                is_fallback: resolved.is_fallback,
            })
        }
        _ => None,
    };

    let cells: Vec<IconCell> = group
        .icons
        .iter()
        .map(|icon| IconCell {
            name: icon.name.clone(),
            glyph: glyphs.resolve(&icon.name).glyph.clone(),
            selected: icon.name == session.value(),
        })
        .collect();

    PickerSection {
        key: group
            .category
            .map_or_else(|| UNCATEGORIZED_KEY.to_string(), |category| category.name.clone()),
        header,
        rows: cells
            .chunks(config.grid_columns)
            .map(<[IconCell]>::to_vec)
            .collect(),
    }
}
