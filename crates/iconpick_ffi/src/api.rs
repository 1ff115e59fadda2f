//! FFI use-case API for the admin UI host.
//!
//! # Responsibility
//! - Expose field declaration, picker search and glyph lookup to the host.
//! - Keep error semantics simple: envelopes with a diagnostic message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The generated catalog is loaded at most once per process.

use iconpick_core::{
    core_version as core_version_inner, group_icons, init_logging as init_logging_inner,
    load_artifacts, ping as ping_inner, Catalog, CustomFieldRegistration, GlyphTable,
    DEFAULT_RESULT_CAP,
};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const PICKER_DEFAULT_LIMIT: u32 = DEFAULT_RESULT_CAP as u32;
const PICKER_LIMIT_MAX: u32 = DEFAULT_RESULT_CAP as u32;
const CATALOG_DIR_ENV: &str = "ICONPICK_CATALOG_DIR";
const CATALOG_DEFAULT_DIR: &str = "generated";
const UNCATEGORIZED_KEY: &str = "uncategorized";

static CATALOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static PICKER_STATE: OnceLock<PickerState> = OnceLock::new();

/// Catalog plus its glyph table, loaded together.
struct PickerState {
    catalog: Catalog,
    glyphs: GlyphTable,
}

impl PickerState {
    fn load(dir: &Path) -> Result<Self, String> {
        let catalog = load_artifacts(dir).map_err(|err| err.to_string())?;
        let glyphs = GlyphTable::from_catalog(&catalog);
        Ok(Self { catalog, glyphs })
    }
}

/// Minimal health-check API for host smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Custom field declaration handed to the host registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistrationResponse {
    pub name: String,
    pub plugin: String,
    /// Stored value type (`string`).
    pub kind: String,
    pub default_input_size: u8,
    pub is_resizable: bool,
    pub label: String,
    pub description: String,
    /// Empty when the declaration is valid.
    pub message: String,
}

/// Returns the icon field declaration.
///
/// # FFI contract
/// - Sync call, no I/O.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn field_registration() -> FieldRegistrationResponse {
    let registration = CustomFieldRegistration::lucide_icon();
    let message = match registration.validate() {
        Ok(()) => String::new(),
        Err(err) => format!("field_registration invalid: {err}"),
    };
    FieldRegistrationResponse {
        name: registration.name,
        plugin: registration.plugin,
        kind: registration.kind.as_str().to_string(),
        default_input_size: registration.input_size.default,
        is_resizable: registration.input_size.is_resizable,
        label: registration.label,
        description: registration.description,
        message,
    }
}

/// One popover section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerGroupItem {
    /// Category name, or `uncategorized`.
    pub key: String,
    /// Category title; empty for the uncategorized group.
    pub title: String,
    /// Glyph component for the section header.
    pub header_glyph: Option<String>,
    /// Icon names in catalog order.
    pub icons: Vec<String>,
}

/// Search response envelope for the picker popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSearchResponse {
    pub groups: Vec<PickerGroupItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective per-group limit.
    pub applied_limit: u32,
}

/// Searches the generated catalog and returns grouped results.
///
/// # FFI contract
/// - Sync call; the first call loads the catalog from disk.
/// - Never panics; load failures return an empty envelope with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_search(query: String, limit: Option<u32>) -> PickerSearchResponse {
    let applied_limit = normalize_picker_limit(limit);
    match picker_state() {
        Ok(state) => search_in(state, &query, applied_limit),
        Err(err) => PickerSearchResponse {
            groups: Vec::new(),
            message: format!("picker_search failed: {err}"),
            applied_limit,
        },
    }
}

/// Glyph lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphItem {
    pub name: String,
    pub component: String,
    /// `true` when the requested name is unknown and the fallback is used.
    pub is_fallback: bool,
}

/// Resolves an icon name to its glyph component.
///
/// # FFI contract
/// - Never panics; unknown names and load failures yield the fallback glyph.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_glyph(name: String) -> GlyphItem {
    match picker_state() {
        Ok(state) => glyph_in(&state.glyphs, &name),
        Err(_) => glyph_in(&GlyphTable::from_catalog(&Catalog::default()), &name),
    }
}

fn search_in(state: &PickerState, query: &str, applied_limit: u32) -> PickerSearchResponse {
    let groups = group_icons(&state.catalog, query, applied_limit as usize)
        .into_iter()
        .map(|group| PickerGroupItem {
            key: group
                .category
                .map_or_else(|| UNCATEGORIZED_KEY.to_string(), |c| c.name.clone()),
            title: group.title().to_string(),
            header_glyph: group
                .category
                .map(|c| state.glyphs.resolve(&c.icon_name).glyph.component.clone()),
            icons: group.icons.iter().map(|icon| icon.name.clone()).collect(),
        })
        .collect::<Vec<_>>();
    let message = if groups.is_empty() {
        "No icons.".to_string()
    } else {
        format!("Found {} group(s).", groups.len())
    };
    PickerSearchResponse {
        groups,
        message,
        applied_limit,
    }
}

fn glyph_in(glyphs: &GlyphTable, name: &str) -> GlyphItem {
    let resolved = glyphs.resolve(name);
    GlyphItem {
        name: resolved.glyph.name.clone(),
        component: resolved.glyph.component.clone(),
        is_fallback: resolved.is_fallback,
    }
}

fn normalize_picker_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => PICKER_DEFAULT_LIMIT,
        Some(value) if value > PICKER_LIMIT_MAX => PICKER_LIMIT_MAX,
        Some(value) => value,
    }
}

fn resolve_catalog_dir() -> PathBuf {
    CATALOG_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(CATALOG_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            PathBuf::from(CATALOG_DEFAULT_DIR)
        })
        .clone()
}

/// Loads the catalog on first success; failures are retried on the next call.
fn picker_state() -> Result<&'static PickerState, String> {
    if let Some(state) = PICKER_STATE.get() {
        return Ok(state);
    }
    let dir = resolve_catalog_dir();
    let loaded = PickerState::load(&dir).map_err(|err| {
        warn!(
            "event=catalog_load module=ffi status=error dir={} error={}",
            dir.display(),
            err
        );
        err
    })?;
    Ok(PICKER_STATE.get_or_init(|| loaded))
}
