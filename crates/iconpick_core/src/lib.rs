//! Core domain logic for the icon picker field.
//! This crate owns catalog building, search/grouping and field behavior;
//! host bindings and the builder command sit on top of it.

pub mod catalog;
pub mod config;
pub mod field;
pub mod glyph;
pub mod logging;
pub mod model;
pub mod search;

pub use catalog::artifacts::{load_artifacts, write_artifacts, ArtifactPaths};
pub use catalog::builder::{build_catalog, CatalogBuild};
pub use catalog::{Catalog, CatalogError, CatalogResult, RecordKind, UnresolvedReference};
pub use config::{BuildConfig, PickerConfig};
pub use field::registration::{CustomFieldRegistration, RegistrationValidationError};
pub use field::session::{FieldHost, FieldProps, PickerSession};
pub use field::view::{PickerSection, PickerView, SelectionDisplay};
pub use glyph::{GlyphRef, GlyphTable, ResolvedGlyph};
pub use logging::{default_log_level, init_cli_logging, init_logging, logging_status};
pub use model::category::CategoryRecord;
pub use model::icon::{IconNames, IconRecord};
pub use search::index::{filter_icons, group_icons, icon_matches, IconGroup, DEFAULT_RESULT_CAP};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
