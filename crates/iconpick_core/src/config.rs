//! Build and picker configuration.
//!
//! # Responsibility
//! - Resolve builder source/output locations from fixed defaults plus env.
//! - Describe the single configurable picker surface.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - A checked build config never writes over or into a descriptor directory.
//! - Picker config never carries a zero cap or zero column count once
//!   normalized.

use crate::catalog::artifacts::check_output_dir;
use crate::catalog::CatalogResult;
use crate::search::index::DEFAULT_RESULT_CAP;
use std::path::{Path, PathBuf};

/// Overrides the directory holding `icons/` and `categories/`.
pub const ENV_DATA_DIR: &str = "ICONPICK_DATA_DIR";
/// Overrides the generated artifact directory.
pub const ENV_OUT_DIR: &str = "ICONPICK_OUT_DIR";
/// Overrides the log directory used by the builder.
pub const ENV_LOG_DIR: &str = "ICONPICK_LOG_DIR";
/// Overrides the builder log level.
pub const ENV_LOG_LEVEL: &str = "ICONPICK_LOG_LEVEL";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_OUT_DIR: &str = "generated";
const ICONS_SUBDIR: &str = "icons";
const CATEGORIES_SUBDIR: &str = "categories";
const LOG_SUBDIR: &str = "iconpick-logs";
const DEFAULT_GRID_COLUMNS: usize = 8;

/// Resolved catalog builder locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub icons_dir: PathBuf,
    pub categories_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl BuildConfig {
    /// Resolves locations relative to `root` using process environment
    /// overrides.
    pub fn resolve(root: impl AsRef<Path>) -> Self {
        Self::resolve_with(root, |key| std::env::var(key).ok())
    }

    /// Same as [`BuildConfig::resolve`] with an injectable variable lookup.
    pub fn resolve_with(root: impl AsRef<Path>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let root = root.as_ref();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_dir = read(ENV_DATA_DIR)
            .map(|value| root.join(value))
            .unwrap_or_else(|| root.join(DEFAULT_DATA_DIR));
        let out_dir = read(ENV_OUT_DIR)
            .map(|value| root.join(value))
            .unwrap_or_else(|| root.join(DEFAULT_OUT_DIR));
        let log_dir = read(ENV_LOG_DIR)
            .map(|value| root.join(value))
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_SUBDIR));
        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| crate::default_log_level().to_string());

        Self {
            icons_dir: data_dir.join(ICONS_SUBDIR),
            categories_dir: data_dir.join(CATEGORIES_SUBDIR),
            out_dir,
            log_dir,
            log_level,
        }
    }

    /// Fails with `OverlappingOutput` when `out_dir` equals, contains or sits
    /// inside `icons_dir` or `categories_dir`.
    pub fn check(&self) -> CatalogResult<()> {
        check_output_dir(
            &self.out_dir,
            &[self.icons_dir.as_path(), self.categories_dir.as_path()],
        )
    }
}

/// Presentation knobs for the one picker component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Maximum icons per category group.
    pub result_cap: usize,
    /// Whether category sections get a title/glyph header.
    pub show_category_headers: bool,
    /// Icons per grid row.
    pub grid_columns: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
            show_category_headers: true,
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

impl PickerConfig {
    /// Replaces zero values with defaults.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            result_cap: if self.result_cap == 0 {
                defaults.result_cap
            } else {
                self.result_cap
            },
            show_category_headers: self.show_category_headers,
            grid_columns: if self.grid_columns == 0 {
                defaults.grid_columns
            } else {
                self.grid_columns
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildConfig, PickerConfig, ENV_DATA_DIR, ENV_LOG_LEVEL, ENV_OUT_DIR};
    use crate::catalog::CatalogError;
    use std::path::Path;

    #[test]
    fn resolve_uses_fixed_relative_defaults() {
        let config = BuildConfig::resolve_with("/work", |_| None);
        assert_eq!(config.icons_dir, Path::new("/work/data/icons"));
        assert_eq!(config.categories_dir, Path::new("/work/data/categories"));
        assert_eq!(config.out_dir, Path::new("/work/generated"));
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn resolve_applies_non_blank_overrides() {
        let config = BuildConfig::resolve_with("/work", |key| match key {
            ENV_DATA_DIR => Some("vendor/lucide".to_string()),
            ENV_OUT_DIR => Some("   ".to_string()),
            ENV_LOG_LEVEL => Some(" warn ".to_string()),
            _ => None,
        });
        assert_eq!(config.icons_dir, Path::new("/work/vendor/lucide/icons"));
        assert_eq!(config.out_dir, Path::new("/work/generated"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn check_rejects_out_dir_over_descriptors() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("data/icons")).unwrap();
        std::fs::write(root.path().join("data/icons/home.json"), "{}").unwrap();

        for out in [".", "data", "data/icons"] {
            let config = BuildConfig::resolve_with(root.path(), |key| match key {
                ENV_OUT_DIR => Some(out.to_string()),
                _ => None,
            });
            let err = config.check().unwrap_err();
            assert!(matches!(err, CatalogError::OverlappingOutput { .. }), "{out}");
        }
        assert!(root.path().join("data/icons/home.json").exists());

        BuildConfig::resolve_with(root.path(), |_| None).check().unwrap();
    }

    #[test]
    fn picker_config_defaults_and_normalization() {
        let defaults = PickerConfig::default();
        assert_eq!(defaults.result_cap, 50);
        assert!(defaults.show_category_headers);
        assert_eq!(defaults.grid_columns, 8);

        let normalized = PickerConfig {
            result_cap: 0,
            show_category_headers: false,
            grid_columns: 0,
        }
        .normalized();
        assert_eq!(normalized.result_cap, 50);
        assert!(!normalized.show_category_headers);
        assert_eq!(normalized.grid_columns, 8);
    }
}
