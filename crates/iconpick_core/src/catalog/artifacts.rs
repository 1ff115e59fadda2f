//! Generated catalog artifacts.
//!
//! # Responsibility
//! - Persist a built catalog as three JSON files for downstream consumers.
//! - Load the persisted catalog back once per process.
//!
//! # Invariants
//! - Writing fully replaces the output directory; stale files never survive.
//! - A failed write leaves the previous output directory untouched.
//! - Loading re-checks name uniqueness.

use super::{Catalog, CatalogError, CatalogResult};
use crate::model::category::CategoryRecord;
use crate::model::icon::IconRecord;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Icon-name enumeration file.
pub const ICON_NAMES_FILE: &str = "icon-names.json";
/// Icon catalog file.
pub const ICONS_FILE: &str = "icons.json";
/// Category catalog file.
pub const CATEGORIES_FILE: &str = "categories.json";

const STAGING_PREFIX: &str = ".iconpick-staging-";
const STAGED_SUBDIR: &str = "next";
const PREVIOUS_SUBDIR: &str = "previous";

/// Paths written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub icon_names: PathBuf,
    pub icons: PathBuf,
    pub categories: PathBuf,
}

/// Writes `catalog` into `out_dir`, replacing any previous content.
///
/// All files are written into a staging directory beside `out_dir` first;
/// the old directory is swapped out only once every file is on disk.
pub fn write_artifacts(catalog: &Catalog, out_dir: impl AsRef<Path>) -> CatalogResult<ArtifactPaths> {
    let out_dir = out_dir.as_ref();
    replace_dir(out_dir, |staged| {
        write_json(&staged.join(ICON_NAMES_FILE), catalog.icon_names().as_slice())?;
        write_json(&staged.join(ICONS_FILE), catalog.icons())?;
        write_json(&staged.join(CATEGORIES_FILE), catalog.categories())
    })?;

    info!(
        "event=artifacts_write module=catalog status=ok out_dir={} icons={} categories={}",
        out_dir.display(),
        catalog.icons().len(),
        catalog.categories().len()
    );
    Ok(ArtifactPaths {
        icon_names: out_dir.join(ICON_NAMES_FILE),
        icons: out_dir.join(ICONS_FILE),
        categories: out_dir.join(CATEGORIES_FILE),
    })
}

/// Rejects an output directory that equals, contains or sits inside any of
/// `source_dirs`.
///
/// Replacing such a directory would delete descriptors, or drop generated
/// files where the next build reads them back as descriptors.
pub fn check_output_dir(out_dir: &Path, source_dirs: &[&Path]) -> CatalogResult<()> {
    let out = comparable_path(out_dir);
    for source_dir in source_dirs {
        let source = comparable_path(source_dir);
        if source.starts_with(&out) || out.starts_with(&source) {
            return Err(CatalogError::OverlappingOutput {
                out_dir: out_dir.to_path_buf(),
                source_dir: source_dir.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Absolute form of `path` with `.`/`..` folded and the longest existing
/// prefix resolved through the filesystem.
fn comparable_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    let mut existing = normalized.clone();
    let mut missing = Vec::new();
    loop {
        if let Ok(resolved) = existing.canonicalize() {
            return missing
                .into_iter()
                .rev()
                .fold(resolved, |acc: PathBuf, part| acc.join(part));
        }
        let Some(name) = existing.file_name().map(|name| name.to_os_string()) else {
            return normalized;
        };
        missing.push(name);
        if !existing.pop() {
            return normalized;
        }
    }
}

/// Fills a staged directory with `fill`, then swaps it in for `out_dir`.
///
/// Staging happens under a temporary directory in the same parent so both
/// renames stay on one filesystem. The temporary directory, holding either
/// the rejected staged output or the replaced previous output, is removed on
/// return unless restoring the previous output fails.
fn replace_dir<F>(out_dir: &Path, fill: F) -> CatalogResult<()>
where
    F: FnOnce(&Path) -> CatalogResult<()>,
{
    let write_error = |source| CatalogError::Write {
        path: out_dir.to_path_buf(),
        source,
    };
    let parent = match out_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_error)?;

    let workspace = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(write_error)?;
    let staged = workspace.path().join(STAGED_SUBDIR);
    std::fs::create_dir(&staged).map_err(write_error)?;
    fill(staged.as_path())?;

    let previous = workspace.path().join(PREVIOUS_SUBDIR);
    let had_previous = out_dir.exists();
    if had_previous {
        std::fs::rename(out_dir, &previous).map_err(write_error)?;
    }
    if let Err(source) = std::fs::rename(&staged, out_dir) {
        if had_previous {
            if let Err(restore) = std::fs::rename(&previous, out_dir) {
                let kept = workspace.keep();
                error!(
                    "event=artifacts_write module=catalog status=error out_dir={} previous_kept_at={} restore_error={}",
                    out_dir.display(),
                    kept.join(PREVIOUS_SUBDIR).display(),
                    restore
                );
            }
        }
        return Err(write_error(source));
    }
    Ok(())
}

/// Loads a catalog previously written by [`write_artifacts`].
///
/// Only the icon and category files are read; the name enumeration is
/// derived again from the icons.
pub fn load_artifacts(dir: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let dir = dir.as_ref();
    let icons: Vec<IconRecord> = read_json(&dir.join(ICONS_FILE))?;
    let categories: Vec<CategoryRecord> = read_json(&dir.join(CATEGORIES_FILE))?;
    let catalog = Catalog::new(icons, categories)?;
    info!(
        "event=artifacts_load module=catalog status=ok dir={} icons={} categories={}",
        dir.display(),
        catalog.icons().len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> CatalogResult<()> {
    let mut encoded =
        serde_json::to_string_pretty(value).map_err(|source| CatalogError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    encoded.push('\n');
    std::fs::write(path, encoded).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
