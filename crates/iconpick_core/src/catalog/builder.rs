//! Descriptor-directory catalog builder.
//!
//! # Responsibility
//! - Parse one JSON descriptor per icon and per category.
//! - Normalize descriptors into catalog records and check catalog invariants.
//!
//! # Invariants
//! - Record identity is the descriptor file base name.
//! - Any unreadable or malformed descriptor aborts the whole build.
//! - Files are processed in ascending file-name order.

use super::{Catalog, CatalogError, CatalogResult, RecordKind, UnresolvedReference};
use crate::model::category::CategoryRecord;
use crate::model::icon::IconRecord;
use crate::model::identifier::is_valid_identifier;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DESCRIPTOR_EXTENSION: &str = "json";

/// Upstream icon descriptor; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct IconDescriptor {
    #[serde(rename = "$schema")]
    schema: String,
    contributors: Vec<String>,
    tags: Vec<String>,
    categories: Vec<String>,
}

/// Upstream category descriptor; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CategoryDescriptor {
    #[serde(rename = "$schema")]
    schema: String,
    title: String,
    icon: String,
}

/// Successful build output.
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    /// Soft reference misses, already logged as warnings.
    pub unresolved: Vec<UnresolvedReference>,
}

/// Builds a catalog from an icon descriptor directory and a category
/// descriptor directory.
///
/// # Errors
/// - `ReadDir`/`Read` when a directory or file cannot be read.
/// - `Parse` when a descriptor is not JSON or misses a required field.
/// - `InvalidName` when a file base name is not a valid identifier.
/// - `DuplicateName` when two descriptors normalize to the same name.
pub fn build_catalog(
    icons_dir: impl AsRef<Path>,
    categories_dir: impl AsRef<Path>,
) -> CatalogResult<CatalogBuild> {
    let started_at = Instant::now();
    info!("event=catalog_build module=catalog status=start");

    match build_catalog_inner(icons_dir.as_ref(), categories_dir.as_ref()) {
        Ok(build) => {
            for reference in &build.unresolved {
                warn!(
                    "event=catalog_reference module=catalog status=unresolved detail={}",
                    reference
                );
            }
            info!(
                "event=catalog_build module=catalog status=ok icons={} categories={} unresolved={} duration_ms={}",
                build.catalog.icons().len(),
                build.catalog.categories().len(),
                build.unresolved.len(),
                started_at.elapsed().as_millis()
            );
            Ok(build)
        }
        Err(err) => {
            error!(
                "event=catalog_build module=catalog status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn build_catalog_inner(icons_dir: &Path, categories_dir: &Path) -> CatalogResult<CatalogBuild> {
    let icons = list_descriptors(icons_dir, RecordKind::Icon)?
        .into_iter()
        .map(|(name, path)| parse_icon(name, &path))
        .collect::<CatalogResult<Vec<_>>>()?;
    let categories = list_descriptors(categories_dir, RecordKind::Category)?
        .into_iter()
        .map(|(name, path)| parse_category(name, &path))
        .collect::<CatalogResult<Vec<_>>>()?;

    let catalog = Catalog::new(icons, categories)?;
    let unresolved = catalog.unresolved_references();
    Ok(CatalogBuild {
        catalog,
        unresolved,
    })
}

/// Parses one icon descriptor; `name` is authoritative over file content.
pub fn parse_icon(name: String, path: &Path) -> CatalogResult<IconRecord> {
    check_name(RecordKind::Icon, &name, path)?;
    let descriptor: IconDescriptor = read_descriptor(path)?;
    Ok(IconRecord {
        name,
        schema_version: descriptor.schema,
        contributors: descriptor.contributors,
        tags: descriptor.tags,
        categories: descriptor.categories,
    })
}

/// Parses one category descriptor; `name` is authoritative over file content.
pub fn parse_category(name: String, path: &Path) -> CatalogResult<CategoryRecord> {
    check_name(RecordKind::Category, &name, path)?;
    let descriptor: CategoryDescriptor = read_descriptor(path)?;
    Ok(CategoryRecord {
        name,
        schema_version: descriptor.schema,
        title: descriptor.title,
        icon_name: descriptor.icon,
    })
}

fn check_name(kind: RecordKind, name: &str, path: &Path) -> CatalogResult<()> {
    if is_valid_identifier(name) {
        return Ok(());
    }
    Err(CatalogError::InvalidName {
        kind,
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

fn read_descriptor<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists `(base name, path)` pairs for every `*.json` file in `dir`,
/// sorted by base name. Subdirectories and other files are skipped; a
/// descriptor whose base name is not UTF-8 fails with `InvalidName`.
fn list_descriptors(dir: &Path, kind: RecordKind) -> CatalogResult<Vec<(String, PathBuf)>> {
    let read_dir_error = |source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut descriptors = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(DESCRIPTOR_EXTENSION) {
            continue;
        }
        let stem = path.file_stem().unwrap_or_default();
        let Some(name) = stem.to_str() else {
            return Err(CatalogError::InvalidName {
                kind,
                name: stem.to_string_lossy().into_owned(),
                path: path.clone(),
            });
        };
        descriptors.push((name.to_string(), path));
    }

    descriptors.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(descriptors)
}
