//! Icon and category catalogs.
//!
//! # Responsibility
//! - Hold the immutable icon/category collections with by-name lookups.
//! - Build catalogs from descriptor directories and persist them as artifacts.
//!
//! # Invariants
//! - Icon names are unique; category names are unique.
//! - Catalogs are never mutated after construction.
//! - Unresolved cross references are reported, never rejected.

pub mod artifacts;
pub mod builder;

use crate::model::category::CategoryRecord;
use crate::model::icon::{IconNames, IconRecord};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type for catalog build and artifact APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which descriptor family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Icon,
    Category,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Icon => write!(f, "icon"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Fatal catalog error. Any of these aborts the build without output.
#[derive(Debug)]
pub enum CatalogError {
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Descriptor is not valid JSON or lacks a required field.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidName {
        kind: RecordKind,
        name: String,
        path: PathBuf,
    },
    DuplicateName {
        kind: RecordKind,
        name: String,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Output directory equals, contains or sits inside a descriptor directory.
    OverlappingOutput {
        out_dir: PathBuf,
        source_dir: PathBuf,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDir { path, source } => {
                write!(f, "failed to list `{}`: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid descriptor `{}`: {source}", path.display())
            }
            Self::InvalidName { kind, name, path } => write!(
                f,
                "{kind} name `{name}` from `{}` is not a lowercase-hyphenated identifier",
                path.display()
            ),
            Self::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name `{name}`")
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Serialize { path, source } => {
                write!(f, "failed to encode `{}`: {source}", path.display())
            }
            Self::OverlappingOutput {
                out_dir,
                source_dir,
            } => write!(
                f,
                "output directory `{}` overlaps descriptor directory `{}`",
                out_dir.display(),
                source_dir.display()
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReadDir { source, .. } | Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Parse { source, .. } | Self::Serialize { source, .. } => Some(source),
            Self::InvalidName { .. }
            | Self::DuplicateName { .. }
            | Self::OverlappingOutput { .. } => None,
        }
    }
}

/// Soft cross-reference miss found while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReference {
    /// A category's representative icon is not in the icon catalog.
    CategoryIcon { category: String, icon: String },
    /// An icon lists a category that is not in the category catalog.
    IconCategory { icon: String, category: String },
}

impl Display for UnresolvedReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryIcon { category, icon } => {
                write!(f, "category `{category}` references unknown icon `{icon}`")
            }
            Self::IconCategory { icon, category } => {
                write!(f, "icon `{icon}` references unknown category `{category}`")
            }
        }
    }
}

/// Immutable icon and category collections.
///
/// Built once per process and passed by reference to search, glyph and view
/// code; nothing reads it as ambient global state.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    icons: Vec<IconRecord>,
    categories: Vec<CategoryRecord>,
    icon_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
    icon_names: IconNames,
}

impl Catalog {
    /// Assembles a catalog, rejecting duplicate names.
    ///
    /// Record order is preserved exactly as given.
    pub fn new(
        icons: Vec<IconRecord>,
        categories: Vec<CategoryRecord>,
    ) -> CatalogResult<Self> {
        let mut icon_index = HashMap::with_capacity(icons.len());
        for (position, icon) in icons.iter().enumerate() {
            if icon_index.insert(icon.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName {
                    kind: RecordKind::Icon,
                    name: icon.name.clone(),
                });
            }
        }

        let mut category_index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if category_index
                .insert(category.name.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateName {
                    kind: RecordKind::Category,
                    name: category.name.clone(),
                });
            }
        }

        let icon_names = IconNames::from_records(&icons);
        Ok(Self {
            icons,
            categories,
            icon_index,
            category_index,
            icon_names,
        })
    }

    pub fn icons(&self) -> &[IconRecord] {
        &self.icons
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn icon_names(&self) -> &IconNames {
        &self.icon_names
    }

    pub fn icon(&self, name: &str) -> Option<&IconRecord> {
        self.icon_index.get(name).map(|&position| &self.icons[position])
    }

    pub fn category(&self, name: &str) -> Option<&CategoryRecord> {
        self.category_index
            .get(name)
            .map(|&position| &self.categories[position])
    }

    /// Lists every cross reference that does not resolve.
    ///
    /// Category icon misses come first (category order), then icon category
    /// misses (icon order, then listed order).
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let mut unresolved = Vec::new();
        for category in &self.categories {
            if !self.icon_names.contains(&category.icon_name) {
                unresolved.push(UnresolvedReference::CategoryIcon {
                    category: category.name.clone(),
                    icon: category.icon_name.clone(),
                });
            }
        }
        for icon in &self.icons {
            for category in &icon.categories {
                if !self.category_index.contains_key(category) {
                    unresolved.push(UnresolvedReference::IconCategory {
                        icon: icon.name.clone(),
                        category: category.clone(),
                    });
                }
            }
        }
        unresolved
    }
}
