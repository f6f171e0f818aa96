//! Traits for taxonomy sources and the taxonomy service.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use super::{CategoryGroup, CategoryMap, Taxonomy, TaxonomyError};

/// Service trait for taxonomy lookups.
pub trait TaxonomyServiceTrait: Send + Sync {
    /// Load the taxonomy, reusing the first successful load.
    fn load(&self) -> Result<Arc<Taxonomy>, TaxonomyError>;

    /// Members of each requested group, keyed by display name.
    ///
    /// Returns `Ok(None)` if any requested group is missing from the taxonomy.
    fn get(&self, groups: &[CategoryGroup]) -> Result<Option<CategoryMap>, TaxonomyError>;

    /// Like [`get`](Self::get), but a missing group is an error naming every
    /// group the taxonomy lacks.
    fn require(&self, groups: &[CategoryGroup]) -> Result<CategoryMap, TaxonomyError>;
}

/// Supplies the raw YAML text of a taxonomy.
///
/// Implementations only read; parsing and validation happen in the store.
pub trait TaxonomySource: Send + Sync {
    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;

    fn read(&self) -> Result<String, TaxonomyError>;
}

/// A taxonomy YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlFileSource {
    path: PathBuf,
}

impl YamlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaxonomySource for YamlFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, TaxonomyError> {
        fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TaxonomyError::NotFound {
                path: self.path.clone(),
            },
            _ => TaxonomyError::Io {
                path: self.path.clone(),
                source,
            },
        })
    }
}

/// An in-memory taxonomy, e.g. one compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    text: String,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl TaxonomySource for StaticSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read(&self) -> Result<String, TaxonomyError> {
        Ok(self.text.clone())
    }
}
