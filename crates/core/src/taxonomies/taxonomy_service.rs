//! Lazily loaded, cached taxonomy store.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, error, info, warn};
use once_cell::sync::OnceCell;

use crate::constants::{EMBEDDED_TAXONOMY, EMBEDDED_TAXONOMY_LABEL};

use super::{
    CategoryGroup, CategoryMap, StaticSource, Taxonomy, TaxonomyError, TaxonomyServiceTrait,
    TaxonomySource, YamlFileSource,
};

/// Reads a taxonomy from its source at most once and serves group lookups.
///
/// Share one store per process through `Arc<dyn TaxonomyServiceTrait + Send + Sync>`.
pub struct TaxonomyStore {
    source: Box<dyn TaxonomySource>,
    cache: OnceCell<Arc<Taxonomy>>,
}

impl TaxonomyStore {
    pub fn new(source: impl TaxonomySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: OnceCell::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(YamlFileSource::new(path))
    }

    /// Store backed by the taxonomy compiled into the crate.
    pub fn embedded() -> Self {
        Self::new(StaticSource::new(EMBEDDED_TAXONOMY_LABEL, EMBEDDED_TAXONOMY))
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl TaxonomyServiceTrait for TaxonomyStore {
    /// Load the taxonomy, or return the cached copy without touching the source.
    ///
    /// A failed load leaves the store empty, so the next call retries.
    fn load(&self) -> Result<Arc<Taxonomy>, TaxonomyError> {
        self.cache
            .get_or_try_init(|| {
                let origin = self.source.describe();
                debug!("Loading categories from {}", origin);

                let taxonomy = self
                    .source
                    .read()
                    .and_then(|text| Taxonomy::from_yaml_str(&text))
                    .map_err(|e| {
                        if e.is_format() {
                            error!("Category file {} is malformed: {}", origin, e);
                        } else {
                            error!("Failed to load categories from {}: {}", origin, e);
                        }
                        e
                    })?;

                info!(
                    "Loaded {} categories from {}",
                    taxonomy.len(),
                    origin
                );
                Ok(Arc::new(taxonomy))
            })
            .cloned()
    }

    fn get(&self, groups: &[CategoryGroup]) -> Result<Option<CategoryMap>, TaxonomyError> {
        let taxonomy = self.load()?;
        match resolve(&taxonomy, groups) {
            Ok(resolved) => Ok(Some(resolved)),
            Err(missing) => {
                warn!("Categories not found in taxonomy: {}", missing.join(", "));
                Ok(None)
            }
        }
    }

    fn require(&self, groups: &[CategoryGroup]) -> Result<CategoryMap, TaxonomyError> {
        let taxonomy = self.load()?;
        resolve(&taxonomy, groups).map_err(|missing| {
            error!("Categories not found in taxonomy: {}", missing.join(", "));
            TaxonomyError::MissingGroups(missing)
        })
    }
}

/// All requested groups, or the display names of the ones that are missing.
fn resolve(taxonomy: &Taxonomy, groups: &[CategoryGroup]) -> Result<CategoryMap, Vec<String>> {
    let mut resolved = CategoryMap::new();
    let mut missing: Vec<String> = Vec::new();

    for group in groups {
        let name = group.display_name();
        match taxonomy.group(name) {
            Some(members) => {
                resolved.insert(name.to_string(), members.to_vec());
            }
            None if !missing.iter().any(|m| m == name) => missing.push(name.to_string()),
            None => {}
        }
    }

    if !missing.is_empty() {
        return Err(missing);
    }
    debug!("Resolved {} categories", resolved.len());
    Ok(resolved)
}

impl std::fmt::Debug for TaxonomyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxonomyStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
