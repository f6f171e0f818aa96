//! Taxonomies module - category groups, sources, and the cached store.
//!
//! A taxonomy maps each category group's display name to the ordered list of
//! metric names it contains.

mod taxonomy_errors;
mod taxonomy_model;
mod taxonomy_service;
mod taxonomy_traits;

pub use taxonomy_errors::TaxonomyError;
pub use taxonomy_model::{CategoryGroup, CategoryMap, Taxonomy, UnknownCategoryGroup};
pub use taxonomy_service::TaxonomyStore;
pub use taxonomy_traits::{StaticSource, TaxonomyServiceTrait, TaxonomySource, YamlFileSource};
