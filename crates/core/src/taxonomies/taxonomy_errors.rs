//! Taxonomy error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or querying the category taxonomy.
///
/// Every load error is fatal: a taxonomy is either loaded whole or not at all.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// The taxonomy source does not exist.
    #[error("Category file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The taxonomy source exists but could not be read.
    #[error("Failed to read category file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid YAML.
    #[error("Error parsing the YAML file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The YAML is valid but not a mapping of names to lists of names.
    #[error("Invalid format: {0}")]
    Format(String),

    /// One or more groups have no members.
    #[error("Invalid format: Empty categories found: {}", .0.join(", "))]
    EmptyGroups(Vec<String>),

    /// Requested groups that the loaded taxonomy does not define.
    #[error("Categories do not exist in the category file: {}", .0.join(", "))]
    MissingGroups(Vec<String>),
}

impl TaxonomyError {
    /// True for errors caused by the shape of an otherwise readable source.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_) | Self::EmptyGroups(_))
    }
}
