/// Longest username the game allows
pub const MAX_USERNAME_LEN: usize = 12;

/// Default taxonomy shipped with the crate
pub const EMBEDDED_TAXONOMY: &str = include_str!("../data/categories.yaml");

/// Label used for the embedded taxonomy in log messages
pub const EMBEDDED_TAXONOMY_LABEL: &str = "embedded categories.yaml";
