//! Username validation against the game's naming rules.

mod username_validator;

pub use username_validator::{is_valid_username, validate_usernames, UsernamePartition};
