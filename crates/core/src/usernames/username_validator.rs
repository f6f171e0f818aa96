use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::MAX_USERNAME_LEN;
use crate::errors::ValidationError;

/// Alphanumeric at both ends, alphanumeric or space in between.
static USERNAME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9 ]*[A-Za-z0-9])?$").expect("valid username regex")
});

/// Usernames split by validity, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsernamePartition {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Check a username against the game's naming rules.
///
/// 1-12 ASCII letters, digits and spaces; no leading, trailing or doubled space.
pub fn is_valid_username(username: &str) -> bool {
    username.len() <= MAX_USERNAME_LEN
        && USERNAME_SHAPE.is_match(username)
        && !username.contains("  ")
}

/// Split usernames into valid and invalid ones.
///
/// An empty string is just an invalid username, but an empty list is an
/// input error.
pub fn validate_usernames<S: AsRef<str>>(
    usernames: &[S],
) -> Result<UsernamePartition, ValidationError> {
    if usernames.is_empty() {
        return Err(ValidationError::EmptyInput("usernames"));
    }

    let mut partition = UsernamePartition::default();
    for username in usernames {
        let username = username.as_ref();
        if is_valid_username(username) {
            partition.valid.push(username.to_string());
        } else {
            partition.invalid.push(username.to_string());
        }
    }

    if !partition.invalid.is_empty() {
        warn!("Invalid usernames found: {:?}", partition.invalid);
    }
    info!(
        "Validated {} usernames ({} valid)",
        usernames.len(),
        partition.valid.len()
    );
    Ok(partition)
}
