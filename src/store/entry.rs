//! `SecretEntry` and the `Selector` used to address entries.
//!
//! The literal `all` is a wildcard at the CLI boundary, never a stored
//! keyword.  It is interpreted here and nowhere else: callers turn user
//! input into a `Selector` and the store works with the enum.

use std::fmt;

use crate::errors::{PwdManagerError, Result};

/// Reserved keyword meaning "every entry".
pub const WILDCARD: &str = "all";

/// One stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    /// The user-chosen keyword (e.g. "github").
    pub key: String,

    /// The password, stored as entered.
    pub secret: String,

    /// When the password was last saved or updated, already formatted
    /// for display (e.g. "on 1 Jan 2025 at 10:00:00 AM").
    pub last_modified: String,
}

impl SecretEntry {
    pub fn new(key: &str, secret: &str, last_modified: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
            last_modified: last_modified.to_string(),
        }
    }
}

/// Which entries an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single keyword.
    Specific(String),
    /// Every stored entry.
    Everything,
}

impl Selector {
    /// Parse user input: `all` selects everything, anything else is a keyword.
    pub fn parse(input: &str) -> Self {
        let input = normalize_key(input);
        if input == WILDCARD {
            Self::Everything
        } else {
            Self::Specific(input.to_string())
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specific(key) => write!(f, "'{key}'"),
            Self::Everything => f.write_str("all passwords"),
        }
    }
}

/// The canonical form of a keyword typed by the user.
///
/// Every command runs its keyword through this before touching the
/// store, so `" all"` is the wildcard and `"github "` is `github`.
pub fn normalize_key(input: &str) -> &str {
    input.trim()
}

/// Validate that `key` may be stored.
///
/// Rejects the empty string, the reserved wildcard, and keys that are
/// not in normalized form.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PwdManagerError::invalid_key(key, "the keyword cannot be empty"));
    }
    if normalize_key(key) != key {
        return Err(PwdManagerError::invalid_key(
            key,
            "the keyword cannot start or end with whitespace",
        ));
    }
    if key == WILDCARD {
        return Err(PwdManagerError::invalid_key(
            key,
            "the keyword can't be 'all', it is reserved for selecting every password",
        ));
    }
    Ok(())
}
