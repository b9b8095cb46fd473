//! Store module: the password database.
//!
//! This module provides:
//! - `SecretEntry` and the `Selector` wildcard type (`entry`)
//! - Binary two-block database file format (`format`)
//! - High-level `SecretStore` for opening, mutating and saving (`store`)

pub mod entry;
pub mod format;
#[allow(clippy::module_inception)]
pub mod store;

// Re-export the most commonly used items.
pub use entry::{normalize_key, validate_key, SecretEntry, Selector, WILDCARD};
pub use store::{OpenStatus, SecretStore};
