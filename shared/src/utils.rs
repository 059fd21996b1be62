//! # Shared Utility Functions
//!
//! Display-name helpers used by the client when mapping backend users and
//! when splitting a signup name into first and last name.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{display_name, split_full_name};
//!
//! assert_eq!(display_name(Some("Ann"), Some("Lee"), "ann@example.com"), "Ann Lee");
//! assert_eq!(display_name(None, None, "ann@example.com"), "ann@example.com");
//! assert_eq!(split_full_name("Ann Mary Lee"), ("Ann".to_string(), Some("Mary Lee".to_string())));
//! ```

/// Join first and last name, skipping missing or empty parts.
///
/// When neither part is present the `fallback` (usually the email) is returned.
pub fn display_name(first: Option<&str>, last: Option<&str>, fallback: &str) -> String {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        fallback.to_string()
    } else {
        parts.join(" ")
    }
}

/// Split a full name on the first space.
///
/// The remainder becomes the last name; an empty remainder yields `None`.
pub fn split_full_name(name: &str) -> (String, Option<String>) {
    match name.split_once(' ') {
        Some((first, rest)) if !rest.is_empty() => (first.to_string(), Some(rest.to_string())),
        Some((first, _)) => (first.to_string(), None),
        None => (name.to_string(), None),
    }
}
