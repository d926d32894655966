//! Syntactic hostname validation
//!
//! Used for both the target host of a command and every candidate alias.
//! Only the shape of the name is checked; nothing is resolved.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a full hostname
pub const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single dot-separated label
pub const MAX_LABEL_LEN: usize = 63;

fn hostname_regex() -> &'static Regex {
    static HOSTNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    HOSTNAME_REGEX.get_or_init(|| {
        Regex::new(r"(?i-u)^[a-z0-9](-*[a-z0-9])*(\.[a-z0-9](-*[a-z0-9])*)*$").unwrap()
    })
}

/// Check whether `name` is a syntactically valid hostname
///
/// A name is valid when:
/// - it is made of dot-separated labels of ASCII letters, digits and
///   interior hyphens (no label starts or ends with a hyphen)
/// - the whole name is 1 to 253 characters long
/// - every label is 1 to 63 characters long
///
/// Matching is case-insensitive; callers lowercase before storing.
pub fn is_valid_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    if !hostname_regex().is_match(name) {
        return false;
    }

    name.split('.')
        .all(|label| !label.is_empty() && label.len() <= MAX_LABEL_LEN)
}

/// Lowercase and trim a raw hostname token
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
