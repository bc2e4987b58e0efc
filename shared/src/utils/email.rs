//! Email address helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// One `@`, a non-empty local part, and a dotted domain without spaces
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("Invalid email regex")
});

/// Normalize an email address for use as a storage key
///
/// Surrounding whitespace is trimmed and the whole address is lowercased,
/// so `" Ana@Uni.EDU "` and `"ana@uni.edu"` address the same record.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether an email address is syntactically plausible
///
/// This is a shape check, not RFC 5322 validation.
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `"ana@uni.edu"` becomes `"a***@uni.edu"`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
