//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace, a dot-separated domain with a 2+ letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .unwrap()
});

/// Check if an email address has a syntactically valid shape
///
/// Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.contains("..") && EMAIL_REGEX.is_match(email)
}

/// Check if a value is exactly one ASCII digit
pub fn is_single_digit(value: &str) -> bool {
    let mut chars = value.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

/// Mask an email address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
