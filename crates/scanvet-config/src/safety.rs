//! Free-text and URL safety checks.

use url::Url;

/// Characters allowed in free-text fields besides ASCII letters and digits.
/// Deliberately excludes shell and HTML metacharacters so accepted text is
/// inert downstream.
const SAFE_PUNCTUATION: &[char] = &[' ', '.', '-', '_'];

/// Whether `text` contains only allow-listed characters. Length limits are
/// the caller's concern.
#[must_use]
pub fn is_string_safe(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&c))
}

/// Whether `candidate` parses as an absolute URL with a scheme and host.
#[must_use]
pub fn is_string_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| url.has_host())
}
