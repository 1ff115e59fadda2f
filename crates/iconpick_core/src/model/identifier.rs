//! Lowercase-hyphenated identifier rule shared by icons, categories and
//! field declarations.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid identifier regex"));

/// Returns whether `value` is a lowercase-hyphenated identifier such as
/// `arrow-up` or `a-arrow-down`.
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_RE.is_match(value)
}
