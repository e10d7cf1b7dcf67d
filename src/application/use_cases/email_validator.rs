use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld` shape, nothing more. Contact exports carry junk like
/// "sem email" or bare handles in this column; those become empty cells.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns the input when it looks like an email address, otherwise "".
pub fn validated(raw: &str) -> &str {
    if EMAIL_PATTERN.is_match(raw) {
        raw
    } else {
        ""
    }
}
