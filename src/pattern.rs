//! Shape patterns used by the string checks
//!
//! The patterns are compiled once, on first use, and shared for the life of
//! the process. [`matches`] compiles caller supplied patterns on every call.

use std::sync::OnceLock;

use regex::Regex;

/// Email shape: `local@domain.tld` with a TLD of two or more letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Domain shape: dot separated labels, the last one two or more letters.
pub const DOMAIN_PATTERN: &str = r"^([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)+[a-zA-Z]{2,}$";

/// URL shape: must start with `http://`, `https://` or `www.`.
pub const URL_PATTERN: &str = r"^(http://|https://|www\.)[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static DOMAIN_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in pattern must compile"))
}

/// Returns `true` if `value` has the shape of an email address.
///
/// # Example
///
/// ```rust
/// use arg_check::pattern::is_email;
///
/// assert!(is_email("jan@example.com"));
/// assert!(!is_email("not-an-email"));
/// ```
pub fn is_email(value: &str) -> bool {
    compiled(&EMAIL_REGEX, EMAIL_PATTERN).is_match(value)
}

/// Returns `true` if `value` has the shape of a domain name.
pub fn is_domain(value: &str) -> bool {
    compiled(&DOMAIN_REGEX, DOMAIN_PATTERN).is_match(value)
}

/// Returns `true` if `value` has the shape of a web URL.
pub fn is_url(value: &str) -> bool {
    compiled(&URL_REGEX, URL_PATTERN).is_match(value)
}

/// Match `value` against a caller supplied pattern.
///
/// # Errors
///
/// Returns the compile error if `pattern` is not a valid regular expression.
pub fn matches(pattern: &str, value: &str) -> Result<bool, regex::Error> {
    Ok(Regex::new(pattern)?.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_email("jan@example.com"));
        assert!(is_email("first.last+tag@mail.example.co"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("jan@example"));
        assert!(!is_email("jan@example.c"));
        assert!(!is_email("@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_domain_shapes() {
        assert!(is_domain("example.com"));
        assert!(is_domain("sub.my-site.example.org"));
        assert!(!is_domain("localhost"));
        assert!(!is_domain("-bad.com"));
        assert!(!is_domain("bad-.com"));
        assert!(!is_domain("example.c0m"));
    }

    #[test]
    fn test_url_shapes() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://example.com/path?q=1&r=2"));
        assert!(is_url("www.example.com"));
        assert!(!is_url("example.com"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("https://"));
    }

    #[test]
    fn test_matches() {
        assert_eq!(matches(r"^\d{3}$", "123").ok(), Some(true));
        assert_eq!(matches(r"^\d{3}$", "12a").ok(), Some(false));
        assert!(matches(r"(unclosed", "anything").is_err());
    }
}
