//! MX record lookups
//!
//! [`StringArg::is_email_with_existing_mx`](crate::StringArg::is_email_with_existing_mx)
//! asks an [`MxLookup`] whether the email's domain publishes MX records. No
//! resolver is bundled: plug in whatever DNS client the application already
//! uses, or a closure.
//!
//! Lookups are synchronous and may block. Run them off latency sensitive
//! paths if that matters.
//!
//! # Example
//!
//! ```rust
//! use arg_check::mx::{MxLookup, MxLookupError, StaticMxLookup};
//!
//! let known = StaticMxLookup::new(["example.com"]);
//! assert_eq!(known.has_mx_record("example.com"), Ok(true));
//! assert_eq!(known.has_mx_record("nowhere.test"), Ok(false));
//!
//! let closure = |domain: &str| -> Result<bool, MxLookupError> {
//!     Ok(domain.ends_with(".com"))
//! };
//! assert_eq!(closure.has_mx_record("example.com"), Ok(true));
//! ```

use std::collections::BTreeSet;
use std::error::Error as StdError;
use std::fmt;

/// A failed MX lookup (timeout, resolver failure and so on).
///
/// A lookup error never escapes a check: it is reported as a validation
/// message on the argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxLookupError {
    domain: String,
    reason: String,
}

impl MxLookupError {
    /// Create a lookup error for `domain`.
    pub fn new(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// The domain that was looked up.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Why the lookup failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for MxLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mx lookup for {} failed: {}", self.domain, self.reason)
    }
}

impl StdError for MxLookupError {}

/// Answers whether a domain has at least one MX record.
pub trait MxLookup {
    /// Returns `Ok(true)` if `domain` has MX records, `Ok(false)` if it has
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`MxLookupError`] if the answer could not be determined.
    fn has_mx_record(&self, domain: &str) -> Result<bool, MxLookupError>;
}

impl<F> MxLookup for F
where
    F: Fn(&str) -> Result<bool, MxLookupError>,
{
    fn has_mx_record(&self, domain: &str) -> Result<bool, MxLookupError> {
        self(domain)
    }
}

/// A lookup backed by a fixed set of domains.
///
/// Useful in tests and for allow-listed deployments. Domains compare
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMxLookup {
    domains: BTreeSet<String>,
}

impl StaticMxLookup {
    /// Create a lookup that knows exactly `domains`.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Add one more domain.
    pub fn with_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.domains.insert(domain.as_ref().to_ascii_lowercase());
        self
    }
}

impl MxLookup for StaticMxLookup {
    fn has_mx_record(&self, domain: &str) -> Result<bool, MxLookupError> {
        Ok(self.domains.contains(&domain.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let lookup = StaticMxLookup::new(["Example.com"]).with_domain("mail.test");
        assert_eq!(lookup.has_mx_record("example.COM"), Ok(true));
        assert_eq!(lookup.has_mx_record("mail.test"), Ok(true));
        assert_eq!(lookup.has_mx_record("other.test"), Ok(false));
    }

    #[test]
    fn test_closure_lookup() {
        let failing = |domain: &str| -> Result<bool, MxLookupError> {
            Err(MxLookupError::new(domain, "timed out"))
        };
        let err = failing.has_mx_record("example.com").unwrap_err();
        assert_eq!(err.domain(), "example.com");
        assert_eq!(err.reason(), "timed out");
        assert_eq!(err.to_string(), "mx lookup for example.com failed: timed out");
    }
}
