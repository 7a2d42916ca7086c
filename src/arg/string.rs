//! String arguments
//!
//! Lengths are measured in bytes (`str::len`), so the limits below are
//! character counts only for ASCII input.

use super::{joined, Arg, Comparable, Wrapper};
use crate::mx::MxLookup;
use crate::pattern;

/// Longest accepted title, see [`StringArg::is_title`].
pub const TITLE_MAX_LEN: usize = 60;

/// Longest accepted subtitle, see [`StringArg::is_subtitle`].
pub const SUBTITLE_MAX_LEN: usize = 120;

/// Longest accepted description, see [`StringArg::is_description`].
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// A string argument.
///
/// # Example
///
/// ```rust
/// use arg_check::prelude::*;
///
/// let email = string("jan@example.com").populated().is_email();
/// assert!(email.is_valid());
///
/// let site = string("example.com").is_url_or_empty();
/// assert_eq!(site.errors(), &["must be a valid URL if specified"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArg {
    inner: Arg<String>,
}

impl StringArg {
    /// Wrap a string.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: Arg::new(value.into()),
        }
    }

    fn as_str(&self) -> &str {
        self.value().as_str()
    }

    /// Replace the value with `fallback` if it is empty.
    pub fn fallback_if_empty(self, fallback: impl Into<String>) -> Self {
        let empty = self.as_str().is_empty();
        if empty {
            self.fallback_if(fallback.into(), true)
        } else {
            self
        }
    }

    /// Fail unless the value starts with one of `prefixes`.
    ///
    /// With no prefixes the check passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert!(string("sk_live_1").starts_with(&["sk_live_", "sk_test_"]).is_valid());
    /// assert_eq!(
    ///     string("pk_1").starts_with(&["sk_live_", "sk_test_"]).errors(),
    ///     &["must start with one of sk_live_, sk_test_"]
    /// );
    /// ```
    pub fn starts_with<S: AsRef<str>>(self, prefixes: &[S]) -> Self {
        if prefixes.iter().any(|p| self.as_str().starts_with(p.as_ref())) {
            return self;
        }
        match prefixes {
            [] => self,
            [only] => self.add_error(format_args!("must start with {}", only.as_ref())),
            many => self.add_error(format_args!(
                "must start with one of {}",
                joined(&as_strs(many))
            )),
        }
    }

    /// Fail unless the value ends with one of `suffixes`.
    ///
    /// With no suffixes the check passes.
    pub fn ends_with<S: AsRef<str>>(self, suffixes: &[S]) -> Self {
        if suffixes.iter().any(|s| self.as_str().ends_with(s.as_ref())) {
            return self;
        }
        match suffixes {
            [] => self,
            [only] => self.add_error(format_args!("must end with {}", only.as_ref())),
            many => self.add_error(format_args!(
                "must end with one of {}",
                joined(&as_strs(many))
            )),
        }
    }

    /// Fail unless the value contains `substring`.
    pub fn contains(self, substring: &str) -> Self {
        if self.as_str().contains(substring) {
            self
        } else {
            self.add_error(format_args!("must contain {}", substring))
        }
    }

    /// Fail unless the value matches the regular expression `pattern`.
    ///
    /// An invalid pattern never matches: the usual message is appended and,
    /// with the `tracing` feature, a warning carrying the compile error is
    /// logged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert!(string("AB-1234").matches(r"^[A-Z]{2}-\d{4}$").is_valid());
    /// assert_eq!(string("x").matches("(").errors(), &["must match ("]);
    /// ```
    pub fn matches(self, pattern: &str) -> Self {
        match pattern::matches(pattern, self.as_str()) {
            Ok(true) => self,
            Ok(false) => self.add_error(format_args!("must match {}", pattern)),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(pattern, error = %_err, "invalid pattern never matches");
                self.add_error(format_args!("must match {}", pattern))
            }
        }
    }

    /// Fail unless the value has the shape of an email address.
    ///
    /// Prefer [`is_email_with_existing_mx`](Self::is_email_with_existing_mx)
    /// when the address must be deliverable.
    pub fn is_email(self) -> Self {
        if pattern::is_email(self.as_str()) {
            self
        } else {
            self.add_error("must be a valid email address")
        }
    }

    /// Like [`is_email`](Self::is_email), but an empty value passes.
    pub fn is_email_or_empty(self) -> Self {
        let value = self.as_str();
        if value.is_empty() || pattern::is_email(value) {
            self
        } else {
            self.add_error("must be a valid email address if specified")
        }
    }

    /// Fail unless the value is an email address whose domain has MX
    /// records.
    ///
    /// The shape is checked first; a malformed address gets one message and
    /// no lookup. A lookup that errors counts as "no MX record".
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    /// use arg_check::mx::StaticMxLookup;
    ///
    /// let dns = StaticMxLookup::new(["example.com"]);
    ///
    /// assert!(string("jan@example.com").is_email_with_existing_mx(&dns).is_valid());
    /// assert_eq!(
    ///     string("jan@example.org").is_email_with_existing_mx(&dns).errors(),
    ///     &["email dns must have valid mx record"]
    /// );
    /// ```
    pub fn is_email_with_existing_mx<L>(self, lookup: &L) -> Self
    where
        L: MxLookup + ?Sized,
    {
        let value = self.as_str();
        if !pattern::is_email(value) {
            return self.add_error("must be a valid email address");
        }

        // The shape admits exactly one '@'.
        let found = match value.split_once('@') {
            Some((_, domain)) => match lookup.has_mx_record(domain) {
                Ok(found) => found,
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(domain, error = %_err, "mx lookup failed");
                    false
                }
            },
            None => false,
        };

        if found {
            self
        } else {
            self.add_error("email dns must have valid mx record")
        }
    }

    /// Fail unless the value has the shape of a domain name.
    pub fn is_domain(self) -> Self {
        if pattern::is_domain(self.as_str()) {
            self
        } else {
            self.add_error("must be a valid domain")
        }
    }

    /// Like [`is_domain`](Self::is_domain), but an empty value passes.
    pub fn is_domain_or_empty(self) -> Self {
        let value = self.as_str();
        if value.is_empty() || pattern::is_domain(value) {
            self
        } else {
            self.add_error("must be a valid domain if specified")
        }
    }

    /// Fail unless the value looks like a web URL (`http://`, `https://` or
    /// `www.` prefix).
    pub fn is_url(self) -> Self {
        if pattern::is_url(self.as_str()) {
            self
        } else {
            self.add_error("must be a valid URL")
        }
    }

    /// Like [`is_url`](Self::is_url), but an empty value passes.
    pub fn is_url_or_empty(self) -> Self {
        let value = self.as_str();
        if value.is_empty() || pattern::is_url(value) {
            self
        } else {
            self.add_error("must be a valid URL if specified")
        }
    }

    /// Fail if the value is empty or longer than [`TITLE_MAX_LEN`].
    pub fn is_title(self) -> Self {
        let value = self.as_str();
        if value.is_empty() || value.len() > TITLE_MAX_LEN {
            self.add_error(format_args!(
                "must be populated and no more than {} characters",
                TITLE_MAX_LEN
            ))
        } else {
            self
        }
    }

    /// Fail if the value is longer than [`SUBTITLE_MAX_LEN`].
    pub fn is_subtitle(self) -> Self {
        if self.as_str().len() > SUBTITLE_MAX_LEN {
            self.add_error(format_args!(
                "must be no more than {} characters if specified",
                SUBTITLE_MAX_LEN
            ))
        } else {
            self
        }
    }

    /// Fail if the value is longer than [`DESCRIPTION_MAX_LEN`].
    pub fn is_description(self) -> Self {
        if self.as_str().len() > DESCRIPTION_MAX_LEN {
            self.add_error(format_args!(
                "must be no more than {} characters if specified",
                DESCRIPTION_MAX_LEN
            ))
        } else {
            self
        }
    }

    /// Fail unless `min <= len <= max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert!(string("abc").length_in_range(2, 4).is_valid());
    /// assert_eq!(
    ///     string("abcde").length_in_range(2, 4).errors(),
    ///     &["must be between 2 and 4 characters"]
    /// );
    /// ```
    pub fn length_in_range(self, min: usize, max: usize) -> Self {
        let len = self.as_str().len();
        if len < min || len > max {
            self.add_error(format_args!("must be between {} and {} characters", min, max))
        } else {
            self
        }
    }
}

fn as_strs<S: AsRef<str>>(items: &[S]) -> Vec<&str> {
    items.iter().map(AsRef::as_ref).collect()
}

/// Create a string argument.
#[inline]
pub fn string(value: impl Into<String>) -> StringArg {
    StringArg::new(value)
}

impl Wrapper for StringArg {
    type Value = String;

    #[inline]
    fn core(&self) -> &Arg<String> {
        &self.inner
    }

    #[inline]
    fn core_mut(&mut self) -> &mut Arg<String> {
        &mut self.inner
    }

    #[inline]
    fn into_core(self) -> Arg<String> {
        self.inner
    }
}

impl Comparable for StringArg {}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::mx::MxLookupError;
    use crate::Argument;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_invalid_pattern_logs_warning() {
        let s = string("abc").matches("[a-");
        assert_eq!(s.errors(), &["must match [a-"]);
        assert!(logs_contain("invalid pattern never matches"));
    }

    #[traced_test]
    #[test]
    fn test_failed_mx_lookup_is_logged() {
        let offline = |domain: &str| -> Result<bool, MxLookupError> {
            Err(MxLookupError::new(domain, "timeout"))
        };
        let s = string("jan@example.com").is_email_with_existing_mx(&offline);
        assert_eq!(s.errors(), &["email dns must have valid mx record"]);
        assert!(logs_contain("mx lookup failed"));
        assert!(logs_contain("example.com"));
    }

    #[traced_test]
    #[test]
    fn test_missing_mx_record_is_not_logged_as_failure() {
        let none = |_: &str| -> Result<bool, MxLookupError> { Ok(false) };
        let s = string("jan@example.com").is_email_with_existing_mx(&none);
        assert!(s.is_invalid());
        assert!(!logs_contain("mx lookup failed"));
    }
}
