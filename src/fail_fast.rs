//! Keep only the first failure
//!
//! [`FailFast`] is the counterpart of the accumulating wrappers: it records
//! at most one message, the first one. Later checks in the chain still run
//! (conditions are evaluated by the caller, closures passed to
//! [`add_from_check`](FailFast::add_from_check) are always called) but their
//! outcome is ignored once a failure has been captured.
//!
//! # Example
//!
//! ```rust
//! use arg_check::FailFast;
//!
//! let country = "";
//! let province = "";
//! let street = "Main St";
//!
//! let check = FailFast::new()
//!     .add(country.is_empty(), "invalid country")
//!     .add(province.is_empty(), "invalid province")
//!     .add_from_check(|| {
//!         if street.is_empty() {
//!             Err("invalid street")
//!         } else {
//!             Ok(())
//!         }
//!     });
//!
//! assert_eq!(check.error(), "invalid country");
//! assert!(check.into_result().is_err());
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Display};

/// Collector that captures the first failing check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailFast {
    first: Option<String>,
}

impl FailFast {
    /// Start with no failure.
    pub fn new() -> Self {
        Self { first: None }
    }

    /// Start from a single check: a failure holding `message` if
    /// `condition` is true, no failure otherwise.
    pub fn when(condition: bool, message: impl Display) -> Self {
        Self::new().add(condition, message)
    }

    fn capture(&mut self, message: impl Display) {
        if self.first.is_none() {
            let message = message.to_string();
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %message, "first failure captured");
            self.first = Some(message);
        }
    }

    /// Record `message` if `condition` is true and nothing has failed yet.
    ///
    /// `message` is only formatted when it is captured.
    pub fn add(mut self, condition: bool, message: impl Display) -> Self {
        if condition {
            self.capture(message);
        }
        self
    }

    /// Record an existing error, if there is one and nothing has failed yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::FailFast;
    ///
    /// let parsed: Result<u16, _> = "99999".parse::<u16>();
    /// let check = FailFast::new().add_error(parsed.err());
    /// assert_eq!(check.error(), "number too large to fit in target type");
    /// ```
    pub fn add_error<E: Display>(mut self, error: Option<E>) -> Self {
        if let Some(error) = error {
            self.capture(error);
        }
        self
    }

    /// Run `check` and record its error if nothing has failed yet.
    ///
    /// `check` runs even after a failure has been captured, so side effects
    /// inside it always happen; only its error is discarded.
    pub fn add_from_check<F, E>(mut self, check: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Display,
    {
        if let Err(error) = check() {
            self.capture(error);
        }
        self
    }

    /// Returns `true` if a failure has been captured.
    pub fn is_failed(&self) -> bool {
        self.first.is_some()
    }

    /// The captured message, or `""` if nothing failed.
    pub fn error(&self) -> &str {
        self.first.as_deref().unwrap_or("")
    }

    /// `Ok(())` if nothing failed, the first failure otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FirstError`] carrying the captured message.
    pub fn into_result(self) -> Result<(), FirstError> {
        match self.first {
            Some(message) => Err(FirstError(message)),
            None => Ok(()),
        }
    }
}

/// The failure captured by a [`FailFast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstError(String);

impl FirstError {
    /// The message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for FirstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for FirstError {}

#[cfg(feature = "serde")]
impl serde::Serialize for FirstError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_first_error_serializes_as_string() {
        let err = FailFast::when(true, "bad").into_result().unwrap_err();
        assert_eq!(serde_json::to_string(&err).unwrap(), r#""bad""#);
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_first_failure_is_traced_once() {
        let check = FailFast::new()
            .add(true, "country is required")
            .add(true, "city is required");
        assert_eq!(check.error(), "country is required");
        assert!(logs_contain("first failure captured"));
        assert!(logs_contain("country is required"));
        assert!(!logs_contain("city is required"));
    }
}
