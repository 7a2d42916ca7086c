//! The combined validation error
//!
//! Validation messages are plain strings. When they leave a wrapper (through
//! [`Wrapper::into_result`](crate::Wrapper::into_result) or
//! [`all_errors`](crate::aggregate::all_errors)) they travel as an
//! [`ArgumentErrors`], which keeps every message in order and displays them
//! joined with `"; "`.

use std::error::Error as StdError;
use std::fmt;

/// Separator placed between messages by [`ArgumentErrors`]'s `Display`.
pub const SEPARATOR: &str = "; ";

/// One or more validation messages, in the order they were produced.
///
/// # Example
///
/// ```rust
/// use arg_check::ArgumentErrors;
///
/// let err = ArgumentErrors::new(vec![
///     "must be populated".to_string(),
///     "must be a valid email address".to_string(),
/// ]);
/// assert_eq!(err.to_string(), "must be populated; must be a valid email address");
/// assert_eq!(err.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentErrors {
    messages: Vec<String>,
}

impl ArgumentErrors {
    /// Collect messages into a combined error.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The messages, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The first message, if any.
    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    /// Take the messages out.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for ArgumentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl StdError for ArgumentErrors {}

impl IntoIterator for ArgumentErrors {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentErrors {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ArgumentErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages.serialize(serializer)
    }
}
