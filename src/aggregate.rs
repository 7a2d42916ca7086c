//! Validity across several arguments
//!
//! A handler usually checks a handful of arguments of different types and
//! then wants one answer. These functions take the wrappers as
//! [`Argument`] trait objects, scan them in the order given and look at each
//! argument's messages in the order they were appended.
//!
//! # Example
//!
//! ```rust
//! use arg_check::prelude::*;
//! use arg_check::aggregate::{all_errors, all_valid, any_invalid, first_error};
//!
//! let email = string("jan@").is_email();
//! let age = number(12).gte(18);
//! let tags = list(vec!["a"]).len_lte(3);
//!
//! assert!(any_invalid(&[&email, &age, &tags]));
//! assert!(!all_valid(&[&email, &age, &tags]));
//! assert_eq!(first_error(&[&email, &age, &tags]), Some("must be a valid email address"));
//! assert_eq!(
//!     all_errors(&[&email, &age, &tags]).unwrap_err().to_string(),
//!     "must be a valid email address; must be greater than or equal to 18"
//! );
//! ```

use crate::arg::Argument;
use crate::error::ArgumentErrors;

/// Returns `true` if at least one argument has a message.
pub fn any_invalid(args: &[&dyn Argument]) -> bool {
    args.iter().any(|arg| arg.is_invalid())
}

/// Returns `true` if no argument has a message.
///
/// An empty slice is valid.
pub fn all_valid(args: &[&dyn Argument]) -> bool {
    args.iter().all(|arg| arg.is_valid())
}

/// The first message across all arguments, if any.
pub fn first_error<'a>(args: &[&'a dyn Argument]) -> Option<&'a str> {
    args.iter()
        .copied()
        .flat_map(|arg| arg.errors())
        .map(String::as_str)
        .next()
}

/// Every message across all arguments, as one combined error.
///
/// # Errors
///
/// Returns [`ArgumentErrors`] holding the messages of all arguments, in
/// argument order, when any argument is invalid.
pub fn all_errors(args: &[&dyn Argument]) -> Result<(), ArgumentErrors> {
    let messages: Vec<String> = args
        .iter()
        .flat_map(|arg| arg.errors().iter().cloned())
        .collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ArgumentErrors::new(messages))
    }
}
