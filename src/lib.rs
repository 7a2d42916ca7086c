//! # arg-check
//!
//! Fluent argument validation: wrap a value, chain checks, ask once.
//!
//! Each check either adjusts the value (defaults and fallbacks) or appends a
//! human-readable message when it fails. Nothing short-circuits, so a caller
//! gets every problem with an argument in one pass. When only the first
//! failure matters, use [`FailFast`] instead.
//!
//! ## Quick Example
//!
//! ```rust
//! use arg_check::prelude::*;
//!
//! fn create_user(email: &str, age: u32, roles: Vec<&str>) -> Result<(), ArgumentErrors> {
//!     let email = string(email).populated().is_email();
//!     let age = number(age).gte(18).lt(130);
//!     let roles = list(roles)
//!         .default(vec!["member"])
//!         .len_lte(3)
//!         .each_is(&["member", "editor", "owner"]);
//!
//!     all_errors(&[&email, &age, &roles])?;
//!
//!     // Everything is valid; use the (possibly defaulted) values.
//!     let _roles = roles.into_value();
//!     Ok(())
//! }
//!
//! assert!(create_user("jan@example.com", 30, vec![]).is_ok());
//!
//! let err = create_user("jan@", 12, vec!["root"]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "must be a valid email address; \
//!      must be greater than or equal to 18; \
//!      each value must be one of [member, editor, owner]"
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: log failed checks, invalid patterns and MX lookup failures
//!   through the `tracing` crate.
//! - `serde`: `Serialize` for [`ArgumentErrors`] and [`FirstError`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod arg;
pub mod error;
pub mod fail_fast;
pub mod mx;
pub mod pattern;
pub mod testing;

// Re-exports
pub use aggregate::{all_errors, all_valid, any_invalid, first_error};
pub use arg::{
    arg, comparable, list, number, string, Arg, Argument, Comparable, ComparableArg, ListArg,
    Number, NumberArg, StringArg, Wrapper,
};
pub use error::ArgumentErrors;
pub use fail_fast::{FailFast, FirstError};
pub use mx::{MxLookup, MxLookupError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{all_errors, all_valid, any_invalid, first_error};
    pub use crate::arg::{
        arg, comparable, list, number, string, Arg, Argument, Comparable, ComparableArg,
        ListArg, Number, NumberArg, StringArg, Wrapper,
    };
    pub use crate::error::ArgumentErrors;
    pub use crate::fail_fast::{FailFast, FirstError};
}
