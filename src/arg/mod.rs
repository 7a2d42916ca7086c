//! Argument wrappers that accumulate validation messages
//!
//! This module provides [`Arg<T>`], a value paired with an ordered list of
//! human-readable error messages, together with the typed facades built on
//! top of it. Checks consume the wrapper and hand it back, so a whole chain
//! reads as a single expression. Nothing short-circuits: every failing check
//! appends its message and the caller asks for validity once at the end.
//!
//! # Example
//!
//! ```rust
//! use arg_check::prelude::*;
//!
//! let name = string("").populated().length_in_range(2, 40);
//! assert!(name.is_invalid());
//! assert_eq!(
//!     name.errors(),
//!     &["must be populated", "must be between 2 and 40 characters"]
//! );
//!
//! let age = number(42).gte(18).lt(130);
//! assert!(age.is_valid());
//! assert_eq!(age.into_value(), 42);
//! ```
//!
//! # Ownership
//!
//! A wrapper owns its value. Mutating checks such as
//! [`Wrapper::fallback_if`] replace the owned value; read it back with
//! [`Wrapper::value`], [`Wrapper::into_value`] or [`Wrapper::into_result`].

use std::fmt::{self, Display};

use crate::error::ArgumentErrors;

pub mod comparable;
pub mod list;
pub mod number;
pub mod string;

pub use comparable::{comparable, Comparable, ComparableArg};
pub use list::{list, ListArg};
pub use number::{number, Number, NumberArg};
pub use string::{string, StringArg};

/// Anything that exposes accumulated validation messages.
///
/// Every wrapper in this crate implements `Argument`, which is what the
/// [aggregation functions](crate::aggregate) operate on. The trait is object
/// safe so wrappers of different value types can be checked together.
pub trait Argument {
    /// The messages appended so far, in the order the checks ran.
    fn errors(&self) -> &[String];

    /// Returns `true` if no check has failed.
    #[inline]
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Returns `true` if at least one check has failed.
    #[inline]
    fn is_invalid(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// A generic argument: a value plus the messages of its failed checks.
///
/// `Arg<T>` is the single source of state for every facade. Facades hold
/// exactly one `Arg` and reach it through [`Wrapper`], so the value and the
/// error list are never duplicated across layers.
///
/// # Example
///
/// ```rust
/// use arg_check::prelude::*;
///
/// let port = arg(0u16)
///     .fallback_if(8080, true)
///     .ensure(|p| *p >= 1024, "must not be a privileged port");
///
/// assert!(port.is_valid());
/// assert_eq!(*port.value(), 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg<T> {
    value: T,
    errors: Vec<String>,
}

impl<T> Arg<T> {
    /// Wrap a value with an empty error list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let a = Arg::new("anything");
    /// assert!(a.errors().is_empty());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    /// Split the wrapper into its value and its messages.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.errors)
    }

    pub(crate) fn push_error(&mut self, message: String) {
        #[cfg(feature = "tracing")]
        tracing::trace!(error = %message, "argument check failed");
        self.errors.push(message);
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Create a generic argument for any value.
///
/// Shorthand for [`Arg::new`].
#[inline]
pub fn arg<T>(value: T) -> Arg<T> {
    Arg::new(value)
}

/// The chain shared by every wrapper.
///
/// Implementors only say where their [`Arg`] lives; the shared operations
/// (clearing, custom errors, fallbacks, custom checks and value access) come
/// for free and always return `Self`, so facade-specific checks and shared
/// ones mix in one chain.
///
/// # Example
///
/// A custom facade built on top of the core:
///
/// ```rust
/// use arg_check::prelude::*;
///
/// struct SlugArg {
///     inner: Arg<String>,
/// }
///
/// impl Wrapper for SlugArg {
///     type Value = String;
///     fn core(&self) -> &Arg<String> { &self.inner }
///     fn core_mut(&mut self) -> &mut Arg<String> { &mut self.inner }
///     fn into_core(self) -> Arg<String> { self.inner }
/// }
///
/// impl SlugArg {
///     fn lowercase(self) -> Self {
///         self.ensure(|s| !s.chars().any(char::is_uppercase), "must be lowercase")
///     }
/// }
///
/// let slug = SlugArg { inner: Arg::new("Hello".to_string()) }.lowercase();
/// assert_eq!(slug.errors(), &["must be lowercase"]);
/// ```
pub trait Wrapper: Sized {
    /// The wrapped value's type.
    type Value;

    /// Borrow the underlying argument.
    fn core(&self) -> &Arg<Self::Value>;

    /// Mutably borrow the underlying argument.
    fn core_mut(&mut self) -> &mut Arg<Self::Value>;

    /// Unwrap into the underlying argument.
    fn into_core(self) -> Arg<Self::Value>;

    /// Borrow the current value.
    #[inline]
    fn value(&self) -> &Self::Value {
        &self.core().value
    }

    /// Take the current value, discarding the messages.
    #[inline]
    fn into_value(self) -> Self::Value {
        self.into_core().value
    }

    /// Remove every message appended so far.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let a = arg(1).add_error("boom").clear_errors();
    /// assert!(a.is_valid());
    /// ```
    fn clear_errors(mut self) -> Self {
        self.core_mut().errors.clear();
        self
    }

    /// Append a custom message.
    ///
    /// Any [`Display`] works, so positional formatting is done with
    /// `format!` or `format_args!` at the call site.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let limit = 3;
    /// let a = arg(7).add_error(format_args!("must be at most {}", limit));
    /// assert_eq!(a.errors(), &["must be at most 3"]);
    /// ```
    fn add_error(mut self, message: impl Display) -> Self {
        self.core_mut().push_error(message.to_string());
        self
    }

    /// Replace the value with `fallback` when `condition` holds.
    ///
    /// Never touches the messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert_eq!(arg(1).fallback_if(2, true).into_value(), 2);
    /// assert_eq!(arg(1).fallback_if(2, false).into_value(), 1);
    /// ```
    fn fallback_if(mut self, fallback: Self::Value, condition: bool) -> Self {
        if condition {
            self.core_mut().value = fallback;
        }
        self
    }

    /// Append `message` unless `predicate` accepts the current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let a = arg(vec![1, 2, 3]).ensure(|v| v.iter().sum::<i32>() == 6, "must sum to 6");
    /// assert!(a.is_valid());
    /// ```
    fn ensure<F>(self, predicate: F, message: impl Display) -> Self
    where
        F: FnOnce(&Self::Value) -> bool,
    {
        if predicate(self.value()) {
            self
        } else {
            self.add_error(message)
        }
    }

    /// Convert into a `Result`: the value if valid, every message otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert_eq!(number(5).gt(1).into_result(), Ok(5));
    ///
    /// let err = number(0).gt(1).lt(-1).into_result().unwrap_err();
    /// assert_eq!(err.to_string(), "must be greater than 1; must be less than -1");
    /// ```
    fn into_result(self) -> Result<Self::Value, ArgumentErrors> {
        let (value, errors) = self.into_core().into_parts();
        if errors.is_empty() {
            Ok(value)
        } else {
            Err(ArgumentErrors::new(errors))
        }
    }
}

impl<T> Wrapper for Arg<T> {
    type Value = T;

    #[inline]
    fn core(&self) -> &Arg<T> {
        self
    }

    #[inline]
    fn core_mut(&mut self) -> &mut Arg<T> {
        self
    }

    #[inline]
    fn into_core(self) -> Arg<T> {
        self
    }
}

impl<W: Wrapper> Argument for W {
    #[inline]
    fn errors(&self) -> &[String] {
        &self.core().errors
    }
}

/// Renders `a, b, c`.
pub(crate) fn joined<C: Display>(items: &[C]) -> String {
    Joined(items).to_string()
}

/// Renders `[a, b, c]`.
pub(crate) fn bracketed<C: Display>(items: &[C]) -> String {
    format!("[{}]", Joined(items))
}

struct Joined<'a, C>(&'a [C]);

impl<C: Display> Display for Joined<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
