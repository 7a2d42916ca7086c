//! Comparable arguments
//!
//! Checks for values that can be compared for equality and that have a
//! "zero value" (`T::default()`): `0` for numbers, `""` for strings, the
//! first variant of a `#[derive(Default)]` enum and so on.

use std::fmt::Display;

use super::{bracketed, joined, Arg, Wrapper};

/// Checks shared by every wrapper whose value is comparable.
///
/// Implemented by [`ComparableArg`], [`NumberArg`](super::NumberArg) and
/// [`StringArg`](super::StringArg). Each check appends at most one message
/// (except [`is_not`](Comparable::is_not), see there) and returns `Self`.
pub trait Comparable: Wrapper
where
    Self::Value: PartialEq + Default,
{
    /// Replace the value with `fallback` if it is the zero value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert_eq!(number(0).default(10).into_value(), 10);
    /// assert_eq!(number(3).default(10).into_value(), 3);
    /// ```
    fn default(self, fallback: Self::Value) -> Self {
        let zero = self.value() == &<Self::Value as Default>::default();
        self.fallback_if(fallback, zero)
    }

    /// Fail if the value is the zero value.
    fn populated(self) -> Self {
        if self.value() == &<Self::Value as Default>::default() {
            self.add_error("must be populated")
        } else {
            self
        }
    }

    /// Fail unless the value is the zero value.
    fn empty(self) -> Self {
        if self.value() != &<Self::Value as Default>::default() {
            self.add_error("must be empty")
        } else {
            self
        }
    }

    /// Fail unless the value equals one of `candidates`.
    ///
    /// With no candidates the check passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// assert_eq!(string("b").is(&["a"]).errors(), &["must be a"]);
    /// assert_eq!(string("c").is(&["a", "b"]).errors(), &["must be one of a, b"]);
    /// assert!(string("c").is::<&str>(&[]).is_valid());
    /// ```
    fn is<C>(self, candidates: &[C]) -> Self
    where
        Self::Value: PartialEq<C>,
        C: Display,
    {
        if candidates.iter().any(|c| self.value() == c) {
            return self;
        }
        match candidates {
            [] => self,
            [only] => self.add_error(format_args!("must be {}", only)),
            many => self.add_error(format_args!("must be one of {}", joined(many))),
        }
    }

    /// Fail for every candidate the value equals.
    ///
    /// Each match appends `"[<candidates>] not allowed"`. There is no
    /// singular/plural distinction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let role = string("root").is_not(&["root", "admin"]);
    /// assert_eq!(role.errors(), &["[root, admin] not allowed"]);
    /// ```
    fn is_not<C>(mut self, candidates: &[C]) -> Self
    where
        Self::Value: PartialEq<C>,
        C: Display,
    {
        for candidate in candidates {
            if self.value() == candidate {
                self = self.add_error(format_args!("{} not allowed", bracketed(candidates)));
            }
        }
        self
    }
}

/// An argument for any comparable value.
///
/// # Example
///
/// ```rust
/// use arg_check::prelude::*;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Plan {
///     #[default]
///     Unset,
///     Free,
///     Pro,
/// }
///
/// let plan = comparable(Plan::Unset).populated();
/// assert_eq!(plan.errors(), &["must be populated"]);
///
/// let plan = comparable(Plan::Unset).default(Plan::Free).populated();
/// assert!(plan.is_valid());
/// assert_eq!(plan.into_value(), Plan::Free);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparableArg<T> {
    inner: Arg<T>,
}

impl<T> ComparableArg<T> {
    /// Wrap a comparable value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arg::new(value),
        }
    }
}

/// Create a comparable argument.
#[inline]
pub fn comparable<T: PartialEq + Default>(value: T) -> ComparableArg<T> {
    ComparableArg::new(value)
}

impl<T> Wrapper for ComparableArg<T> {
    type Value = T;

    #[inline]
    fn core(&self) -> &Arg<T> {
        &self.inner
    }

    #[inline]
    fn core_mut(&mut self) -> &mut Arg<T> {
        &mut self.inner
    }

    #[inline]
    fn into_core(self) -> Arg<T> {
        self.inner
    }
}

impl<T: PartialEq + Default> Comparable for ComparableArg<T> {}
