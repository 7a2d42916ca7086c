//! List arguments
//!
//! Structural checks (emptiness, length) work for any element type.
//! Element checks need `PartialEq` and, where an element is named in a
//! message, `Display`.

use std::fmt::Display;

use super::{bracketed, Arg, Wrapper};

/// A list argument.
///
/// # Example
///
/// ```rust
/// use arg_check::prelude::*;
///
/// let tags = list(vec!["rust", "", "cli"]).len_lte(5).each_populated();
/// assert_eq!(tags.errors(), &["each value must be populated"]);
///
/// let ids = list(vec![1, 2]).len_gte(3);
/// assert_eq!(ids.errors(), &["must contain at least 3 values"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArg<T> {
    inner: Arg<Vec<T>>,
}

impl<T> ListArg<T> {
    /// Wrap a list.
    #[inline]
    pub fn new(value: Vec<T>) -> Self {
        Self {
            inner: Arg::new(value),
        }
    }

    fn len(&self) -> usize {
        self.value().len()
    }

    /// Replace the list with `fallback` if it is empty.
    pub fn default(self, fallback: Vec<T>) -> Self {
        let empty = self.len() == 0;
        self.fallback_if(fallback, empty)
    }

    /// Fail if the list is empty.
    pub fn populated(self) -> Self {
        if self.len() == 0 {
            self.add_error("must be populated")
        } else {
            self
        }
    }

    /// Fail if the list is not empty.
    pub fn empty(self) -> Self {
        if self.len() != 0 {
            self.add_error("must be empty")
        } else {
            self
        }
    }

    /// Fail unless the list has exactly `n` elements.
    pub fn len_eqs(self, n: usize) -> Self {
        if self.len() != n {
            self.add_error(format_args!("must contain {} values", n))
        } else {
            self
        }
    }

    /// Fail unless the list has more than `n` elements.
    pub fn len_gt(self, n: usize) -> Self {
        if self.len() <= n {
            self.add_error(format_args!("must contain more than {} values", n))
        } else {
            self
        }
    }

    /// Fail unless the list has at least `n` elements.
    pub fn len_gte(self, n: usize) -> Self {
        if self.len() < n {
            self.add_error(format_args!("must contain at least {} values", n))
        } else {
            self
        }
    }

    /// Fail unless the list has fewer than `n` elements.
    pub fn len_lt(self, n: usize) -> Self {
        if self.len() >= n {
            self.add_error(format_args!("must contain less than {} values", n))
        } else {
            self
        }
    }

    /// Fail unless the list has at most `n` elements.
    pub fn len_lte(self, n: usize) -> Self {
        if self.len() > n {
            self.add_error(format_args!("must contain at most {} values", n))
        } else {
            self
        }
    }
}

impl<T: PartialEq + Default> ListArg<T> {
    /// Replace every zero-valued element with `fallback`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let ports = list(vec![0, 443, 0]).each_default(80);
    /// assert_eq!(ports.into_value(), vec![80, 443, 80]);
    /// ```
    pub fn each_default(mut self, fallback: T) -> Self
    where
        T: Clone,
    {
        let zero = T::default();
        for item in self.core_mut().value_mut().iter_mut() {
            if *item == zero {
                *item = fallback.clone();
            }
        }
        self
    }

    /// Fail once for every zero-valued element.
    pub fn each_populated(mut self) -> Self {
        let zero = T::default();
        let offending = self.value().iter().filter(|item| **item == zero).count();
        for _ in 0..offending {
            self = self.add_error("each value must be populated");
        }
        self
    }

    /// Fail once for every element that is not zero-valued.
    pub fn each_empty(mut self) -> Self {
        let zero = T::default();
        let offending = self.value().iter().filter(|item| **item != zero).count();
        for _ in 0..offending {
            self = self.add_error("each value must be empty");
        }
        self
    }
}

impl<T: PartialEq + Display> ListArg<T> {
    /// Fail once for every value in `values` that the list does not contain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let scopes = list(vec!["read"]).includes(&["read", "write"]);
    /// assert_eq!(scopes.errors(), &["must include write"]);
    /// ```
    pub fn includes(mut self, values: &[T]) -> Self {
        for value in values {
            if !self.value().contains(value) {
                self = self.add_error(format_args!("must include {}", value));
            }
        }
        self
    }

    /// Fail once for every element not found in `values`.
    pub fn each_is(mut self, values: &[T]) -> Self {
        let offending = self
            .value()
            .iter()
            .filter(|item| !values.contains(*item))
            .count();
        if offending > 0 {
            let allowed = bracketed(values);
            for _ in 0..offending {
                self = self.add_error(format_args!("each value must be one of {}", allowed));
            }
        }
        self
    }

    /// Fail once for every element found in `values`, naming the element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arg_check::prelude::*;
    ///
    /// let names = list(vec!["jan", "root", "admin"]).each_is_not(&["root", "admin"]);
    /// assert_eq!(names.errors(), &["root not allowed", "admin not allowed"]);
    /// ```
    pub fn each_is_not(mut self, values: &[T]) -> Self {
        let offending: Vec<String> = self
            .value()
            .iter()
            .filter(|item| values.contains(*item))
            .map(ToString::to_string)
            .collect();
        for item in offending {
            self = self.add_error(format_args!("{} not allowed", item));
        }
        self
    }
}

/// Create a list argument.
#[inline]
pub fn list<T>(value: Vec<T>) -> ListArg<T> {
    ListArg::new(value)
}

impl<T> Wrapper for ListArg<T> {
    type Value = Vec<T>;

    #[inline]
    fn core(&self) -> &Arg<Vec<T>> {
        &self.inner
    }

    #[inline]
    fn core_mut(&mut self) -> &mut Arg<Vec<T>> {
        &mut self.inner
    }

    #[inline]
    fn into_core(self) -> Arg<Vec<T>> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Argument;

    #[test]
    fn test_default_replaces_empty_list() {
        assert_eq!(list(Vec::<i32>::new()).default(vec![1]).into_value(), vec![1]);
        assert_eq!(list(vec![2]).default(vec![1]).into_value(), vec![2]);
    }

    #[test]
    fn test_populated_and_empty() {
        assert!(list(vec![1]).populated().is_valid());
        assert_eq!(
            list(Vec::<i32>::new()).populated().errors(),
            &["must be populated"]
        );
        assert!(list(Vec::<i32>::new()).empty().is_valid());
        assert_eq!(list(vec![1]).empty().errors(), &["must be empty"]);
    }

    #[test]
    fn test_structural_checks_need_no_bounds() {
        struct Opaque;
        let l = list(vec![Opaque, Opaque]).populated().len_eqs(2).len_lt(3);
        assert!(l.is_valid());
    }

    #[test]
    fn test_len_eqs() {
        assert!(list(vec![1, 2]).len_eqs(2).is_valid());
        assert_eq!(list(vec![1]).len_eqs(2).errors(), &["must contain 2 values"]);
    }

    #[test]
    fn test_len_gt() {
        assert!(list(vec![1, 2, 3]).len_gt(2).is_valid());
        assert_eq!(
            list(vec![1, 2]).len_gt(2).errors(),
            &["must contain more than 2 values"]
        );
    }

    #[test]
    fn test_len_gte() {
        assert!(list(vec![1, 2, 3]).len_gte(3).is_valid());
        assert_eq!(
            list(vec![1, 2]).len_gte(3).errors(),
            &["must contain at least 3 values"]
        );
    }

    #[test]
    fn test_len_lt() {
        assert!(list(vec![1]).len_lt(2).is_valid());
        assert_eq!(
            list(vec![1, 2]).len_lt(2).errors(),
            &["must contain less than 2 values"]
        );
    }

    #[test]
    fn test_len_lte() {
        assert!(list(vec![1, 2]).len_lte(2).is_valid());
        assert_eq!(
            list(vec![1, 2, 3]).len_lte(2).errors(),
            &["must contain at most 2 values"]
        );
    }

    #[test]
    fn test_includes_reports_each_missing_value() {
        let l = list(vec![1, 2]).includes(&[1, 3, 4]);
        assert_eq!(l.errors(), &["must include 3", "must include 4"]);
    }

    #[test]
    fn test_each_default() {
        let l = list(vec![String::new(), "x".to_string()]).each_default("y".to_string());
        assert_eq!(l.into_value(), vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_each_populated_is_not_deduplicated() {
        let l = list(vec![0, 1, 0]).each_populated();
        assert_eq!(
            l.errors(),
            &["each value must be populated", "each value must be populated"]
        );
    }

    #[test]
    fn test_each_empty() {
        assert!(list(vec![0, 0]).each_empty().is_valid());
        assert_eq!(list(vec![0, 5]).each_empty().errors(), &["each value must be empty"]);
    }

    #[test]
    fn test_each_is() {
        assert!(list(vec!["a", "b"]).each_is(&["a", "b", "c"]).is_valid());
        let l = list(vec!["a", "x", "y"]).each_is(&["a", "b"]);
        assert_eq!(
            l.errors(),
            &["each value must be one of [a, b]", "each value must be one of [a, b]"]
        );
    }

    #[test]
    fn test_each_is_not() {
        assert!(list(vec![1, 2]).each_is_not(&[3]).is_valid());
        let l = list(vec![1, 3, 3]).each_is_not(&[3]);
        assert_eq!(l.errors(), &["3 not allowed", "3 not allowed"]);
    }

    #[test]
    fn test_empty_list_passes_element_checks() {
        let l = list(Vec::<i32>::new())
            .each_populated()
            .each_empty()
            .each_is(&[1])
            .each_is_not(&[1]);
        assert!(l.is_valid());
    }

    #[test]
    fn test_shared_chain() {
        let l = list(vec![1])
            .add_error("custom")
            .fallback_if(vec![1, 2, 3], true)
            .len_gte(3);
        assert_eq!(l.errors(), &["custom"]);
        assert_eq!(l.into_value(), vec![1, 2, 3]);
    }
}
