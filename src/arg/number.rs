//! Number arguments
//!
//! Ordering checks on top of the [`Comparable`] ones. Comparisons use the
//! natural ordering of the numeric type; a `NaN` satisfies none of them.

use std::cmp::Ordering;
use std::fmt::Display;

use super::{Arg, Comparable, Wrapper};

/// Primitive numeric types accepted by [`NumberArg`].
pub trait Number: PartialOrd + Default + Copy + Display {}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A numeric argument.
///
/// # Example
///
/// ```rust
/// use arg_check::prelude::*;
///
/// let qty = number(0).default(1).gte(1).lte(99);
/// assert!(qty.is_valid());
///
/// let ratio = number(1.5_f64).gt(0.0).lt(1.0);
/// assert_eq!(ratio.errors(), &["must be less than 1"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberArg<T> {
    inner: Arg<T>,
}

impl<T: Number> NumberArg<T> {
    /// Wrap a number.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arg::new(value),
        }
    }

    fn ordering(&self, other: &T) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }

    /// Fail unless the value is less than `max`.
    pub fn lt(self, max: T) -> Self {
        match self.ordering(&max) {
            Some(Ordering::Less) => self,
            _ => self.add_error(format_args!("must be less than {}", max)),
        }
    }

    /// Fail unless the value is less than or equal to `max`.
    pub fn lte(self, max: T) -> Self {
        match self.ordering(&max) {
            Some(Ordering::Less | Ordering::Equal) => self,
            _ => self.add_error(format_args!("must be less than or equal to {}", max)),
        }
    }

    /// Fail unless the value is greater than `min`.
    pub fn gt(self, min: T) -> Self {
        match self.ordering(&min) {
            Some(Ordering::Greater) => self,
            _ => self.add_error(format_args!("must be greater than {}", min)),
        }
    }

    /// Fail unless the value is greater than or equal to `min`.
    pub fn gte(self, min: T) -> Self {
        match self.ordering(&min) {
            Some(Ordering::Greater | Ordering::Equal) => self,
            _ => self.add_error(format_args!("must be greater than or equal to {}", min)),
        }
    }
}

/// Create a numeric argument.
#[inline]
pub fn number<T: Number>(value: T) -> NumberArg<T> {
    NumberArg::new(value)
}

impl<T> Wrapper for NumberArg<T> {
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

impl<T: Number> Comparable for NumberArg<T> {}
