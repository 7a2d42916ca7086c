//! Assertion helpers for tests that use argument wrappers
//!
//! # Example
//!
//! ```rust
//! use arg_check::prelude::*;
//! use arg_check::{assert_arg_errors, assert_invalid, assert_valid};
//!
//! assert_valid!(string("jan@example.com").is_email());
//! assert_invalid!(number(3).gt(5));
//! assert_arg_errors!(list(vec![1]).len_gte(2), ["must contain at least 2 values"]);
//! ```

/// Assert that an argument has no messages.
///
/// Panics with the messages if there are any.
#[macro_export]
macro_rules! assert_valid {
    ($arg:expr) => {{
        use $crate::Argument as _;
        let arg = $arg;
        let errors = arg.errors();
        if !errors.is_empty() {
            panic!("Expected valid argument, got errors: {:?}", errors);
        }
    }};
}

/// Assert that an argument has at least one message.
#[macro_export]
macro_rules! assert_invalid {
    ($arg:expr) => {{
        use $crate::Argument as _;
        let arg = $arg;
        if arg.errors().is_empty() {
            panic!("Expected invalid argument, got no errors");
        }
    }};
}

/// Assert that an argument has exactly the given messages, in order.
///
/// ```rust
/// use arg_check::prelude::*;
/// use arg_check::assert_arg_errors;
///
/// assert_arg_errors!(
///     string("").populated().is_title(),
///     ["must be populated", "must be populated and no more than 60 characters"]
/// );
/// ```
#[macro_export]
macro_rules! assert_arg_errors {
    ($arg:expr, $expected:expr) => {{
        use $crate::Argument as _;
        let arg = $arg;
        let errors = arg.errors();
        let expected: &[&str] = &$expected;
        assert_eq!(errors, expected, "argument messages differ");
    }};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_assert_valid_passes() {
        assert_valid!(number(5).gt(1));
    }

    #[test]
    #[should_panic(expected = "Expected valid argument")]
    fn test_assert_valid_panics() {
        assert_valid!(number(0).gt(1));
    }

    #[test]
    fn test_assert_invalid_passes() {
        assert_invalid!(string("").populated());
    }

    #[test]
    #[should_panic(expected = "Expected invalid argument")]
    fn test_assert_invalid_panics() {
        assert_invalid!(string("x").populated());
    }

    #[test]
    fn test_assert_arg_errors() {
        assert_arg_errors!(arg(1).add_error("a").add_error("b"), ["a", "b"]);
        assert_arg_errors!(arg(1), []);
    }

    #[test]
    #[should_panic(expected = "argument messages differ")]
    fn test_assert_arg_errors_panics_on_mismatch() {
        assert_arg_errors!(arg(1).add_error("a"), ["b"]);
    }
}
