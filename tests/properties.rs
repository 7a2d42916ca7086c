//! Property-based tests for argument wrappers

use arg_check::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_new_argument_has_no_errors(value in any::<i64>()) {
        let a = arg(value);
        prop_assert!(a.errors().is_empty());
        prop_assert!(a.is_valid());
    }

    #[test]
    fn prop_valid_and_invalid_are_complementary(
        messages in prop::collection::vec("[a-z ]{1,12}", 0..8)
    ) {
        let mut a = arg(0u8);
        prop_assert_eq!(a.is_valid(), !a.is_invalid());
        for message in &messages {
            a = a.add_error(message);
            prop_assert_eq!(a.is_valid(), !a.is_invalid());
        }
    }

    #[test]
    fn prop_add_error_is_monotonic(
        messages in prop::collection::vec("[a-z]{0,8}", 0..16)
    ) {
        let mut a = arg("subject");
        for (i, message) in messages.iter().enumerate() {
            let before = a.errors().to_vec();
            a = a.add_error(message);
            prop_assert_eq!(a.errors().len(), i + 1);
            prop_assert_eq!(&a.errors()[..i], before.as_slice());
        }
        prop_assert_eq!(a.errors(), messages.as_slice());
    }

    #[test]
    fn prop_fallback_if_never_touches_errors(
        value in any::<i32>(),
        fallback in any::<i32>(),
        condition in any::<bool>(),
        failing in any::<bool>()
    ) {
        let a = arg(value);
        let a = if failing { a.add_error("existing") } else { a };
        let before = a.errors().to_vec();
        let a = a.fallback_if(fallback, condition);
        prop_assert_eq!(a.errors(), before.as_slice());
        prop_assert_eq!(*a.value(), if condition { fallback } else { value });
    }

    #[test]
    fn prop_ordering_checks_match_operators(value in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(number(value).lt(bound).is_valid(), value < bound);
        prop_assert_eq!(number(value).lte(bound).is_valid(), value <= bound);
        prop_assert_eq!(number(value).gt(bound).is_valid(), value > bound);
        prop_assert_eq!(number(value).gte(bound).is_valid(), value >= bound);
    }

    #[test]
    fn prop_length_in_range(s in "[a-z]{0,20}", min in 0usize..10, span in 0usize..10) {
        let max = min + span;
        let valid = string(s.clone()).length_in_range(min, max).is_valid();
        prop_assert_eq!(valid, s.len() >= min && s.len() <= max);
    }

    #[test]
    fn prop_list_length_checks(len in 0usize..12, n in 0usize..12) {
        let items = vec![1u8; len];
        prop_assert_eq!(list(items.clone()).len_eqs(n).is_valid(), len == n);
        prop_assert_eq!(list(items.clone()).len_gt(n).is_valid(), len > n);
        prop_assert_eq!(list(items.clone()).len_gte(n).is_valid(), len >= n);
        prop_assert_eq!(list(items.clone()).len_lt(n).is_valid(), len < n);
        prop_assert_eq!(list(items).len_lte(n).is_valid(), len <= n);
    }

    #[test]
    fn prop_each_populated_counts_zeros(items in prop::collection::vec(0u8..3, 0..20)) {
        let zeros = items.iter().filter(|v| **v == 0).count();
        prop_assert_eq!(list(items).each_populated().errors().len(), zeros);
    }

    #[test]
    fn prop_aggregation_agrees_with_each_argument(flags in prop::collection::vec(any::<bool>(), 0..6)) {
        let args: Vec<Arg<usize>> = flags
            .iter()
            .enumerate()
            .map(|(i, invalid)| {
                let a = arg(i);
                if *invalid { a.add_error(format!("arg {} failed", i)) } else { a }
            })
            .collect();
        let refs: Vec<&dyn Argument> = args.iter().map(|a| a as &dyn Argument).collect();

        prop_assert_eq!(all_valid(&refs), flags.iter().all(|f| !f));
        prop_assert_eq!(any_invalid(&refs), flags.iter().any(|f| *f));

        let expected_first = flags.iter().position(|f| *f).map(|i| format!("arg {} failed", i));
        prop_assert_eq!(first_error(&refs).map(str::to_string), expected_first);

        match all_errors(&refs) {
            Ok(()) => {
                prop_assert!(flags.iter().all(|f| !f));
            }
            Err(err) => {
                prop_assert_eq!(err.len(), flags.iter().filter(|f| **f).count());
            }
        }
    }

    #[test]
    fn prop_fail_fast_keeps_first_failure(conditions in prop::collection::vec(any::<bool>(), 0..10)) {
        let check = conditions
            .iter()
            .enumerate()
            .fold(FailFast::new(), |check, (i, failed)| {
                check.add(*failed, format_args!("check {} failed", i))
            });
        let expected = conditions
            .iter()
            .position(|f| *f)
            .map(|i| format!("check {} failed", i))
            .unwrap_or_default();
        prop_assert_eq!(check.error(), expected.as_str());
    }
}
