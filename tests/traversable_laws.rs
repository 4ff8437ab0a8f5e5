//! Property-based tests for Traversable.
//!
//! Verifies the identity law (traversing with a total function is mapping),
//! the short-circuit contract (the first failure aborts the traversal and no
//! later element is inspected), and the sequence/traverse relationship.

use kindred::typeclass::{Functor, Traversable};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::BTreeMap;

proptest! {
    /// Traversing with a total function is mapping.
    #[test]
    fn prop_traverse_total_is_fmap(values in any::<Vec<i32>>()) {
        let traversed = values.clone().traverse_option(|n| Some(i64::from(n) + 1));
        let mapped = Some(values.fmap(|n| i64::from(n) + 1));
        prop_assert_eq!(traversed, mapped);
    }

    /// An empty container traverses to the effect's pure success.
    #[test]
    fn prop_empty_traverse_is_pure(_unused in any::<u8>()) {
        let empty: Vec<i32> = vec![];
        prop_assert_eq!(empty.traverse_option(|_| None::<i32>), Some(vec![]));
    }

    /// Traversal fails exactly when some element fails.
    #[test]
    fn prop_traverse_fails_iff_any_fails(values in any::<Vec<i32>>()) {
        let any_negative = values.iter().any(|n| *n < 0);
        let result = values.traverse_option(|n| (n >= 0).then_some(n));
        prop_assert_eq!(result.is_none(), any_negative);
    }

    /// No element after the first failure is inspected.
    #[test]
    fn prop_traverse_short_circuits(
        prefix in prop::collection::vec(0i32..100, 0..16),
        suffix in prop::collection::vec(any::<i32>(), 0..16),
    ) {
        let mut values = prefix.clone();
        values.push(-1);
        values.extend(suffix);

        let inspected = Cell::new(0usize);
        let result = values.traverse_option(|n| {
            inspected.set(inspected.get() + 1);
            (n >= 0).then_some(n)
        });

        prop_assert_eq!(result, None);
        prop_assert_eq!(inspected.get(), prefix.len() + 1);
    }

    /// traverse_result returns the error of the first failing element.
    #[test]
    fn prop_traverse_result_returns_first_error(values in prop::collection::vec(any::<i16>(), 1..32)) {
        let first_negative = values.iter().copied().find(|n| *n < 0);
        let result: Result<Vec<i16>, i16> =
            values.traverse_result(|n| if n >= 0 { Ok(n) } else { Err(n) });
        match first_negative {
            Some(bad) => prop_assert_eq!(result, Err(bad)),
            None => prop_assert!(result.is_ok()),
        }
    }

    /// sequence_option is traverse_option with the identity function.
    #[test]
    fn prop_sequence_is_traverse_identity(values in any::<Vec<Option<i32>>>()) {
        let sequenced = values.clone().sequence_option();
        let traversed = values.traverse_option(|option| option);
        prop_assert_eq!(sequenced, traversed);
    }

    /// BTreeMap traversal preserves the key set on success.
    #[test]
    fn prop_btreemap_traverse_preserves_keys(map in any::<BTreeMap<u8, u32>>()) {
        let keys: Vec<u8> = map.keys().copied().collect();
        let result = map.traverse_option(|value| Some(u64::from(value)));
        let traversed = result.expect("total function cannot fail");
        let traversed_keys: Vec<u8> = traversed.keys().copied().collect();
        prop_assert_eq!(keys, traversed_keys);
    }
}

/// Concrete example: [2, 10, 3] succeeds, [2, -10, 3] fails
/// without inspecting the element after the failure.
#[test]
fn traverse_option_concrete_example() {
    let step = |n: i32| if n >= 0 { Some(n) } else { None };

    assert_eq!(vec![2, 10, 3].traverse_option(step), Some(vec![2, 10, 3]));

    let inspected = Cell::new(0);
    let result = vec![2, -10, 3].traverse_option(|n| {
        inspected.set(inspected.get() + 1);
        step(n)
    });
    assert_eq!(result, None);
    assert_eq!(inspected.get(), 2);
}
