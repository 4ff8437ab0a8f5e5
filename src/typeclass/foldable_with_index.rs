//! Foldable-with-index type class - folding with access to element positions.
//!
//! `FoldableWithIndex` extends [`Foldable`](super::Foldable) by passing each
//! element's position or key to the combining function. This is what makes
//! index-aware aggregation possible without first materializing an indexed
//! copy of the container, and it is the capability whose composed form
//! carries the pair-index ordering guarantee (outer index first, inner index
//! second).
//!
//! # Laws
//!
//! Ignoring the index must recover the plain fold:
//!
//! ```text
//! fa.fold_left_with_index(init, |acc, _, x| f(acc, x)) == fa.fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::FoldableWithIndex;
//!
//! let values = vec![10, 20, 30];
//! let weighted = values.fold_left_with_index(0, |accumulator, index, element| {
//!     accumulator + index as i32 * element
//! });
//! assert_eq!(weighted, 0 * 10 + 1 * 20 + 2 * 30);
//! ```

use std::collections::BTreeMap;

use super::foldable::Foldable;
use super::higher::Indexed;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for containers that can fold with access to element indices.
///
/// # Required Methods
///
/// - `fold_left_with_index`: Left-associative fold with indices
/// - `fold_right_with_index`: Right-associative fold with indices
///
/// # Provided Methods
///
/// - `fold_map_with_index`: Map each element and its index to a `Monoid`
///   and combine results
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::FoldableWithIndex;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let rendered = map.fold_left_with_index(String::new(), |accumulator, key, value| {
///     format!("{accumulator}{key}{value}")
/// });
/// assert_eq!(rendered, "a1b2");
/// ```
pub trait FoldableWithIndex: Foldable + Indexed {
    /// Folds from left to right, passing each element's index.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Receives the accumulator, the index, and the element
    fn fold_left_with_index<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Index, Self::Inner) -> B;

    /// Folds from right to left, passing each element's index.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Receives the index, the element, and the accumulator
    fn fold_right_with_index<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Index, Self::Inner, B) -> B;

    /// Maps each element together with its index to a `Monoid` and combines
    /// all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{FoldableWithIndex, Sum};
    ///
    /// let values = vec![10, 20];
    /// let total: Sum<usize> = values.fold_map_with_index(|index, element| {
    ///     Sum(index + element)
    /// });
    /// assert_eq!(total, Sum(0 + 10 + 1 + 20));
    /// ```
    fn fold_map_with_index<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Index, Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left_with_index(M::empty(), |accumulator, index, element| {
            accumulator.combine(function(index, element))
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> FoldableWithIndex for Option<A> {
    fn fold_left_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, (), A) -> B,
    {
        match self {
            Some(element) => function(init, (), element),
            None => init,
        }
    }

    fn fold_right_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut((), A, B) -> B,
    {
        match self {
            Some(element) => function((), element, init),
            None => init,
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FoldableWithIndex for Vec<T> {
    fn fold_left_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, usize, T) -> B,
    {
        self.into_iter()
            .enumerate()
            .fold(init, |accumulator, (index, element)| {
                function(accumulator, index, element)
            })
    }

    fn fold_right_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(usize, T, B) -> B,
    {
        self.into_iter()
            .enumerate()
            .rev()
            .fold(init, |accumulator, (index, element)| {
                function(index, element, accumulator)
            })
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

/// Folds visit entries in ascending key order, passing each key.
impl<K: Ord + Clone, V> FoldableWithIndex for BTreeMap<K, V> {
    fn fold_left_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, K, V) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (key, value)| {
                function(accumulator, key, value)
            })
    }

    fn fold_right_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(K, V, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, (key, value)| {
                function(key, value, accumulator)
            })
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> FoldableWithIndex for Identity<A> {
    fn fold_left_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, (), A) -> B,
    {
        function(init, (), self.0)
    }

    fn fold_right_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut((), A, B) -> B,
    {
        function((), self.0, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_with_index_visits_in_order() {
        let values = vec!["a", "b", "c"];
        let mut seen = Vec::new();
        values.fold_left_with_index((), |(), index, element| {
            seen.push((index, element));
        });
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[rstest]
    fn vec_fold_right_with_index_visits_in_reverse() {
        let values = vec!["a", "b", "c"];
        let mut seen = Vec::new();
        values.fold_right_with_index((), |index, element, ()| {
            seen.push((index, element));
        });
        assert_eq!(seen, vec![(2, "c"), (1, "b"), (0, "a")]);
    }

    #[rstest]
    fn empty_fold_returns_seed() {
        let empty: Vec<i32> = vec![];
        assert_eq!(
            empty.fold_left_with_index(42, |accumulator, _, element| accumulator + element),
            42
        );

        let none_value: Option<i32> = None;
        assert_eq!(
            none_value.fold_left_with_index(42, |accumulator, (), element| accumulator + element),
            42
        );
    }

    #[rstest]
    fn btreemap_passes_keys_in_order() {
        let map = BTreeMap::from([(2, "b"), (1, "a")]);
        let rendered = map.fold_left_with_index(String::new(), |accumulator, key, value| {
            format!("{accumulator}{key}{value}")
        });
        assert_eq!(rendered, "1a2b");
    }

    #[rstest]
    fn fold_map_with_index_combines() {
        let values = vec![10usize, 20, 30];
        let total: Sum<usize> = values.fold_map_with_index(|index, element| Sum(index + element));
        assert_eq!(total, Sum(63));
    }

    /// Ignoring the index recovers the plain fold.
    #[rstest]
    fn ignoring_index_is_fold_left() {
        let values = vec![1, 2, 3];
        let with_index =
            values
                .clone()
                .fold_left_with_index(0, |accumulator, _, element| accumulator + element);
        let without = values.fold_left(0, |accumulator, element| accumulator + element);
        assert_eq!(with_index, without);
    }
}
