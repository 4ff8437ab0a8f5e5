//! Filterable type class - selectively keeping, discarding, and splitting
//! elements.
//!
//! This module provides the `Filterable` trait, which represents containers
//! whose elements can be dropped or routed into two output containers. The
//! central operation is `filter_map`, whose function may simultaneously
//! transform an element and decide its inclusion by returning an `Option`;
//! everything else (`filter`, `partition`, `partition_map`, `compact`,
//! `separate`) derives from it and its two-way sibling.
//!
//! # Laws
//!
//! ## Identity
//!
//! Keeping everything recovers the original container:
//!
//! ```text
//! fa.filter_map(Some) == fa
//! ```
//!
//! ## Consistency with Functor
//!
//! ```text
//! fa.filter_map(|x| Some(f(x))) == fa.fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Filterable;
//!
//! // Transform and select in one pass
//! let numbers = vec!["1", "two", "3"];
//! let parsed: Vec<i32> = numbers.filter_map(|s| s.parse().ok());
//! assert_eq!(parsed, vec![1, 3]);
//! ```

use std::collections::BTreeMap;

use super::functor::Functor;
use super::higher::TypeConstructor;
use crate::control::Either;

/// A type class for containers whose elements can be selectively kept,
/// discarded, or split.
///
/// # Required Methods
///
/// - `filter_map`: Transform each element, keeping only `Some` results
/// - `partition_map`: Route each element into one of two output containers
///
/// # Provided Methods
///
/// - `filter`: Keep elements satisfying a predicate
/// - `partition`: Split by a predicate into (excluded, kept)
/// - `compact`: Collapse a container of options, dropping the `None`s
/// - `separate`: Split a container of eithers into (lefts, rights)
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Filterable;
///
/// let values = vec![1, 2, 3, 4];
///
/// let evens = values.clone().filter(|n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
///
/// let (odds, evens) = values.partition(|n| n % 2 == 0);
/// assert_eq!((odds, evens), (vec![1, 3], vec![2, 4]));
/// ```
pub trait Filterable: Functor {
    /// Transforms each element, keeping only the `Some` results.
    ///
    /// The function both maps and selects: returning `None` discards the
    /// element, returning `Some(b)` keeps the transformed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    ///
    /// let values = vec!["1", "x", "3"];
    /// let parsed: Vec<i32> = values.filter_map(|s| s.parse().ok());
    /// assert_eq!(parsed, vec![1, 3]);
    /// ```
    fn filter_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Routes each element into one of two output containers.
    ///
    /// `Either::Left` results land in the first output, `Either::Right`
    /// results in the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::typeclass::Filterable;
    ///
    /// let values = vec![1, 2, 3, 4];
    /// let (odds, evens) = values.partition_map(|n| {
    ///     if n % 2 == 0 { Either::Right(n) } else { Either::Left(n) }
    /// });
    /// assert_eq!(odds, vec![1, 3]);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn partition_map<B, C, F>(self, function: F) -> (Self::WithType<B>, Self::WithType<C>)
    where
        F: FnMut(Self::Inner) -> Either<B, C>;

    /// Keeps the elements satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    ///
    /// let evens = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn filter<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.filter_map(|element| {
            if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Splits the container by a predicate into `(excluded, kept)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    ///
    /// let (excluded, kept) = vec![1, 2, 3, 4].partition(|n| n % 2 == 0);
    /// assert_eq!(excluded, vec![1, 3]);
    /// assert_eq!(kept, vec![2, 4]);
    /// ```
    fn partition<P>(self, mut predicate: P) -> (Self::WithType<Self::Inner>, Self::WithType<Self::Inner>)
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.partition_map(|element| {
            if predicate(&element) {
                Either::Right(element)
            } else {
                Either::Left(element)
            }
        })
    }

    /// Collapses a container of options, dropping the `None`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    ///
    /// let values: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
    /// assert_eq!(values.compact(), vec![1, 3]);
    /// ```
    fn compact(self) -> Self::WithType<<Self::Inner as TypeConstructor>::Inner>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.filter_map(Into::into)
    }

    /// Splits a container of eithers into `(lefts, rights)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::typeclass::Filterable;
    ///
    /// let values: Vec<Either<&str, i32>> = vec![
    ///     Either::Right(1),
    ///     Either::Left("bad"),
    ///     Either::Right(3),
    /// ];
    /// let (lefts, rights) = values.separate();
    /// assert_eq!(lefts, vec!["bad"]);
    /// assert_eq!(rights, vec![1, 3]);
    /// ```
    fn separate<L, R>(self) -> (Self::WithType<L>, Self::WithType<R>)
    where
        Self: Sized,
        Self::Inner: Into<Either<L, R>>,
    {
        self.partition_map(Into::into)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Filterable for Option<A> {
    #[inline]
    fn filter_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (Option<B>, Option<C>)
    where
        F: FnMut(A) -> Either<B, C>,
    {
        match self {
            None => (None, None),
            Some(element) => match function(element) {
                Either::Left(left) => (Some(left), None),
                Either::Right(right) => (None, Some(right)),
            },
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Filterable for Vec<T> {
    #[inline]
    fn filter_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.into_iter().filter_map(function).collect()
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (Vec<B>, Vec<C>)
    where
        F: FnMut(T) -> Either<B, C>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in self {
            match function(element) {
                Either::Left(left) => lefts.push(left),
                Either::Right(right) => rights.push(right),
            }
        }
        (lefts, rights)
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

/// Filtering a `BTreeMap` keeps each surviving value under its original key.
impl<K: Ord + Clone, V> Filterable for BTreeMap<K, V> {
    fn filter_map<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(V) -> Option<B>,
    {
        self.into_iter()
            .filter_map(|(key, value)| function(value).map(|transformed| (key, transformed)))
            .collect()
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (BTreeMap<K, B>, BTreeMap<K, C>)
    where
        F: FnMut(V) -> Either<B, C>,
    {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, value) in self {
            match function(value) {
                Either::Left(left) => {
                    lefts.insert(key, left);
                }
                Either::Right(right) => {
                    rights.insert(key, right);
                }
            }
        }
        (lefts, rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Vec Tests
    // =========================================================================

    #[rstest]
    fn vec_filter_map_transforms_and_selects() {
        let values = vec!["1", "two", "3"];
        let parsed: Vec<i32> = values.filter_map(|s| s.parse().ok());
        assert_eq!(parsed, vec![1, 3]);
    }

    #[rstest]
    fn vec_filter_keeps_matching() {
        let evens = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
        assert_eq!(evens, vec![2, 4]);
    }

    #[rstest]
    fn vec_partition_splits_excluded_then_kept() {
        let (excluded, kept) = vec![1, 2, 3, 4].partition(|n| n % 2 == 0);
        assert_eq!(excluded, vec![1, 3]);
        assert_eq!(kept, vec![2, 4]);
    }

    #[rstest]
    fn vec_partition_map_routes_by_either() {
        let values = vec![1, 2, 3, 4];
        let (small, large) = values.partition_map(|n| {
            if n < 3 {
                Either::Left(n)
            } else {
                Either::Right(n * 10)
            }
        });
        assert_eq!(small, vec![1, 2]);
        assert_eq!(large, vec![30, 40]);
    }

    #[rstest]
    fn vec_compact_drops_nones() {
        let values: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
        assert_eq!(values.compact(), vec![1, 3]);
    }

    #[rstest]
    fn vec_separate_splits_eithers() {
        let values: Vec<Either<&str, i32>> =
            vec![Either::Right(1), Either::Left("bad"), Either::Right(3)];
        let (lefts, rights) = values.separate();
        assert_eq!(lefts, vec!["bad"]);
        assert_eq!(rights, vec![1, 3]);
    }

    // =========================================================================
    // Option Tests
    // =========================================================================

    #[rstest]
    fn option_filter_map() {
        assert_eq!(Some(4).filter_map(|n| (n % 2 == 0).then_some(n * 10)), Some(40));
        assert_eq!(Some(3).filter_map(|n| (n % 2 == 0).then_some(n * 10)), None);
        assert_eq!(None::<i32>.filter_map(|n| Some(n * 10)), None);
    }

    #[rstest]
    fn option_partition_map() {
        let some_left: (Option<i32>, Option<i32>) = Some(1).partition_map(Either::Left);
        assert_eq!(some_left, (Some(1), None));

        let some_right: (Option<i32>, Option<i32>) = Some(1).partition_map(Either::Right);
        assert_eq!(some_right, (None, Some(1)));

        let none: (Option<i32>, Option<i32>) = None.partition_map(Either::Right);
        assert_eq!(none, (None, None));
    }

    // =========================================================================
    // BTreeMap Tests
    // =========================================================================

    #[rstest]
    fn btreemap_filter_map_keeps_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let evens = map.filter_map(|value| (value % 2 == 0).then_some(value));
        assert_eq!(evens, BTreeMap::from([("b", 2)]));
    }

    #[rstest]
    fn btreemap_partition_map_keeps_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        let (odds, evens) = map.partition_map(|value| {
            if value % 2 == 0 {
                Either::Right(value)
            } else {
                Either::Left(value)
            }
        });
        assert_eq!(odds, BTreeMap::from([("a", 1)]));
        assert_eq!(evens, BTreeMap::from([("b", 2)]));
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    /// Identity: keeping everything recovers the original container.
    #[rstest]
    fn filter_map_some_is_identity() {
        let values = vec![1, 2, 3];
        assert_eq!(values.clone().filter_map(Some), values);

        let map = BTreeMap::from([(1, "a"), (2, "b")]);
        assert_eq!(map.clone().filter_map(Some), map);
    }

    /// Consistency with Functor: filter_map with total Some equals fmap.
    #[rstest]
    fn filter_map_total_is_fmap() {
        let values = vec![1, 2, 3];
        let filtered: Vec<i32> = values.clone().filter_map(|n| Some(n * 2));
        let mapped: Vec<i32> = values.fmap(|n| n * 2);
        assert_eq!(filtered, mapped);
    }

    /// Empty containers are preserved by every operation.
    #[rstest]
    fn empty_container_stays_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.clone().filter(|_| true), Vec::<i32>::new());
        let (lefts, rights) = empty.partition(|_| true);
        assert!(lefts.is_empty() && rights.is_empty());
    }
}
