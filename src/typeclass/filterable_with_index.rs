//! Filterable-with-index type class - filtering with access to element
//! positions.
//!
//! `FilterableWithIndex` extends [`Filterable`](super::Filterable) by passing
//! each element's position or key to the selecting function, so inclusion
//! decisions can depend on where an element sits, not only on its value.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::FilterableWithIndex;
//!
//! // Keep every other element.
//! let values = vec!["a", "b", "c", "d"];
//! let kept = values.filter_with_index(|index, _| index % 2 == 0);
//! assert_eq!(kept, vec!["a", "c"]);
//! ```

use std::collections::BTreeMap;

use super::filterable::Filterable;
use super::higher::Indexed;
use crate::control::Either;

/// A type class for containers that can filter with access to element
/// indices.
///
/// # Required Methods
///
/// - `filter_map_with_index`: Transform each element and its index, keeping
///   only `Some` results
/// - `partition_map_with_index`: Route each element by index and value
///
/// # Provided Methods
///
/// - `filter_with_index`: Keep elements whose index and value satisfy a
///   predicate
/// - `partition_with_index`: Split into `(excluded, kept)` by an indexed
///   predicate
pub trait FilterableWithIndex: Filterable + Indexed {
    /// Transforms each element together with its index, keeping only the
    /// `Some` results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::FilterableWithIndex;
    ///
    /// let values = vec![10, 20, 30];
    /// let scaled: Vec<usize> = values.filter_map_with_index(|index, element| {
    ///     if element > 15 { Some(index * element as usize) } else { None }
    /// });
    /// assert_eq!(scaled, vec![20, 60]);
    /// ```
    fn filter_map_with_index<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Index, Self::Inner) -> Option<B>;

    /// Routes each element into one of two output containers, with its index
    /// available to the routing function.
    fn partition_map_with_index<B, C, F>(
        self,
        function: F,
    ) -> (Self::WithType<B>, Self::WithType<C>)
    where
        F: FnMut(Self::Index, Self::Inner) -> Either<B, C>;

    /// Keeps the elements whose index and value satisfy a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::FilterableWithIndex;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("a", 1), ("b", 2)]);
    /// let kept = map.filter_with_index(|key, value| *key == "a" || *value > 1);
    /// assert_eq!(kept.len(), 2);
    /// ```
    fn filter_with_index<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Index, &Self::Inner) -> bool,
        Self: Sized,
    {
        self.filter_map_with_index(|index, element| {
            if predicate(&index, &element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Splits the container into `(excluded, kept)` by an indexed predicate.
    fn partition_with_index<P>(
        self,
        mut predicate: P,
    ) -> (Self::WithType<Self::Inner>, Self::WithType<Self::Inner>)
    where
        P: FnMut(&Self::Index, &Self::Inner) -> bool,
        Self: Sized,
    {
        self.partition_map_with_index(|index, element| {
            if predicate(&index, &element) {
                Either::Right(element)
            } else {
                Either::Left(element)
            }
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> FilterableWithIndex for Option<A> {
    #[inline]
    fn filter_map_with_index<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut((), A) -> Option<B>,
    {
        self.and_then(|element| function((), element))
    }

    fn partition_map_with_index<B, C, F>(self, mut function: F) -> (Option<B>, Option<C>)
    where
        F: FnMut((), A) -> Either<B, C>,
    {
        match self {
            None => (None, None),
            Some(element) => match function((), element) {
                Either::Left(left) => (Some(left), None),
                Either::Right(right) => (None, Some(right)),
            },
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

/// Indices observed by the function are the positions in the *input*; kept
/// elements are compacted in the output.
impl<T> FilterableWithIndex for Vec<T> {
    fn filter_map_with_index<B, F>(self, mut function: F) -> Vec<B>
    where
        F: FnMut(usize, T) -> Option<B>,
    {
        self.into_iter()
            .enumerate()
            .filter_map(|(index, element)| function(index, element))
            .collect()
    }

    fn partition_map_with_index<B, C, F>(self, mut function: F) -> (Vec<B>, Vec<C>)
    where
        F: FnMut(usize, T) -> Either<B, C>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for (index, element) in self.into_iter().enumerate() {
            match function(index, element) {
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

impl<K: Ord + Clone, V> FilterableWithIndex for BTreeMap<K, V> {
    fn filter_map_with_index<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(K, V) -> Option<B>,
    {
        self.into_iter()
            .filter_map(|(key, value)| {
                function(key.clone(), value).map(|transformed| (key, transformed))
            })
            .collect()
    }

    fn partition_map_with_index<B, C, F>(self, mut function: F) -> (BTreeMap<K, B>, BTreeMap<K, C>)
    where
        F: FnMut(K, V) -> Either<B, C>,
    {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, value) in self {
            match function(key.clone(), value) {
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
