//! Traversable-with-index type class - effectful traversal with access to
//! element positions.
//!
//! `TraversableWithIndex` extends [`Traversable`](super::Traversable) by
//! passing each element's position or key to the effectful function. The
//! short-circuit behavior is unchanged: the first failure aborts the
//! traversal.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::TraversableWithIndex;
//!
//! // Validate that every element matches its position.
//! let values = vec![0, 1, 2];
//! let checked: Option<Vec<usize>> = values.traverse_option_with_index(|index, element| {
//!     (element == index).then_some(element)
//! });
//! assert_eq!(checked, Some(vec![0, 1, 2]));
//! ```

use std::collections::BTreeMap;

use super::higher::Indexed;
use super::traversable::Traversable;

/// A type class for structures that can be traversed with effects and
/// element indices.
pub trait TraversableWithIndex: Traversable + Indexed {
    /// Applies a function returning `Option` to each element and its index,
    /// collecting the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::TraversableWithIndex;
    ///
    /// let values = vec![10, 20];
    /// let result: Option<Vec<String>> = values.traverse_option_with_index(|index, element| {
    ///     Some(format!("{index}:{element}"))
    /// });
    /// assert_eq!(result, Some(vec!["0:10".to_string(), "1:20".to_string()]));
    /// ```
    fn traverse_option_with_index<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Index, Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element and its index,
    /// collecting the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::TraversableWithIndex;
    ///
    /// let values = vec![1, -2];
    /// let result: Result<Vec<i32>, String> = values.traverse_result_with_index(|index, element| {
    ///     if element >= 0 { Ok(element) } else { Err(format!("negative at {index}")) }
    /// });
    /// assert_eq!(result, Err("negative at 1".to_string()));
    /// ```
    fn traverse_result_with_index<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Index, Self::Inner) -> Result<B, E>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> TraversableWithIndex for Option<A> {
    fn traverse_option_with_index<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut((), A) -> Option<B>,
    {
        match self {
            None => Some(None),
            Some(element) => function((), element).map(Some),
        }
    }

    fn traverse_result_with_index<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut((), A) -> Result<B, E>,
    {
        match self {
            None => Ok(None),
            Some(element) => function((), element).map(Some),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> TraversableWithIndex for Vec<T> {
    fn traverse_option_with_index<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(usize, T) -> Option<B>,
    {
        let mut results = Vec::with_capacity(self.len());
        for (index, element) in self.into_iter().enumerate() {
            results.push(function(index, element)?);
        }
        Some(results)
    }

    fn traverse_result_with_index<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(usize, T) -> Result<B, E>,
    {
        let mut results = Vec::with_capacity(self.len());
        for (index, element) in self.into_iter().enumerate() {
            results.push(function(index, element)?);
        }
        Ok(results)
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

impl<K: Ord + Clone, V> TraversableWithIndex for BTreeMap<K, V> {
    fn traverse_option_with_index<B, F>(self, mut function: F) -> Option<BTreeMap<K, B>>
    where
        F: FnMut(K, V) -> Option<B>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            let transformed = function(key.clone(), value)?;
            results.insert(key, transformed);
        }
        Some(results)
    }

    fn traverse_result_with_index<B, E, F>(self, mut function: F) -> Result<BTreeMap<K, B>, E>
    where
        F: FnMut(K, V) -> Result<B, E>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            let transformed = function(key.clone(), value)?;
            results.insert(key, transformed);
        }
        Ok(results)
    }
}
