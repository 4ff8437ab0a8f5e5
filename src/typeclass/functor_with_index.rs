//! Functor-with-index type class - mapping with access to element positions.
//!
//! `FunctorWithIndex` extends [`Functor`](super::Functor) by additionally
//! passing each element's position or key (as registered through
//! [`Indexed`](super::Indexed)) to the mapping function. Sequential
//! containers pass their offset, keyed containers their key, and single-slot
//! containers the unit index.
//!
//! # Laws
//!
//! In addition to the Functor laws, ignoring the index must recover plain
//! mapping:
//!
//! ```text
//! fa.fmap_with_index(|_, x| f(x)) == fa.fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::FunctorWithIndex;
//!
//! let labeled: Vec<String> = vec!["a", "b"]
//!     .fmap_with_index(|index, element| format!("{index}:{element}"));
//! assert_eq!(labeled, vec!["0:a", "1:b"]);
//! ```

use std::collections::BTreeMap;

use super::functor::Functor;
use super::higher::Indexed;
use super::identity::Identity;

/// A type class for containers that can map with access to element indices.
///
/// The index is passed by value as the first argument of the supplied
/// closure; keyed containers therefore require their key type to be `Clone`.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::FunctorWithIndex;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let keyed = map.fmap_with_index(|key, value| format!("{key}={value}"));
/// assert_eq!(keyed, BTreeMap::from([("a", "a=1".to_string()), ("b", "b=2".to_string())]));
/// ```
pub trait FunctorWithIndex: Functor + Indexed {
    /// Applies a function to each element together with its index.
    ///
    /// # Arguments
    ///
    /// * `function` - Receives the element's index and the element
    fn fmap_with_index<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Index, Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

/// Option's only slot carries the unit index.
impl<A> FunctorWithIndex for Option<A> {
    #[inline]
    fn fmap_with_index<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut((), A) -> B,
    {
        self.map(|element| function((), element))
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorWithIndex for Vec<T> {
    #[inline]
    fn fmap_with_index<B, F>(self, mut function: F) -> Vec<B>
    where
        F: FnMut(usize, T) -> B,
    {
        self.into_iter()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect()
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

impl<K: Ord + Clone, V> FunctorWithIndex for BTreeMap<K, V> {
    #[inline]
    fn fmap_with_index<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(K, V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| {
                let transformed = function(key.clone(), value);
                (key, transformed)
            })
            .collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> FunctorWithIndex for Identity<A> {
    #[inline]
    fn fmap_with_index<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut((), A) -> B,
    {
        Identity(function((), self.0))
    }
}
