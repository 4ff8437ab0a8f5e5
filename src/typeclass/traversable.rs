//! Traversable type class - mapping with effects and collecting results.
//!
//! This module provides the `Traversable` trait, which represents containers
//! that can have an effectful function applied to each element while the
//! results are reassembled in the original shape "inside" the effect.
//!
//! # Motivation
//!
//! Consider a `Vec<String>` where each string should parse to an integer.
//! The parsing function returns `Option<i32>` (or `Result<i32, E>`), and the
//! desired outcome is:
//! - If all parses succeed: `Some(Vec<i32>)` containing all results
//! - If any parse fails: `None` (or the first error), with no later element
//!   inspected
//!
//! This is exactly what `traverse` does.
//!
//! # Limitations in Rust
//!
//! Rust lacks Higher-Kinded Types, which would allow a single generic
//! `traverse` over any applicative effect. Instead, this trait provides
//! specialized methods for the failure-biased effects that matter in
//! practice:
//!
//! - `traverse_option`: For functions returning `Option<B>`
//! - `traverse_result`: For functions returning `Result<B, E>`
//!
//! # Laws
//!
//! ## Identity
//!
//! Traversing with a total function is just mapping:
//!
//! ```text
//! fa.traverse_option(|x| Some(f(x))) == Some(fa.fmap(f))
//! ```
//!
//! ## Short-circuit
//!
//! Traversal stops at the first failure; elements after it are never
//! inspected.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use std::collections::BTreeMap;

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::control::Either;

/// A type class for structures that can be traversed with effects.
///
/// `Traversable` combines `Functor` and `Foldable` with the ability to
/// sequence effects: apply an effectful function to each element and collect
/// all the effects into one.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Traversable;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("must be positive") }
/// }
///
/// let valid = vec![1, 2, 3];
/// assert_eq!(valid.traverse_result(validate_positive), Ok(vec![1, 2, 3]));
///
/// let invalid = vec![1, -2, 3];
/// assert_eq!(invalid.traverse_result(validate_positive), Err("must be positive"));
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Option` to each element and collects
    /// the results.
    ///
    /// If all applications return `Some`, the result is `Some` wrapping the
    /// rebuilt container. The first `None` aborts the traversal; elements
    /// after it are not inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values = vec!["1", "2", "3"];
    /// let result: Option<Vec<i32>> = values.traverse_option(|s| s.parse().ok());
    /// assert_eq!(result, Some(vec![1, 2, 3]));
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element and collects
    /// the results.
    ///
    /// If all applications return `Ok`, the result is `Ok` wrapping the
    /// rebuilt container. The first `Err` aborts the traversal and becomes
    /// the overall result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values = vec!["1", "2", "x"];
    /// let result: Result<Vec<i32>, String> = values.traverse_result(|s| {
    ///     s.parse().map_err(|_| format!("bad input: {s}"))
    /// });
    /// assert_eq!(result, Err("bad input: x".to_string()));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// Converts `Self<Option<A>>` to `Option<Self<A>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values: Vec<Option<i32>> = vec![Some(1), Some(2), Some(3)];
    /// assert_eq!(values.sequence_option(), Some(vec![1, 2, 3]));
    ///
    /// let with_none: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
    /// assert_eq!(with_none.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    ///
    /// Converts `Self<Result<A, E>>` to `Result<Self<A>, E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    ///
    /// let values: Vec<Result<i32, String>> = vec![Ok(1), Ok(2)];
    /// assert_eq!(values.sequence_result(), Ok(vec![1, 2]));
    ///
    /// let with_err: Vec<Result<i32, String>> = vec![Ok(1), Err("boom".to_string())];
    /// assert_eq!(with_err.sequence_result(), Err("boom".to_string()));
    /// ```
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            None => Some(None),
            Some(element) => function(element).map(Some),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            None => Ok(None),
            Some(element) => function(element).map(Some),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// Traversing a `Result` visits the `Ok` value; an `Err` passes through as
/// the effect's success wrapping the untouched error.
impl<T, E2: Clone> Traversable for Result<T, E2> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E2>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Err(error) => Some(Err(error)),
            Ok(element) => function(element).map(Ok),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Result<B, E2>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        match self {
            Err(error) => Ok(Err(error)),
            Ok(element) => function(element).map(Ok),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Traversable for Vec<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        let mut results = Vec::with_capacity(self.len());
        for element in self {
            results.push(function(element)?);
        }
        Some(results)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        let mut results = Vec::with_capacity(self.len());
        for element in self {
            results.push(function(element)?);
        }
        Ok(results)
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Traversable for Box<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Box<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        function(*self).map(Box::new)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Box<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        function(*self).map(Box::new)
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

/// Traversal visits values in ascending key order and short-circuits like
/// the sequential containers.
impl<K: Ord + Clone, V> Traversable for BTreeMap<K, V> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<BTreeMap<K, B>>
    where
        F: FnMut(V) -> Option<B>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            results.insert(key, function(value)?);
        }
        Some(results)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<BTreeMap<K, B>, E>
    where
        F: FnMut(V) -> Result<B, E>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            results.insert(key, function(value)?);
        }
        Ok(results)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

/// Traversing an `Either` visits the `Right` value; a `Left` passes through.
impl<L: Clone, R> Traversable for Either<L, R> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        match self {
            Self::Left(value) => Some(Either::Left(value)),
            Self::Right(element) => function(element).map(Either::Right),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(element) => function(element).map(Either::Right),
        }
    }
}

// =============================================================================
// (W, A) Implementation
// =============================================================================

/// The pair traverses its single element, carrying the first slot through
/// the effect.
impl<W: Clone, A> Traversable for (W, A) {
    fn traverse_option<B, F>(self, mut function: F) -> Option<(W, B)>
    where
        F: FnMut(A) -> Option<B>,
    {
        let (log, element) = self;
        function(element).map(|transformed| (log, transformed))
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<(W, B), E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let (log, element) = self;
        function(element).map(|transformed| (log, transformed))
    }
}
