//! Bifunctor type class - mapping over both slots of a binary container.
//!
//! This module provides the `Bifunctor` trait, the capability that consumes
//! the binary kind registry ([`BiTypeConstructor`](super::BiTypeConstructor)):
//! while `Functor` transforms the single rebindable slot of a unary shape,
//! `Bifunctor` transforms both slots of a binary one.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let mapped = left.bimap(|x| x * 2, |s: String| s.len());
//! assert_eq!(mapped, Either::Left(84));
//!
//! let tuple = (42, "hello".to_string());
//! assert_eq!(tuple.bimap(|x| x * 2, |s| s.len()), (84, 5));
//! ```
//!
//! # Slot Order for Result
//!
//! `Result<T, E>` registers with `First = E` and `Second = T`, so `first`
//! transforms the error (like `map_err`) and `second` transforms the success
//! value (like `map`), consistent with `Functor::fmap` operating on the
//! success slot.

use super::higher::BiTypeConstructor;
use crate::control::Either;

/// A type class for binary containers that can have functions mapped over
/// both slots.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Bifunctor;
///
/// let result: Result<i32, String> = Ok(42);
/// assert_eq!(result.second(|x| x * 2), Ok(84));
///
/// let error: Result<i32, String> = Err("boom".to_string());
/// assert_eq!(error.first(|e| e.len()), Err(4));
/// ```
pub trait Bifunctor: BiTypeConstructor {
    /// Applies two functions to the two slots simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// let result = tuple.bimap(|x| x * 2, |s| s.len());
    /// assert_eq!(result, (84, 5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::WithTypes<C, D>
    where
        F: FnMut(Self::First) -> C,
        G: FnMut(Self::Second) -> D;

    /// Applies a function to the first slot only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// assert_eq!(either.first(|x| x.to_string()), Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::WithTypes<C, Self::Second>
    where
        F: FnMut(Self::First) -> C,
        Self: Sized,
    {
        self.bimap(function, |second| second)
    }

    /// Applies a function to the second slot only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(either.second(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::WithTypes<Self::First, D>
    where
        G: FnMut(Self::Second) -> D,
        Self: Sized,
    {
        self.bimap(|first| first, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Bifunctor for Either<L, R> {
    fn bimap<C, D, F, G>(self, mut first_function: F, mut second_function: G) -> Either<C, D>
    where
        F: FnMut(L) -> C,
        G: FnMut(R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Bifunctor for Result<T, E> {
    fn bimap<C, D, F, G>(self, mut first_function: F, mut second_function: G) -> Result<D, C>
    where
        F: FnMut(E) -> C,
        G: FnMut(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

// =============================================================================
// (A, B) Implementation
// =============================================================================

impl<A, B> Bifunctor for (A, B) {
    fn bimap<C, D, F, G>(self, mut first_function: F, mut second_function: G) -> (C, D)
    where
        F: FnMut(A) -> C,
        G: FnMut(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_bimap_is_side_specific() {
        let left: Either<i32, String> = Either::Left(42);
        assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));

        let right: Either<i32, String> = Either::Right("hello".to_string());
        assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    }

    #[rstest]
    fn result_first_maps_error() {
        let error: Result<i32, String> = Err("boom".to_string());
        assert_eq!(error.first(|e| e.len()), Err(4));

        let ok: Result<i32, String> = Ok(1);
        assert_eq!(ok.first(|e| e.len()), Ok(1));
    }

    #[rstest]
    fn result_second_maps_success() {
        let ok: Result<i32, String> = Ok(21);
        assert_eq!(ok.second(|x| x * 2), Ok(42));
    }

    #[rstest]
    fn tuple_bimap_maps_both() {
        let tuple = (42, "hello".to_string());
        assert_eq!(tuple.bimap(|x| x * 2, |s| s.len()), (84, 5));
    }

    /// Identity law: bimap with identities returns an equivalent value.
    #[rstest]
    fn identity_law() {
        let either: Either<i32, String> = Either::Right("hello".to_string());
        assert_eq!(either.clone().bimap(|x| x, |y| y), either);

        let tuple = (1, "a");
        assert_eq!(tuple.bimap(|x| x, |y| y), tuple);
    }

    /// Composition law.
    #[rstest]
    fn composition_law() {
        let tuple = (2, 3);
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;

        let stepwise = tuple.bimap(add_one, double).bimap(double, add_one);
        let composed = tuple.bimap(|x| double(add_one(x)), |y| add_one(double(y)));
        assert_eq!(stepwise, composed);
    }

    /// first/second consistency law.
    #[rstest]
    fn first_second_consistency_law() {
        let tuple = (2, 3);
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;

        assert_eq!(tuple.bimap(add_one, double), tuple.first(add_one).second(double));
    }
}
