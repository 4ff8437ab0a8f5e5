//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents containers
//! whose elements can be reduced (folded) into a single value.
//!
//! # Laws
//!
//! While `Foldable` does not have formal laws as strict as other type
//! classes, implementations should satisfy these properties:
//!
//! ## Empty identity
//!
//! Folding an empty container returns the seed unchanged:
//!
//! ```text
//! empty.fold_left(init, f) == init
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Foldable;
//!
//! // Folding a Vec
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! // Folding an Option
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use std::collections::BTreeMap;

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;
use crate::control::Either;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
///
/// let sum = values.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 15);
///
/// let sum: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes an element and the accumulator,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{}{}", element, accumulator)
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Foldable, Product, Sum};
    ///
    /// let values = vec![1, 2, 3, 4];
    ///
    /// let sum: Sum<i32> = values.clone().fold_map(Sum);
    /// assert_eq!(sum.0, 10);
    ///
    /// let product: Product<i32> = values.fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert!(!Some(5).is_empty());
    /// assert!(None::<i32>.is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert!(values.exists(|element| *element > 3));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` if all elements match (or if the structure is empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6, 8];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    ///
    /// // Empty structure returns true
    /// let empty: Vec<i32> = vec![];
    /// assert!(empty.for_all(|element| *element > 100));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    /// Optimized implementation for Option.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    /// Optimized implementation for Option.
    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    /// Optimized implementation for Result.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_err()
    }

    /// Optimized implementation for Result.
    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    /// Optimized implementation for Vec - returns self.
    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Foldable for Box<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(init, *self)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        function(*self, init)
    }

    /// Box always contains exactly one element.
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    /// Box always contains exactly one element.
    #[inline]
    fn length(&self) -> usize {
        1
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

/// Folds visit values in ascending key order.
impl<K: Ord + Clone, V> Foldable for BTreeMap<K, V> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_values()
            .fold(init, |accumulator, element| function(accumulator, element))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.into_values()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Optimized implementation for BTreeMap.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    /// Optimized implementation for BTreeMap.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

/// Either folds over its `Right` value; `Left` behaves as empty.
impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(init, element),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(element, init),
        }
    }
}

// =============================================================================
// (W, A) Implementation
// =============================================================================

/// The pair folds over its single second-slot element.
impl<W, A> Foldable for (W, A) {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.1)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.1, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_sums() {
        let values = vec![1, 2, 3, 4, 5];
        let sum = values.fold_left(0, |accumulator, element| accumulator + element);
        assert_eq!(sum, 15);
    }

    #[rstest]
    fn vec_fold_right_reverses_association() {
        let values = vec![1, 2, 3];
        let result = values.fold_right(String::new(), |element, accumulator| {
            format!("{element}{accumulator}")
        });
        assert_eq!(result, "123");
    }

    /// Empty-identity: folding an empty container returns exactly the seed.
    #[rstest]
    fn empty_fold_returns_seed() {
        let empty_vec: Vec<i32> = vec![];
        assert_eq!(empty_vec.fold_left(42, |accumulator, element| accumulator + element), 42);

        let none_value: Option<i32> = None;
        assert_eq!(none_value.fold_left(42, |accumulator, element| accumulator + element), 42);

        let err_value: Result<i32, String> = Err("boom".to_string());
        assert_eq!(err_value.fold_left(42, |accumulator, element| accumulator + element), 42);

        let left_value: Either<String, i32> = Either::Left("boom".to_string());
        assert_eq!(left_value.fold_left(42, |accumulator, element| accumulator + element), 42);
    }

    #[rstest]
    fn option_fold_left_applies_once() {
        let some_value = Some(10);
        assert_eq!(some_value.fold_left(5, |accumulator, element| accumulator + element), 15);
    }

    #[rstest]
    fn fold_map_with_monoids() {
        let values = vec![1, 2, 3, 4];
        let sum: Sum<i32> = values.clone().fold_map(Sum);
        let product: Product<i32> = values.fold_map(Product);
        assert_eq!(sum, Sum(10));
        assert_eq!(product, Product(24));
    }

    #[rstest]
    fn fold_map_empty_is_monoid_identity() {
        let empty: Vec<i32> = vec![];
        let sum: Sum<i32> = empty.fold_map(Sum);
        assert_eq!(sum, Sum(0));
    }

    #[rstest]
    fn btreemap_folds_in_key_order() {
        let map = BTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
        assert_eq!(map.to_list(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn derived_queries() {
        let values = vec![1, 2, 3, 4, 5];

        assert!(!Foldable::is_empty(&values));
        assert_eq!(values.length(), 5);
        assert_eq!(values.clone().find(|element| *element > 3), Some(4));
        assert!(values.exists(|element| *element == 5));
        assert!(values.for_all(|element| *element > 0));
    }

    #[rstest]
    fn pair_folds_its_element() {
        let pair = ("log".to_string(), 7);
        assert_eq!(pair.fold_left(1, |accumulator, element| accumulator + element), 8);
    }

    #[rstest]
    fn identity_folds_its_element() {
        assert_eq!(Identity(7).fold_left(1, |accumulator, element| accumulator + element), 8);
        assert_eq!(
            Identity(7).fold_right(1, |element, accumulator| element - accumulator),
            6
        );
    }
}
