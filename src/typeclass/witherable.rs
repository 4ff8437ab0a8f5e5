//! Witherable type class - effectful traversal fused with filtering.
//!
//! `Witherable` combines [`Traversable`](super::Traversable) and
//! [`Filterable`](super::Filterable): `wither` visits each element with an
//! effectful function that may also discard it, in one fused pass. Without
//! the fusion, the same outcome needs two steps - traverse into an effectful
//! container of options, then `compact` - materializing the intermediate
//! container along the way.
//!
//! # Laws
//!
//! ## Fusion equivalence
//!
//! The fused operation must agree with the two-step decomposition:
//!
//! ```text
//! fa.wither_option(f) == fa.traverse_option(f).map(|inner| inner.compact())
//! ```
//!
//! and likewise `wilt` must agree with traverse-then-`separate`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Witherable;
//!
//! // Parse what parses, drop what doesn't - but abort on empty input.
//! let values = vec!["1", "x", "3"];
//! let result: Option<Vec<i32>> = values.wither_option(|s| {
//!     if s.is_empty() { None } else { Some(s.parse().ok()) }
//! });
//! assert_eq!(result, Some(vec![1, 3]));
//! ```

use std::collections::BTreeMap;

use super::filterable::Filterable;
use super::traversable::Traversable;
use crate::control::Either;

/// A type class for containers supporting effectful traversal fused with
/// filtering.
///
/// The effectful function returns the effect (`Option` or `Result`) wrapping
/// a *keep-or-discard* decision: `Some(b)` keeps the transformed element,
/// `None` discards it, and an effect failure aborts the whole pass.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Witherable;
///
/// let values = vec![1, 2, 3, 4];
///
/// // Keep the evens, doubled; the effect never fails here.
/// let kept: Result<Vec<i32>, String> = values.wither_result(|n| {
///     Ok((n % 2 == 0).then_some(n * 2))
/// });
/// assert_eq!(kept, Ok(vec![4, 8]));
/// ```
pub trait Witherable: Filterable + Traversable {
    /// Traverses with an `Option` effect, discarding elements mapped to
    /// `Some(None)` and aborting on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Witherable;
    ///
    /// let values = vec![1, 2, 3];
    /// let evens: Option<Vec<i32>> = values.wither_option(|n| Some((n % 2 == 0).then_some(n)));
    /// assert_eq!(evens, Some(vec![2]));
    /// ```
    fn wither_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<Option<B>>;

    /// Traverses with a `Result` effect, discarding elements mapped to
    /// `Ok(None)` and aborting on the first `Err`.
    fn wither_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<Option<B>, E>;

    /// Traverses with an `Option` effect, splitting elements into
    /// `(lefts, rights)` and aborting on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::typeclass::Witherable;
    ///
    /// let values = vec![1, 2, 3, 4];
    /// let split = values.wilt_option(|n| {
    ///     Some(if n % 2 == 0 { Either::Right(n) } else { Either::Left(n) })
    /// });
    /// assert_eq!(split, Some((vec![1, 3], vec![2, 4])));
    /// ```
    fn wilt_option<B, C, F>(self, function: F) -> Option<(Self::WithType<B>, Self::WithType<C>)>
    where
        F: FnMut(Self::Inner) -> Option<Either<B, C>>;

    /// Traverses with a `Result` effect, splitting elements into
    /// `(lefts, rights)` and aborting on the first `Err`.
    fn wilt_result<B, C, E, F>(
        self,
        function: F,
    ) -> Result<(Self::WithType<B>, Self::WithType<C>), E>
    where
        F: FnMut(Self::Inner) -> Result<Either<B, C>, E>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Witherable for Option<A> {
    fn wither_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<Option<B>>,
    {
        match self {
            None => Some(None),
            Some(element) => function(element),
        }
    }

    fn wither_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<Option<B>, E>,
    {
        match self {
            None => Ok(None),
            Some(element) => function(element),
        }
    }

    fn wilt_option<B, C, F>(self, mut function: F) -> Option<(Option<B>, Option<C>)>
    where
        F: FnMut(A) -> Option<Either<B, C>>,
    {
        match self {
            None => Some((None, None)),
            Some(element) => function(element).map(|either| match either {
                Either::Left(left) => (Some(left), None),
                Either::Right(right) => (None, Some(right)),
            }),
        }
    }

    fn wilt_result<B, C, E, F>(self, mut function: F) -> Result<(Option<B>, Option<C>), E>
    where
        F: FnMut(A) -> Result<Either<B, C>, E>,
    {
        match self {
            None => Ok((None, None)),
            Some(element) => function(element).map(|either| match either {
                Either::Left(left) => (Some(left), None),
                Either::Right(right) => (None, Some(right)),
            }),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Witherable for Vec<T> {
    fn wither_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(T) -> Option<Option<B>>,
    {
        let mut results = Vec::new();
        for element in self {
            if let Some(kept) = function(element)? {
                results.push(kept);
            }
        }
        Some(results)
    }

    fn wither_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(T) -> Result<Option<B>, E>,
    {
        let mut results = Vec::new();
        for element in self {
            if let Some(kept) = function(element)? {
                results.push(kept);
            }
        }
        Ok(results)
    }

    fn wilt_option<B, C, F>(self, mut function: F) -> Option<(Vec<B>, Vec<C>)>
    where
        F: FnMut(T) -> Option<Either<B, C>>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in self {
            match function(element)? {
                Either::Left(left) => lefts.push(left),
                Either::Right(right) => rights.push(right),
            }
        }
        Some((lefts, rights))
    }

    fn wilt_result<B, C, E, F>(self, mut function: F) -> Result<(Vec<B>, Vec<C>), E>
    where
        F: FnMut(T) -> Result<Either<B, C>, E>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in self {
            match function(element)? {
                Either::Left(left) => lefts.push(left),
                Either::Right(right) => rights.push(right),
            }
        }
        Ok((lefts, rights))
    }
}

// =============================================================================
// BTreeMap<K, V> Implementation
// =============================================================================

impl<K: Ord + Clone, V> Witherable for BTreeMap<K, V> {
    fn wither_option<B, F>(self, mut function: F) -> Option<BTreeMap<K, B>>
    where
        F: FnMut(V) -> Option<Option<B>>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            if let Some(kept) = function(value)? {
                results.insert(key, kept);
            }
        }
        Some(results)
    }

    fn wither_result<B, E, F>(self, mut function: F) -> Result<BTreeMap<K, B>, E>
    where
        F: FnMut(V) -> Result<Option<B>, E>,
    {
        let mut results = BTreeMap::new();
        for (key, value) in self {
            if let Some(kept) = function(value)? {
                results.insert(key, kept);
            }
        }
        Ok(results)
    }

    fn wilt_option<B, C, F>(self, mut function: F) -> Option<(BTreeMap<K, B>, BTreeMap<K, C>)>
    where
        F: FnMut(V) -> Option<Either<B, C>>,
    {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, value) in self {
            match function(value)? {
                Either::Left(left) => {
                    lefts.insert(key, left);
                }
                Either::Right(right) => {
                    rights.insert(key, right);
                }
            }
        }
        Some((lefts, rights))
    }

    fn wilt_result<B, C, E, F>(
        self,
        mut function: F,
    ) -> Result<(BTreeMap<K, B>, BTreeMap<K, C>), E>
    where
        F: FnMut(V) -> Result<Either<B, C>, E>,
    {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, value) in self {
            match function(value)? {
                Either::Left(left) => {
                    lefts.insert(key, left);
                }
                Either::Right(right) => {
                    rights.insert(key, right);
                }
            }
        }
        Ok((lefts, rights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Traversable;
    use rstest::rstest;

    #[rstest]
    fn vec_wither_option_keeps_and_drops() {
        let values = vec!["1", "x", "3"];
        let result: Option<Vec<i32>> = values.wither_option(|s| {
            if s.is_empty() {
                None
            } else {
                Some(s.parse().ok())
            }
        });
        assert_eq!(result, Some(vec![1, 3]));
    }

    #[rstest]
    fn vec_wither_option_aborts_on_effect_failure() {
        let values = vec!["1", "", "3"];
        let result: Option<Vec<i32>> = values.wither_option(|s| {
            if s.is_empty() {
                None
            } else {
                Some(s.parse().ok())
            }
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn vec_wither_result_aborts_on_first_error() {
        let values = vec![1, -2, 3];
        let result: Result<Vec<i32>, String> = values.wither_result(|n| {
            if n < 0 {
                Err(format!("negative: {n}"))
            } else {
                Ok((n % 2 == 1).then_some(n))
            }
        });
        assert_eq!(result, Err("negative: -2".to_string()));
    }

    #[rstest]
    fn vec_wilt_option_splits() {
        let values = vec![1, 2, 3, 4];
        let split = values.wilt_option(|n| {
            Some(if n % 2 == 0 {
                Either::Right(n)
            } else {
                Either::Left(n)
            })
        });
        assert_eq!(split, Some((vec![1, 3], vec![2, 4])));
    }

    #[rstest]
    fn option_wither_behaves_like_flatten() {
        assert_eq!(Some(4).wither_option(|n| Some(Some(n * 10))), Some(Some(40)));
        assert_eq!(Some(4).wither_option(|_| Some(None::<i32>)), Some(None));
        assert_eq!(Some(4).wither_option(|_| None::<Option<i32>>), None);
        assert_eq!(None::<i32>.wither_option(|n| Some(Some(n))), Some(None));
    }

    #[rstest]
    fn btreemap_wither_keeps_surviving_keys() {
        let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let result: Option<BTreeMap<&str, i32>> =
            map.wither_option(|value| Some((value % 2 == 1).then_some(value * 10)));
        assert_eq!(result, Some(BTreeMap::from([("a", 10), ("c", 30)])));
    }

    /// Fusion law: wither equals traverse followed by compact.
    #[rstest]
    fn wither_is_traverse_then_compact() {
        let values = vec![1, 2, 3, 4, 5];
        let function = |n: i32| Some((n % 2 == 0).then_some(n * 10));

        let fused: Option<Vec<i32>> = values.clone().wither_option(function);
        let two_step: Option<Vec<i32>> = values
            .traverse_option(function)
            .map(|inner| inner.compact());

        assert_eq!(fused, two_step);
    }

    /// Fusion law for wilt: wilt equals traverse followed by separate.
    #[rstest]
    fn wilt_is_traverse_then_separate() {
        let values = vec![1, 2, 3, 4];
        let function = |n: i32| {
            Some(if n % 2 == 0 {
                Either::Right(n)
            } else {
                Either::Left(n)
            })
        };

        let fused = values.clone().wilt_option(function);
        let two_step = values
            .traverse_option(function)
            .map(|inner| inner.separate());

        assert_eq!(fused, two_step);
    }
}
