//! Composition combinators for nested containers.
//!
//! Given a capability for an outer shape `F<_>` and the same capability for
//! an inner shape `G<_>`, the capability for the nested shape `F<G<_>>` is
//! mechanically derivable: no knowledge of what `F` or `G` concretely are is
//! needed, only their own operations. The [`Compose`] newtype performs that
//! derivation - wrapping a nested value in `Compose` *is* the composition
//! call, and the derived capability is the blanket trait impl.
//!
//! Derived capabilities and their layer requirements:
//!
//! | capability on `Compose<F<G<_>>>` | outer `F` needs | inner `G` needs |
//! |---|---|---|
//! | `Functor` | `Functor` | `Functor` |
//! | `FunctorWithIndex` | `FunctorWithIndex` | `FunctorWithIndex` |
//! | `Foldable` | `Foldable` | `Foldable` |
//! | `FoldableWithIndex` | `FoldableWithIndex` | `FoldableWithIndex` |
//! | `Filterable` | `Functor + Clone` | `Filterable` |
//! | `FilterableWithIndex` | `FunctorWithIndex + Clone` | `FilterableWithIndex` |
//! | `Traversable` | `Traversable` | `Traversable` |
//! | `TraversableWithIndex` | `TraversableWithIndex` | `TraversableWithIndex` |
//!
//! Indexed capabilities use the pair index `(outer, inner)`, always in
//! outer-then-inner order, and every derived operation visits elements in
//! outer-major order: all of outer-element 0's inner elements before any of
//! outer-element 1's. Effect ordering during composed traversal follows the
//! same rule.
//!
//! Because every derived operation is defined purely in terms of the two
//! layers' own operations, composition is associative: re-associating a
//! triple-nested container changes only the wrapper bookkeeping, never the
//! observable output.
//!
//! # Examples
//!
//! ```rust
//! use kindred::compose::Compose;
//! use kindred::typeclass::{Foldable, Functor};
//!
//! // A Vec of Options, treated as one container of i32.
//! let nested = Compose(vec![Some(1), None, Some(3)]);
//!
//! let doubled = nested.clone().fmap(|n| n * 2);
//! assert_eq!(doubled, Compose(vec![Some(2), None, Some(6)]));
//!
//! assert_eq!(nested.fold_left(0, |total, n| total + n), 4);
//! ```

mod foldable;
mod filterable;
mod traversable;

use crate::typeclass::{Functor, FunctorWithIndex, Indexed, TypeConstructor};

/// A nested container `F<G<A>>` treated as a single container of `A`.
///
/// Wrapping in `Compose` derives each capability of the nested shape from
/// the capabilities of its two layers. The wrapper owns no state beyond the
/// nested value itself; `into_inner` recovers it.
///
/// # Examples
///
/// ```rust
/// use kindred::compose::Compose;
/// use kindred::typeclass::Functor;
///
/// let nested = Compose(vec![vec![1, 2], vec![3]]);
/// let incremented = nested.fmap(|n| n + 1);
/// assert_eq!(incremented.into_inner(), vec![vec![2, 3], vec![4]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Compose<FGA>(pub FGA);

impl<FGA> Compose<FGA> {
    /// Wraps a nested container.
    #[inline]
    pub const fn new(nested: FGA) -> Self {
        Self(nested)
    }

    /// Consumes the wrapper and returns the nested container.
    #[inline]
    pub fn into_inner(self) -> FGA {
        self.0
    }

    /// Returns a reference to the nested container.
    #[inline]
    pub const fn as_inner(&self) -> &FGA {
        &self.0
    }
}

// =============================================================================
// Kind Registry
// =============================================================================

/// The nested shape is itself a registered unary shape: rebinding the
/// element type rebinds through both layers.
impl<FGA> TypeConstructor for Compose<FGA>
where
    FGA: TypeConstructor,
    FGA::Inner: TypeConstructor,
{
    type Inner = <FGA::Inner as TypeConstructor>::Inner;
    type WithType<B> = Compose<FGA::WithType<<FGA::Inner as TypeConstructor>::WithType<B>>>;
}

/// The composed index is the pair `(outer, inner)`, outer first. This order
/// is part of the contract and not configurable.
impl<FGA> Indexed for Compose<FGA>
where
    FGA: Indexed,
    FGA::Inner: Indexed,
{
    type Index = (FGA::Index, <FGA::Inner as Indexed>::Index);
}

// =============================================================================
// Functor
// =============================================================================

/// Mapping the nested container is the outer map applied with the inner map.
impl<FGA> Functor for Compose<FGA>
where
    FGA: Functor,
    FGA::Inner: Functor,
{
    fn fmap<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        Compose(self.0.fmap(|inner| inner.fmap(&mut function)))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B,
    {
        Compose(self.0.fmap_ref(|inner| inner.fmap_ref(&mut function)))
    }
}

// =============================================================================
// FunctorWithIndex
// =============================================================================

impl<FGA> FunctorWithIndex for Compose<FGA>
where
    FGA: FunctorWithIndex,
    FGA::Inner: FunctorWithIndex,
    FGA::Index: Clone,
{
    fn fmap_with_index<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Index, Self::Inner) -> B,
    {
        Compose(self.0.fmap_with_index(|outer_index, inner| {
            inner.fmap_with_index(|inner_index, element| {
                function((outer_index.clone(), inner_index), element)
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_reaches_through_both_layers() {
        let nested = Compose(vec![Some(1), None, Some(3)]);
        let doubled = nested.fmap(|n| n * 2);
        assert_eq!(doubled, Compose(vec![Some(2), None, Some(6)]));
    }

    #[rstest]
    fn fmap_ref_keeps_original() {
        let nested = Compose(vec![vec!["a".to_string()], vec!["bc".to_string()]]);
        let lengths = nested.fmap_ref(|s| s.len());
        assert_eq!(lengths, Compose(vec![vec![1], vec![2]]));
        assert_eq!(nested.as_inner().len(), 2);
    }

    #[rstest]
    fn fmap_with_index_passes_index_pairs() {
        let nested = Compose(vec![vec![10, 20], vec![30]]);
        let labeled = nested.fmap_with_index(|(outer, inner), element| {
            format!("{outer}{inner}:{element}")
        });
        assert_eq!(
            labeled,
            Compose(vec![
                vec!["00:10".to_string(), "01:20".to_string()],
                vec!["10:30".to_string()]
            ])
        );
    }

    /// Identity law holds for the derived functor.
    #[rstest]
    fn derived_functor_identity_law() {
        let nested = Compose(vec![Some(1), None, Some(3)]);
        assert_eq!(nested.clone().fmap(|x| x), nested);
    }

    /// Composition law holds for the derived functor.
    #[rstest]
    fn derived_functor_composition_law() {
        let nested = Compose(vec![Some(1), None, Some(3)]);
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;

        let stepwise = nested.clone().fmap(add_one).fmap(double);
        let composed = nested.fmap(|x| double(add_one(x)));
        assert_eq!(stepwise, composed);
    }

    /// Triple nesting works through repeated wrapping.
    #[rstest]
    fn triple_nesting_maps() {
        let nested: Compose<Compose<Vec<Option<Vec<i32>>>>> =
            Compose(Compose(vec![Some(vec![1, 2]), None]));
        let doubled = nested.fmap(|n| n * 2);
        assert_eq!(doubled, Compose(Compose(vec![Some(vec![2, 4]), None])));
    }
}
