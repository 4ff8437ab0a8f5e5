//! Derived filtering for nested containers.
//!
//! Filtering `F<G<A>>` needs nothing from the outer layer beyond mapping:
//! the outer shape is preserved exactly, and each inner container filters
//! its own elements. An outer element whose inner container ends up empty
//! stays in place as an empty inner container.
//!
//! The two-way splits (`partition_map`, `partition_with_index`) are derived
//! as two filtering passes over a clone of the outer container, so they
//! require `Clone` on the nested value and apply the routing function twice
//! per element (once per pass).

use crate::control::Either;
use crate::typeclass::{Filterable, FilterableWithIndex, Functor, FunctorWithIndex};

use super::Compose;

impl<FGA> Filterable for Compose<FGA>
where
    FGA: Functor + Clone,
    FGA::Inner: Filterable,
{
    fn filter_map<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Option<B>,
    {
        Compose(self.0.fmap(|inner| inner.filter_map(&mut function)))
    }

    fn partition_map<B, C, F>(self, mut function: F) -> (Self::WithType<B>, Self::WithType<C>)
    where
        F: FnMut(Self::Inner) -> Either<B, C>,
    {
        let lefts = Compose(
            self.0
                .clone()
                .fmap(|inner| inner.filter_map(|element| function(element).left())),
        );
        let rights = Compose(
            self.0
                .fmap(|inner| inner.filter_map(|element| function(element).right())),
        );
        (lefts, rights)
    }
}

impl<FGA> FilterableWithIndex for Compose<FGA>
where
    FGA: FunctorWithIndex + Clone,
    FGA::Inner: FilterableWithIndex,
    FGA::Index: Clone,
{
    fn filter_map_with_index<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Index, Self::Inner) -> Option<B>,
    {
        Compose(self.0.fmap_with_index(|outer_index, inner| {
            inner.filter_map_with_index(|inner_index, element| {
                function((outer_index.clone(), inner_index), element)
            })
        }))
    }

    fn partition_map_with_index<B, C, F>(
        self,
        mut function: F,
    ) -> (Self::WithType<B>, Self::WithType<C>)
    where
        F: FnMut(Self::Index, Self::Inner) -> Either<B, C>,
    {
        let lefts = Compose(self.0.clone().fmap_with_index(|outer_index, inner| {
            inner.filter_map_with_index(|inner_index, element| {
                function((outer_index.clone(), inner_index), element).left()
            })
        }));
        let rights = Compose(self.0.fmap_with_index(|outer_index, inner| {
            inner.filter_map_with_index(|inner_index, element| {
                function((outer_index.clone(), inner_index), element).right()
            })
        }));
        (lefts, rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn filter_map_preserves_outer_shape() {
        let nested = Compose(vec![vec![1, 2, 3], vec![4], vec![]]);
        let evens = nested.filter_map(|n| (n % 2 == 0).then_some(n));
        assert_eq!(evens, Compose(vec![vec![2], vec![4], vec![]]));
    }

    #[rstest]
    fn filter_keeps_empty_inner_containers_in_place() {
        let nested = Compose(vec![Some(1), None, Some(2)]);
        let odds = nested.filter(|n| n % 2 == 1);
        assert_eq!(odds, Compose(vec![Some(1), None, None]));
    }

    #[rstest]
    fn partition_map_routes_through_both_layers() {
        let nested = Compose(vec![vec![1, 2], vec![3, 4]]);
        let (odds, evens) = nested.partition_map(|n| {
            if n % 2 == 0 {
                Either::Right(n)
            } else {
                Either::Left(n)
            }
        });
        assert_eq!(odds, Compose(vec![vec![1], vec![3]]));
        assert_eq!(evens, Compose(vec![vec![2], vec![4]]));
    }

    #[rstest]
    fn filter_with_index_sees_pair_indices() {
        let nested = Compose(vec![vec![10, 20], vec![30, 40]]);
        let diagonal = nested.filter_with_index(|(outer, inner), _| outer == inner);
        assert_eq!(diagonal, Compose(vec![vec![10], vec![40]]));
    }

    #[rstest]
    fn partition_with_index_splits_by_outer_position() {
        let nested = Compose(vec![vec![1, 2], vec![3]]);
        let (excluded, kept) = nested.partition_with_index(|(outer, _), _| *outer == 0);
        assert_eq!(excluded, Compose(vec![vec![], vec![3]]));
        assert_eq!(kept, Compose(vec![vec![1, 2], vec![]]));
    }

    /// Keeping everything recovers the original nested container.
    #[rstest]
    fn filter_map_some_is_identity() {
        let nested = Compose(vec![Some(1), None, Some(3)]);
        assert_eq!(nested.clone().filter_map(Some), nested);
    }
}
