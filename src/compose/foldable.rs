//! Derived folds for nested containers.
//!
//! Folding `F<G<A>>` folds the outer container, folding each inner container
//! into the running accumulator as it is reached. Elements are therefore
//! visited in outer-major order, and the indexed fold receives `(outer,
//! inner)` index pairs in exactly that order.

use crate::typeclass::{Foldable, FoldableWithIndex};

use super::Compose;

impl<FGA> Foldable for Compose<FGA>
where
    FGA: Foldable,
    FGA::Inner: Foldable,
{
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
    {
        self.0.fold_left(init, |accumulator, inner| {
            inner.fold_left(accumulator, &mut function)
        })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B,
    {
        self.0.fold_right(init, |inner, accumulator| {
            inner.fold_right(accumulator, &mut function)
        })
    }
}

impl<FGA> FoldableWithIndex for Compose<FGA>
where
    FGA: FoldableWithIndex,
    FGA::Inner: FoldableWithIndex,
    FGA::Index: Clone,
{
    fn fold_left_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, Self::Index, Self::Inner) -> B,
    {
        self.0
            .fold_left_with_index(init, |accumulator, outer_index, inner| {
                inner.fold_left_with_index(accumulator, |accumulator, inner_index, element| {
                    function(accumulator, (outer_index.clone(), inner_index), element)
                })
            })
    }

    fn fold_right_with_index<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(Self::Index, Self::Inner, B) -> B,
    {
        self.0
            .fold_right_with_index(init, |outer_index, inner, accumulator| {
                inner.fold_right_with_index(accumulator, |inner_index, element, accumulator| {
                    function((outer_index.clone(), inner_index), element, accumulator)
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fold_left_visits_outer_major() {
        let nested = Compose(vec![vec![1, 2], vec![3], vec![]]);
        let collected = nested.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn fold_right_reverses_the_visit_order() {
        let nested = Compose(vec![vec![1, 2], vec![3]]);
        let collected = nested.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[rstest]
    fn empty_outer_returns_seed() {
        let nested: Compose<Vec<Vec<i32>>> = Compose(vec![]);
        assert_eq!(nested.fold_left(42, |accumulator, element| accumulator + element), 42);
    }

    #[rstest]
    fn to_list_flattens() {
        let nested = Compose(vec![Some(1), None, Some(3)]);
        assert_eq!(nested.to_list(), vec![1, 3]);
    }

    /// The composed index is the (outer, inner) pair, in outer-major,
    /// inner-minor order.
    #[rstest]
    fn indexed_fold_yields_pairs_in_order() {
        let nested = Compose(vec![vec![10, 20], vec![30, 40]]);
        let indices = nested.fold_left_with_index(Vec::new(), |mut accumulator, index, _| {
            accumulator.push(index);
            accumulator
        });
        assert_eq!(indices, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[rstest]
    fn indexed_fold_pairs_outer_key_with_inner_offset() {
        use std::collections::BTreeMap;

        let nested = Compose(BTreeMap::from([("a", vec![1, 2]), ("b", vec![3])]));
        let entries = nested.fold_left_with_index(Vec::new(), |mut accumulator, index, element| {
            accumulator.push((index, element));
            accumulator
        });
        assert_eq!(entries, vec![(("a", 0), 1), (("a", 1), 2), (("b", 0), 3)]);
    }

    #[rstest]
    fn indexed_fold_right_reverses_pairs() {
        let nested = Compose(vec![vec![10, 20], vec![30]]);
        let indices = nested.fold_right_with_index(Vec::new(), |index, _, mut accumulator| {
            accumulator.push(index);
            accumulator
        });
        assert_eq!(indices, vec![(1, 0), (0, 1), (0, 0)]);
    }
}
