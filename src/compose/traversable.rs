//! Derived traversal for nested containers.
//!
//! Traversing `F<G<A>>` runs the outer traversal with a function that
//! performs the inner traversal, so the two effect layers nest in
//! outer-then-inner order. For order-sensitive effects this means all inner
//! effects of outer-element 0 run before any inner effect of outer-element
//! 1, and the first failure anywhere aborts the remainder of both layers.

use crate::typeclass::{Traversable, TraversableWithIndex};

use super::Compose;

impl<FGA> Traversable for Compose<FGA>
where
    FGA: Traversable,
    FGA::Inner: Traversable,
{
    fn traverse_option<B, F>(self, mut function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>,
    {
        self.0
            .traverse_option(|inner| inner.traverse_option(&mut function))
            .map(Compose)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>,
    {
        self.0
            .traverse_result(|inner| inner.traverse_result(&mut function))
            .map(Compose)
    }
}

impl<FGA> TraversableWithIndex for Compose<FGA>
where
    FGA: TraversableWithIndex,
    FGA::Inner: TraversableWithIndex,
    FGA::Index: Clone,
{
    fn traverse_option_with_index<B, F>(self, mut function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Index, Self::Inner) -> Option<B>,
    {
        self.0
            .traverse_option_with_index(|outer_index, inner| {
                inner.traverse_option_with_index(|inner_index, element| {
                    function((outer_index.clone(), inner_index), element)
                })
            })
            .map(Compose)
    }

    fn traverse_result_with_index<B, E, F>(self, mut function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Index, Self::Inner) -> Result<B, E>,
    {
        self.0
            .traverse_result_with_index(|outer_index, inner| {
                inner.traverse_result_with_index(|inner_index, element| {
                    function((outer_index.clone(), inner_index), element)
                })
            })
            .map(Compose)
    }
}
