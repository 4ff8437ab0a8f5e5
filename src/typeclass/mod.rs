//! Capability traits for container shapes.
//!
//! This module provides the kind registry and the capability traits built on
//! it. A container shape registers through the registry traits and claims a
//! capability by implementing the matching trait; generic algorithms are
//! written once against the trait and dispatch through the impl supplied at
//! the call site.
//!
//! ## Kind Registry
//!
//! - [`TypeConstructor`]: unary shapes (`Option<_>`, `Vec<_>`)
//! - [`BiTypeConstructor`]: binary shapes (`Result<_, _>`, `Either<_, _>`)
//! - [`Indexed`]: the position/key type a shape exposes to indexed
//!   operations
//!
//! ## Capabilities
//!
//! - [`Functor`]: Mapping over container values
//! - [`Contravariant`]: Mapping over container *inputs*
//! - [`FunctorWithIndex`]: Mapping with element positions
//! - [`Foldable`] / [`FoldableWithIndex`]: Collapsing to a summary value
//! - [`Filterable`] / [`FilterableWithIndex`]: Keeping, discarding, splitting
//! - [`Traversable`] / [`TraversableWithIndex`]: Effectful traversal
//! - [`Witherable`]: Traversal fused with filtering
//! - [`Bifunctor`]: Mapping over both slots of a binary shape
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! ## Foundation Types
//!
//! - [`Identity`]: The simplest registered shape
//! - [`Sum`], [`Product`]: Numeric wrappers selecting a monoid
//! - [`Predicate`], [`Comparison`]: Consumer shapes for `Contravariant`
//!
//! # Examples
//!
//! ## One algorithm, many containers
//!
//! ```rust
//! use kindred::typeclass::{Foldable, Monoid, Semigroup};
//!
//! // Written once against Foldable ...
//! fn concat_all<F>(container: F) -> String
//! where
//!     F: Foldable<Inner = String>,
//! {
//!     container.fold_left(String::empty(), Semigroup::combine)
//! }
//!
//! // ... used with any container claiming the capability.
//! assert_eq!(concat_all(vec!["a".to_string(), "b".to_string()]), "ab");
//! assert_eq!(concat_all(Some("only".to_string())), "only");
//! assert_eq!(concat_all(None::<String>), "");
//! ```

mod bifunctor;
mod contravariant;
mod filterable;
mod filterable_with_index;
mod foldable;
mod foldable_with_index;
mod functor;
mod functor_with_index;
mod higher;
mod identity;
mod monoid;
mod semigroup;
mod traversable;
mod traversable_with_index;
mod witherable;
mod wrappers;

pub use bifunctor::Bifunctor;
pub use contravariant::{Comparison, Contravariant, Predicate};
pub use filterable::Filterable;
pub use filterable_with_index::FilterableWithIndex;
pub use foldable::Foldable;
pub use foldable_with_index::FoldableWithIndex;
pub use functor::Functor;
pub use functor_with_index::FunctorWithIndex;
pub use higher::{BiTypeConstructor, Indexed, TypeConstructor};
pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use traversable_with_index::TraversableWithIndex;
pub use witherable::Witherable;
pub use wrappers::{Product, Sum};
