//! # kindred
//!
//! Container capability traits for Rust: emulated higher-kinded types,
//! indexed/filterable/traversable containers, nested-container composition,
//! and stack-safe recursion.
//!
//! ## Overview
//!
//! Rust's type system cannot quantify over "a type constructor applied to a
//! type parameter" directly. This library provides the cross-cutting
//! machinery that lets one algorithm be written once and reused against many
//! different containers anyway:
//!
//! - **Kind registry**: the [`typeclass::TypeConstructor`],
//!   [`typeclass::BiTypeConstructor`], and [`typeclass::Indexed`] traits,
//!   which register a container shape (and its index type) through Generic
//!   Associated Types. Pure compile-time metadata with no runtime footprint.
//! - **Capability traits**: Functor, Contravariant, Foldable, Filterable,
//!   Traversable, Witherable, and the indexed variants of each - a trait impl
//!   is the capability record a container supplies to claim the capability.
//! - **Composition**: the [`compose::Compose`] newtype, which mechanically
//!   derives every capability for a nested container `Outer<Inner<_>>` from
//!   the two layers' own impls.
//! - **Stack-safe recursion**: [`control::tail_rec`] and
//!   [`control::tail_rec_writer`], iterative drivers for unbounded sequential
//!   computation that would otherwise overflow the call stack.
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! // One algorithm, many containers: traverse short-circuits on the first
//! // failure for any Traversable container.
//! let parsed: Option<Vec<i32>> = vec!["1", "2", "3"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! // Nested containers compose: a Vec of Options folds as one container.
//! let nested = Compose(vec![Some(1), None, Some(3)]);
//! assert_eq!(nested.fold_left(0, |total, n| total + n), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod control;
pub mod typeclass;
