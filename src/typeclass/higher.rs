//! The kind registry: Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot natively express "a type constructor applied to a type
//! parameter" - there is no way to write a trait over `Option<_>` and
//! `Vec<_>` as shapes rather than as concrete types. This module works
//! around the limitation with Generic Associated Types: a container shape
//! registers itself by implementing one of the registry traits, and generic
//! code recovers "the same shape applied to a different element type"
//! through the `WithType` associated type.
//!
//! The registry has three variants:
//!
//! - [`TypeConstructor`] registers a unary shape `Container<A>`.
//! - [`BiTypeConstructor`] registers a binary shape `Container<E, A>`.
//! - A binary shape with its first argument held constant is registered
//!   through the *unary* registry: `Result<A, E>` implements
//!   [`TypeConstructor`] with `E` fixed, so generic code sees "a container
//!   of `A` whose error slot never changes."
//!
//! [`Indexed`] supplements the registry with one more piece of metadata: the
//! position/key type a container exposes to the `*WithIndex` capabilities
//! (`usize` for `Vec`, the key type for `BTreeMap`, `()` for single-slot
//! shapes).
//!
//! Registration is additive and compile-time only: a shape registers once,
//! nothing is ever removed, and a conflicting second registration is a
//! coherence error rejected by the compiler. None of these traits have any
//! runtime representation.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::TypeConstructor;
//!
//! // "Any container of i32" - the shape itself stays abstract.
//! fn rebind<T: TypeConstructor<Inner = i32>>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = rebind(Some(42));
//! assert_eq!(none_string, None);
//! ```

use std::collections::BTreeMap;

use static_assertions::assert_impl_all;

/// Registers a unary container shape `Container<A>`.
///
/// This trait emulates Higher-Kinded Types using Generic Associated Types.
/// It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, and `Vec<_>`: the implementing type is the shape applied
/// to its current element type, and `WithType<B>` is the same shape applied
/// to `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
///
/// assert_inner::<Option<i32>>();
/// assert_inner::<Vec<i32>>();
/// assert_inner::<Result<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The element type this container shape is currently applied to.
    ///
    /// For `Option<i32>`, this is `i32`.
    type Inner;

    /// The same container shape applied to a different element type `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the rebound type
    /// inside the registry, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// Registers a binary container shape `Container<E, A>`.
///
/// The binary registry keeps *both* slots rebindable: `WithTypes<C, D>` is
/// the same shape with its first slot at `C` and second slot at `D`. This is
/// what [`Bifunctor`](crate::typeclass::Bifunctor) dispatches through.
///
/// A shape may appear in both registries: `Result<T, E>` registers here with
/// both slots free and in [`TypeConstructor`] with the error slot fixed.
/// Slot order follows the success-biased convention used throughout this
/// crate: `First` is the secondary slot (error, left, log) and `Second` is
/// the slot the unary registry calls `Inner`.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::BiTypeConstructor;
///
/// fn assert_slots<T: BiTypeConstructor<First = String, Second = i32>>() {}
///
/// assert_slots::<Result<i32, String>>();
/// assert_slots::<(String, i32)>();
/// ```
pub trait BiTypeConstructor {
    /// The first (secondary) slot: error, left alternative, or log.
    type First;

    /// The second (primary) slot; the unary registry's `Inner`.
    type Second;

    /// The same shape with both slots rebound.
    type WithTypes<C, D>: BiTypeConstructor<First = C, Second = D>;
}

/// Registers the position/key type a container exposes during indexed
/// operations.
///
/// Sequential containers expose their offset (`usize`), keyed containers
/// their key, and single-slot shapes the unit index `()`. The `*WithIndex`
/// capabilities ([`FunctorWithIndex`](crate::typeclass::FunctorWithIndex),
/// [`FoldableWithIndex`](crate::typeclass::FoldableWithIndex), …) pass this
/// index by value as the first argument of the supplied closure.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Indexed;
/// use std::collections::BTreeMap;
///
/// fn assert_index<T: Indexed<Index = usize>>() {}
/// fn assert_key_index<T: Indexed<Index = String>>() {}
///
/// assert_index::<Vec<i32>>();
/// assert_key_index::<BTreeMap<String, i32>>();
/// ```
pub trait Indexed: TypeConstructor {
    /// The position/key type passed to indexed operations.
    type Index;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

impl<K, V> TypeConstructor for BTreeMap<K, V>
where
    K: Ord,
{
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

/// The pair registers as a unary shape with its first slot (the log) fixed,
/// mirroring `Result`'s fixed error slot.
impl<W, A> TypeConstructor for (W, A) {
    type Inner = A;
    type WithType<B> = (W, B);
}

impl<T, E> BiTypeConstructor for Result<T, E> {
    type First = E;
    type Second = T;
    type WithTypes<C, D> = Result<D, C>;
}

impl<W, A> BiTypeConstructor for (W, A) {
    type First = W;
    type Second = A;
    type WithTypes<C, D> = (C, D);
}

impl<A> Indexed for Option<A> {
    type Index = ();
}

impl<T> Indexed for Vec<T> {
    type Index = usize;
}

impl<K, V> Indexed for BTreeMap<K, V>
where
    K: Ord,
{
    type Index = K;
}

// Compile-time registry membership checks.
assert_impl_all!(Option<i32>: TypeConstructor, Indexed);
assert_impl_all!(Vec<i32>: TypeConstructor, Indexed);
assert_impl_all!(Result<i32, String>: TypeConstructor, BiTypeConstructor);
assert_impl_all!(BTreeMap<String, i32>: TypeConstructor, Indexed);
assert_impl_all!((String, i32): TypeConstructor, BiTypeConstructor);
