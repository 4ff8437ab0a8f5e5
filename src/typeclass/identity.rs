//! Identity wrapper type - the simplest registered container shape.
//!
//! This module provides the `Identity` type, which is the simplest possible
//! wrapper around a value. It serves as:
//!
//! - The degenerate single-slot container: every covariant capability has a
//!   trivial instance for it
//! - A simple model for testing capability laws
//! - The inner layer that makes a composed container behave like its outer
//!   layer alone

use super::TypeConstructor;

/// The identity container - wraps a value without adding any structure.
///
/// `Identity` is the simplest possible type constructor. It wraps a single
/// value and provides no additional behavior, which makes it the base case
/// for capability-law testing: any law that fails for `Identity` fails for
/// everything.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> super::Indexed for Identity<A> {
    type Index = ();
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner_roundtrip() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    fn as_inner_borrows() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped, Identity(42));
    }

    #[test]
    fn identity_is_registered() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }
}
