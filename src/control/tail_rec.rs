//! Stack-safe recursion via an iterative step loop.
//!
//! Rust does not guarantee tail call optimization, so a sequential
//! computation written as a self-recursive `chain` overflows the stack once
//! the chain is long enough. This module provides the loop drivers that run
//! such computations iteratively: the caller supplies a step function that
//! maps the current seed to either a new seed (`Either::Left`, continue) or
//! a final result (`Either::Right`, done), and the driver runs it to
//! completion in constant stack space.
//!
//! [`tail_rec_writer`] additionally threads a monoidal accumulator through
//! the loop, which is how a pair/writer container chains unboundedly without
//! recursion: each step emits a log fragment, and fragments are combined
//! strictly in step order.
//!
//! Neither driver detects non-termination. A step function that never
//! returns `Right` loops forever; that is the caller's contract, not a
//! failure mode of the driver.
//!
//! # Examples
//!
//! ## Counting without stack growth
//!
//! ```rust
//! use kindred::control::{Either, tail_rec};
//!
//! // This would overflow the stack as a self-recursive chain.
//! let result = tail_rec(0u64, |n| {
//!     if n < 100_000 {
//!         Either::Left(n + 1)
//!     } else {
//!         Either::Right(n)
//!     }
//! });
//! assert_eq!(result, 100_000);
//! ```
//!
//! ## Accumulating a log alongside the loop
//!
//! ```rust
//! use kindred::control::{Either, tail_rec_writer};
//!
//! let (log, result): (Vec<u32>, u32) = tail_rec_writer(1, |n| {
//!     if n <= 3 {
//!         (vec![n], Either::Left(n + 1))
//!     } else {
//!         (vec![], Either::Right(n))
//!     }
//! });
//! assert_eq!(log, vec![1, 2, 3]);
//! assert_eq!(result, 4);
//! ```

use crate::typeclass::{Monoid, Semigroup};

use super::either::Either;

/// Runs a step function to completion without consuming call-stack depth.
///
/// Each iteration invokes `step` with the current seed. `Either::Left(seed)`
/// continues the loop with the new seed; `Either::Right(result)` finishes
/// and returns the result. The loop is an explicit iterative construct, so
/// the number of steps is bounded only by time, never by stack space.
///
/// # Arguments
///
/// * `initial` - The seed for the first step
/// * `step` - Maps the current seed to continue-or-done
///
/// # Examples
///
/// ```rust
/// use kindred::control::{Either, tail_rec};
///
/// // Greatest power of two below a limit.
/// let result = tail_rec(1u64, |n| {
///     if n * 2 < 1000 {
///         Either::Left(n * 2)
///     } else {
///         Either::Right(n)
///     }
/// });
/// assert_eq!(result, 512);
/// ```
pub fn tail_rec<S, A, F>(initial: S, mut step: F) -> A
where
    F: FnMut(S) -> Either<S, A>,
{
    let mut seed = initial;
    loop {
        match step(seed) {
            Either::Left(next) => seed = next,
            Either::Right(result) => return result,
        }
    }
}

/// Runs a step function to completion, accumulating a monoidal side value.
///
/// This is the loop a pair/writer container uses to chain unboundedly: each
/// step emits an output alongside its continue-or-done decision, and the
/// outputs are combined with the accumulator's associative operation,
/// strictly in step order, starting from [`Monoid::empty`]. The output of
/// the final (`Right`) step is included.
///
/// Accumulation order is observable whenever the monoid is non-commutative
/// (a log of visited seeds, for instance), so no reordering ever happens.
///
/// # Arguments
///
/// * `initial` - The seed for the first step
/// * `step` - Maps the current seed to an accumulator fragment and
///   continue-or-done
///
/// # Returns
///
/// The accumulated side value paired with the final result.
///
/// # Examples
///
/// ```rust
/// use kindred::control::{Either, tail_rec_writer};
///
/// // Collatz trajectory of 6, recorded as it is walked.
/// let (trajectory, _) = tail_rec_writer(6u64, |n| {
///     if n == 1 {
///         (vec![1], Either::Right(()))
///     } else if n % 2 == 0 {
///         (vec![n], Either::Left(n / 2))
///     } else {
///         (vec![n], Either::Left(3 * n + 1))
///     }
/// });
/// assert_eq!(trajectory, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub fn tail_rec_writer<W, S, A, F>(initial: S, mut step: F) -> (W, A)
where
    W: Monoid,
    F: FnMut(S) -> (W, Either<S, A>),
{
    let mut accumulated = W::empty();
    let mut seed = initial;
    loop {
        let (output, outcome) = step(seed);
        accumulated = accumulated.combine(output);
        match outcome {
            Either::Left(next) => seed = next,
            Either::Right(result) => return (accumulated, result),
        }
    }
}
