//! Control structures for functional programming.
//!
//! This module provides the control-flow half of the crate:
//!
//! - [`Either`]: A value that can be one of two types (the recursion
//!   scheme's step result and the partition split target)
//! - [`tail_rec`] / [`tail_rec_writer`]: Stack-safe recursion drivers
//!
//! # Examples
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use kindred::control::{Either, tail_rec};
//!
//! fn digits(n: u64) -> u32 {
//!     tail_rec((n, 1), |(remaining, count)| {
//!         if remaining < 10 {
//!             Either::Right(count)
//!         } else {
//!             Either::Left((remaining / 10, count + 1))
//!         }
//!     })
//! }
//!
//! assert_eq!(digits(9), 1);
//! assert_eq!(digits(1234), 4);
//! ```

mod either;
mod tail_rec;

pub use either::Either;
pub use tail_rec::{tail_rec, tail_rec_writer};
