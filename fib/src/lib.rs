// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Fibonacci numbers.
//!
//! The sequence is seeded `fib(0) = 0`, `fib(1) = 1`, so that `fib(2) = 1` and
//! `fib(n) = fib(n - 1) + fib(n - 2)` for every `n >= 2`. Values are computed
//! iteratively in `u64`, which holds every term up to [`MAX_INDEX`].

#![cfg_attr(not(test), no_std)]

use core::fmt;
use core::iter::FusedIterator;

/// The largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: i64 = 93;

/// Reasons an index has no `u64` Fibonacci number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FibError {
    /// The index was negative. Fibonacci numbers are only defined for `n >= 0`.
    Negative(i64),
    /// The Fibonacci number at this index does not fit in a `u64`.
    Overflow(i64),
}

impl fmt::Display for FibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibError::Negative(n) => write!(f, "index must be non-negative, got {n}"),
            FibError::Overflow(n) => {
                write!(f, "fib({n}) overflows u64 (largest index is {MAX_INDEX})")
            }
        }
    }
}

impl core::error::Error for FibError {}

/// Returns the `n`-th Fibonacci number.
///
/// # Errors
///
/// Returns [`FibError::Negative`] if `n < 0`, and [`FibError::Overflow`] if `n > MAX_INDEX`.
///
/// # Examples
///
/// ```
/// assert_eq!(fib::fib(7), Ok(13));
/// assert!(fib::fib(-10).is_err());
/// ```
pub fn fib(n: i64) -> Result<u64, FibError> {
    if n < 0 {
        log::trace!("rejecting negative fibonacci index {n}");
        return Err(FibError::Negative(n));
    }

    usize::try_from(n)
        .ok()
        .and_then(|idx| Fib::new().nth(idx))
        .ok_or(FibError::Overflow(n))
}

/// Iterator over the Fibonacci sequence, starting at `fib(0)`.
///
/// Yields `fib(0)` through `fib(MAX_INDEX)` and then stops; `fib(MAX_INDEX + 1)` does not fit in a `u64`.
#[derive(Debug, Clone)]
pub struct Fib {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fib {
    /// Creates an iterator positioned at `fib(0)`.
    pub const fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fib {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fib {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|next| out.checked_add(next));
        Some(out)
    }
}

impl FusedIterator for Fib {}
