//! Factorial
//!
//! Two flavours of `n!` over `i64`:
//!
//! - [`factorial`] never fails. Inputs below two pass through unchanged
//!   (except `0`, whose factorial is `1`) and results past `20!` wrap
//!   modulo 2^64, matching fixed-width C arithmetic.
//! - [`checked_factorial`] only accepts `0..=MAX_EXACT_INPUT` and reports
//!   everything else as a [`FactorialError`].

use thiserror::Error;

/// Largest input whose factorial fits in an `i64`.
pub const MAX_EXACT_INPUT: i64 = 20;

/// Errors reported by [`checked_factorial`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FactorialError {
    /// Factorial is undefined for negative integers.
    #[error("factorial of negative number {n} is undefined")]
    Negative {
        /// The rejected input.
        n: i64,
    },

    /// The exact result does not fit in 64 bits.
    #[error("factorial of {n} overflows a 64-bit integer (max input is {max})", max = MAX_EXACT_INPUT)]
    Overflow {
        /// The rejected input.
        n: i64,
    },
}

/// Factorial with wrapping overflow
///
/// Returns `n` for `n <= 1` (and `1` for `n == 0`), otherwise the product
/// `n * (n - 1) * ... * 2` computed with wrapping multiplication.
///
/// The wrapped product becomes zero once it has collected 64 factors of
/// two, which happens at `66!`, so the loop finishes after at most 65
/// multiplications whatever the input.
#[inline]
pub const fn factorial(n: i64) -> i64 {
    if n == 0 {
        return 1;
    }
    if n <= 1 {
        return n;
    }

    let mut acc: i64 = 1;
    let mut k: i64 = 2;
    while k <= n {
        acc = acc.wrapping_mul(k);
        if acc == 0 {
            break;
        }
        k += 1;
    }
    acc
}

/// Factorial that rejects inputs without an exact `i64` result
///
/// # Errors
///
/// - [`FactorialError::Negative`] if `n < 0`
/// - [`FactorialError::Overflow`] if `n > MAX_EXACT_INPUT`
pub fn checked_factorial(n: i64) -> Result<i64, FactorialError> {
    if n < 0 {
        tracing::debug!(n, "rejecting negative factorial input");
        return Err(FactorialError::Negative { n });
    }

    let mut acc: i64 = 1;
    for k in 2..=n {
        acc = match acc.checked_mul(k) {
            Some(v) => v,
            None => {
                tracing::debug!(n, "factorial input exceeds exact range");
                return Err(FactorialError::Overflow { n });
            }
        };
    }
    Ok(acc)
}
