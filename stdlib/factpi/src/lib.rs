//! factpi - Factorial and pi for foreign callers
//!
//! This crate provides two pure numeric primitives and exposes them to
//! code written in other languages through the C ABI.
//!
//! # Overview
//!
//! - [`factorial`]: `n!` over `i64` with wrapping overflow, plus a checked
//!   variant that rejects inputs without an exact result
//! - [`constants`]: the double-precision value of π
//! - [`ffi`]: the `extern "C"` entry points
//!
//! # FFI Conventions
//!
//! All FFI-exported functions follow these conventions:
//! - Use `#[no_mangle]` and `extern "C"` for C ABI
//! - `fact` and `pi` keep the symbol names of the C library they replace,
//!   so existing callers link unchanged
//! - Fallible exports return a [`FactStatus`] code and write results
//!   through out-parameters
//! - No export panics, so nothing unwinds across the boundary
//!
//! The matching C declarations live in `include/factpi.h`.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod constants;
pub mod factorial;
pub mod ffi;

pub use constants::{pi, PI};
pub use factorial::{checked_factorial, factorial, FactorialError, MAX_EXACT_INPUT};

/// Status codes for fallible FFI operations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactStatus {
    /// Operation succeeded
    Ok = 0,
    /// Null pointer passed where non-null expected
    NullPointer = 1,
    /// Negative input
    Negative = 2,
    /// Result does not fit in a signed 64-bit integer
    Overflow = 3,
}

impl From<FactorialError> for FactStatus {
    fn from(err: FactorialError) -> Self {
        match err {
            FactorialError::Negative { .. } => FactStatus::Negative,
            FactorialError::Overflow { .. } => FactStatus::Overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_error() {
        assert_eq!(
            FactStatus::from(FactorialError::Negative { n: -3 }),
            FactStatus::Negative
        );
        assert_eq!(
            FactStatus::from(FactorialError::Overflow { n: 21 }),
            FactStatus::Overflow
        );
    }

    #[test]
    fn test_status_discriminants() {
        // Values are part of the C header and must not drift
        assert_eq!(FactStatus::Ok as i32, 0);
        assert_eq!(FactStatus::NullPointer as i32, 1);
        assert_eq!(FactStatus::Negative as i32, 2);
        assert_eq!(FactStatus::Overflow as i32, 3);
    }
}
