//! C ABI entry points
//!
//! These are the symbols foreign callers link against. They are thin
//! wrappers over [`crate::factorial`] and [`crate::constants`].
//!
//! # Calling Convention
//!
//! All functions use the C calling convention and are `no_mangle` to
//! ensure stable symbol names for linking. `fact` and `pi` take the
//! names and signatures of the original C library:
//!
//! ```c
//! long long fact(long long n);
//! double pi(void);
//! ```

use std::ffi::{c_double, c_longlong};

use crate::factorial::{checked_factorial, factorial};
use crate::FactStatus;

/// Factorial with wrapping overflow
///
/// Negative inputs are returned unchanged and results past `20!` wrap.
/// Never fails and never panics.
#[no_mangle]
pub extern "C" fn fact(n: c_longlong) -> c_longlong {
    factorial(n)
}

/// The double-precision value of π
#[no_mangle]
pub extern "C" fn pi() -> c_double {
    crate::constants::PI
}

/// Exact factorial with range checking
///
/// On success writes `n!` to `*out` and returns [`FactStatus::Ok`].
/// Otherwise returns [`FactStatus::Negative`] or [`FactStatus::Overflow`]
/// and leaves `*out` untouched.
///
/// # Safety
///
/// `out` must be null or valid for writing one `long long`.
#[no_mangle]
pub unsafe extern "C" fn fact_checked(n: c_longlong, out: *mut c_longlong) -> FactStatus {
    if out.is_null() {
        tracing::warn!(n, "fact_checked called with null output pointer");
        return FactStatus::NullPointer;
    }

    match checked_factorial(n) {
        Ok(value) => {
            // SAFETY: non-null and writable per the caller contract
            unsafe { out.write(value) };
            FactStatus::Ok
        }
        Err(err) => err.into(),
    }
}
