//! Mathematical constants

/// π as a double, bit-identical to C's `M_PI`.
pub const PI: f64 = std::f64::consts::PI;

/// Returns π
#[inline]
pub const fn pi() -> f64 {
    PI
}
