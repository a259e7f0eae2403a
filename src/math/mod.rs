pub mod tolerance;

pub use tolerance::{
    find_tolerance, fuzzy_compare, robust_fuzzy_compare, robust_fuzzy_compare_default,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Machine epsilon for `f64`, the base unit of every tolerance in the crate.
pub const EPSILON: f64 = f64::EPSILON;

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Exponent `e` with `2^e <= |magnitude| < 2^(e + 1)`, read from the bit
/// pattern.
///
/// Zero and non-finite values have no meaningful exponent and give `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn binary_exponent(magnitude: f64) -> i32 {
    let bits = magnitude.abs().to_bits();
    if magnitude.is_normal() {
        (bits >> 52) as i32 - 1023
    } else if magnitude.is_subnormal() {
        63 - bits.leading_zeros() as i32 - 1074
    } else {
        0
    }
}

/// Computes `x * 2^exponent`.
///
/// The factor is applied in two halves so that neither half overflows for
/// exponents across the whole `f64` range. The result is exact whenever it
/// is a normal number.
#[must_use]
pub fn scale_by_power_of_two(x: f64, exponent: i32) -> f64 {
    let half = exponent / 2;
    x * 2.0_f64.powi(half) * 2.0_f64.powi(exponent - half)
}

/// Returns a point with both coordinates set to NaN.
///
/// Callers use it to pre-fill an output slot so that an untouched slot is
/// recognisable afterwards.
#[must_use]
pub fn nan_point() -> Point2 {
    Point2::new(f64::NAN, f64::NAN)
}
