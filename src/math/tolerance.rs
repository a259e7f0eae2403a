//! Scale-aware tolerances for comparing floating-point products.
//!
//! A fixed absolute epsilon fails both for very large and for very small
//! coordinates. The tolerance here is derived from the squared magnitude of
//! the vectors actually being compared, capped at machine epsilon.

use super::{Vector2, EPSILON};

/// Relative precision used by [`fuzzy_compare`], about 12 significant digits.
const FUZZY_SCALE: f64 = 1e12;

/// Returns `EPSILON * min(1, |u|^2, |v|^2)`.
///
/// `u` and `v` are normally the direction vectors of the two segments. The
/// result is `0` if either vector has zero length.
#[must_use]
pub fn find_tolerance(u: &Vector2, v: &Vector2) -> f64 {
    EPSILON * 1.0_f64.min(u.norm_squared()).min(v.norm_squared())
}

/// Relative comparison of two non-zero values.
///
/// True when `|p1 - p2|` is within roughly 12 significant digits of the
/// smaller magnitude. Always false if either value is zero or NaN.
#[must_use]
pub fn fuzzy_compare(p1: f64, p2: f64) -> bool {
    (p1 - p2).abs() * FUZZY_SCALE <= p1.abs().min(p2.abs())
}

/// Approximate equality that stays correct near zero.
///
/// If both values are non-zero the relative [`fuzzy_compare`] applies.
/// Otherwise at least one value is exactly zero, and the pair is equal only
/// when the larger magnitude is below `zero_tolerance`. This catches the
/// case where one value is an exact zero and the other a tiny residual,
/// which a purely relative comparison can never accept.
///
/// Exactly equal values always compare equal, so a zero tolerance still
/// accepts `0 == 0`. NaN never compares equal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn robust_fuzzy_compare(p1: f64, p2: f64, zero_tolerance: f64) -> bool {
    if p1.is_nan() || p2.is_nan() {
        return false;
    }
    if p1 == p2 {
        return true;
    }
    if p1.abs().min(p2.abs()) > 0.0 {
        return fuzzy_compare(p1, p2);
    }
    p1.abs().max(p2.abs()) < zero_tolerance
}

/// [`robust_fuzzy_compare`] with machine epsilon as the zero tolerance.
#[must_use]
pub fn robust_fuzzy_compare_default(p1: f64, p2: f64) -> bool {
    robust_fuzzy_compare(p1, p2, EPSILON)
}
