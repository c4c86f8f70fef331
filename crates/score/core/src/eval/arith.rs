//! Floating-point boundary of the evaluators.
//!
//! Every formula is integer arithmetic with truncating division except the two
//! square roots (habitability and Alternate Reality resources). Both go through
//! [`sqrt_trunc`] so the rounding rule lives in one place.

/// Square root truncated toward zero.
///
/// Non-positive and NaN inputs yield 0.
pub fn sqrt_trunc(value: f64) -> i64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.sqrt().trunc() as i64
}
