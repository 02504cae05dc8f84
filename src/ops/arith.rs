//! Two-argument addition behind `ab_plus` and `ab_plus_f64`.

use tracing::debug;

use crate::error::{AlgoError, Result};

/// Add two `u32` values, failing with `Overflow` past `u32::MAX`.
pub fn plus(a: u32, b: u32) -> Result<u32> {
    debug!(a, b, "plus");
    a.checked_add(b).ok_or_else(|| AlgoError::overflow(a, b))
}

/// Add two doubles.
///
/// NaN and infinite inputs are rejected as `InvalidArgument`; a non-finite sum
/// of finite inputs is reported as `Overflow`.
pub fn plus_f64(a: f64, b: f64) -> Result<f64> {
    debug!(a, b, "plus_f64");
    if !a.is_finite() || !b.is_finite() {
        return Err(AlgoError::invalid(format!(
            "operands must be finite numbers, got {a} and {b}"
        )));
    }

    let sum = a + b;
    if !sum.is_finite() {
        return Err(AlgoError::overflow(a, b));
    }
    Ok(sum)
}
