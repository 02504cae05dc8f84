//! Addition entry points.

use tracing::warn;

use crate::error::{AlgoError, AB_INVALID_ARGUMENT, AB_OK};
use crate::ops;

/// # Safety
/// `out` must be non-null and writable.
unsafe fn write_result<T>(out: *mut T, result: Result<T, AlgoError>, op: &str) -> i32 {
    match result {
        Ok(sum) => {
            out.write(sum);
            AB_OK
        }
        Err(err) => {
            warn!(%err, op, "rejected");
            err.status()
        }
    }
}

/// Adds two unsigned 32-bit integers and stores the sum in `*out`.
///
/// # Safety
/// - `out` must be null or point to writable memory for one `u32`
///
/// # Returns
/// 0 on success, 1 if `out` is null, 2 if the sum exceeds `u32::MAX`.
/// `*out` is left untouched on failure.
#[no_mangle]
pub unsafe extern "C" fn ab_plus(a: u32, b: u32, out: *mut u32) -> i32 {
    if out.is_null() {
        warn!(op = "ab_plus", "null output pointer");
        return AB_INVALID_ARGUMENT;
    }
    write_result(out, ops::plus(a, b), "ab_plus")
}

/// Adds two doubles and stores the sum in `*out`.
///
/// # Safety
/// - `out` must be null or point to writable memory for one `f64`
///
/// # Returns
/// 0 on success, 1 if `out` is null or an operand is NaN/infinite,
/// 2 if the sum is not finite.
#[no_mangle]
pub unsafe extern "C" fn ab_plus_f64(a: f64, b: f64, out: *mut f64) -> i32 {
    if out.is_null() {
        warn!(op = "ab_plus_f64", "null output pointer");
        return AB_INVALID_ARGUMENT;
    }
    write_result(out, ops::plus_f64(a, b), "ab_plus_f64")
}
