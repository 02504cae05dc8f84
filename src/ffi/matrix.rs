//! Matrix multiplication entry point.

use tracing::warn;

use crate::error::{AlgoError, AB_INVALID_ARGUMENT, AB_OK};
use crate::ops::{multiply_parallel, multiply_single, Matrix};

/// Multiplies two row-major `f64` matrices into `out`.
///
/// `a` is `a_rows x a_cols`, `b` is `b_rows x b_cols`, and the product is
/// written as `a_rows x b_cols`. With `num_threads == 0` the product is
/// computed on the calling thread; otherwise on a pool of that many workers
/// that is torn down before returning.
///
/// # Safety
/// - `a` must point to `a_rows * a_cols` readable doubles
/// - `b` must point to `b_rows * b_cols` readable doubles
/// - `out` must point to `out_len` writable doubles
///
/// # Returns
/// 0 on success, 1 on a null pointer, zero dimension, inner-dimension
/// mismatch, or `out_len < a_rows * b_cols`. `out` is untouched on failure.
#[no_mangle]
pub unsafe extern "C" fn ab_matrix_multiply(
    a: *const f64,
    a_rows: usize,
    a_cols: usize,
    b: *const f64,
    b_rows: usize,
    b_cols: usize,
    out: *mut f64,
    out_len: usize,
    num_threads: u8,
) -> i32 {
    if a.is_null() || b.is_null() || out.is_null() {
        warn!(op = "ab_matrix_multiply", "null pointer");
        return AB_INVALID_ARGUMENT;
    }

    let (Some(a_len), Some(b_len), Some(needed)) = (
        a_rows.checked_mul(a_cols),
        b_rows.checked_mul(b_cols),
        a_rows.checked_mul(b_cols),
    ) else {
        warn!(op = "ab_matrix_multiply", "dimensions overflow usize");
        return AB_INVALID_ARGUMENT;
    };
    if out_len < needed {
        warn!(op = "ab_matrix_multiply", needed, out_len, "output buffer too small");
        return AB_INVALID_ARGUMENT;
    }

    let result = build_and_multiply(
        std::slice::from_raw_parts(a, a_len),
        (a_rows, a_cols),
        std::slice::from_raw_parts(b, b_len),
        (b_rows, b_cols),
        num_threads,
    );

    match result {
        Ok(product) => {
            let out_slice = std::slice::from_raw_parts_mut(out, product.data().len());
            out_slice.copy_from_slice(product.data());
            AB_OK
        }
        Err(err) => {
            warn!(%err, op = "ab_matrix_multiply", "rejected");
            err.status()
        }
    }
}

fn build_and_multiply(
    a: &[f64],
    (a_rows, a_cols): (usize, usize),
    b: &[f64],
    (b_rows, b_cols): (usize, usize),
    num_threads: u8,
) -> Result<Matrix<f64>, AlgoError> {
    let a = Matrix::new(a, a_rows, a_cols)?;
    let b = Matrix::new(b, b_rows, b_cols)?;
    if num_threads == 0 {
        multiply_single(&a, &b)
    } else {
        multiply_parallel(&a, &b, num_threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::ptr;

    const A: [f64; 6] = [1.0, 0.0, 2.0, -1.0, 3.0, 1.0];
    const B: [f64; 6] = [3.0, 1.0, 2.0, 1.0, 1.0, 0.0];

    #[test]
    fn test_multiply_sequential_and_parallel() {
        for threads in [0u8, 2] {
            let mut out = [0.0f64; 4];
            let status = unsafe {
                ab_matrix_multiply(
                    A.as_ptr(),
                    2,
                    3,
                    B.as_ptr(),
                    3,
                    2,
                    out.as_mut_ptr(),
                    out.len(),
                    threads,
                )
            };
            assert_eq!(status, AB_OK);
            for (got, want) in out.iter().zip([5.0, 1.0, 4.0, 2.0]) {
                assert_relative_eq!(*got, want);
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut out = [9.0f64; 6];
        let status = unsafe {
            ab_matrix_multiply(A.as_ptr(), 3, 2, B.as_ptr(), 3, 2, out.as_mut_ptr(), 6, 0)
        };
        assert_eq!(status, AB_INVALID_ARGUMENT);
        assert!(out.iter().all(|&v| v == 9.0));
    }

    #[test]
    fn test_zero_dimension_and_short_output() {
        let mut out = [0.0f64; 4];
        unsafe {
            assert_eq!(
                ab_matrix_multiply(A.as_ptr(), 0, 3, B.as_ptr(), 3, 2, out.as_mut_ptr(), 4, 0),
                AB_INVALID_ARGUMENT
            );
            assert_eq!(
                ab_matrix_multiply(A.as_ptr(), 2, 3, B.as_ptr(), 3, 2, out.as_mut_ptr(), 3, 0),
                AB_INVALID_ARGUMENT
            );
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        let mut out = [0.0f64; 4];
        unsafe {
            assert_eq!(
                ab_matrix_multiply(ptr::null(), 2, 3, B.as_ptr(), 3, 2, out.as_mut_ptr(), 4, 0),
                AB_INVALID_ARGUMENT
            );
            assert_eq!(
                ab_matrix_multiply(A.as_ptr(), 2, 3, ptr::null(), 3, 2, out.as_mut_ptr(), 4, 0),
                AB_INVALID_ARGUMENT
            );
            assert_eq!(
                ab_matrix_multiply(A.as_ptr(), 2, 3, B.as_ptr(), 3, 2, ptr::null_mut(), 4, 0),
                AB_INVALID_ARGUMENT
            );
        }
    }
}
