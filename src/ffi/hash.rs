//! Hashing entry points.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

use tracing::warn;

use crate::ops::{Algo, AlgoType};

/// Hashes `len` bytes at `data` and writes the textual digest to `out_buf`.
///
/// `algo` is 0 for the std hasher, 1 for BLAKE3. The digest is not
/// NUL-terminated; a BLAKE3 digest is always 64 bytes and a default one at
/// most 20.
///
/// # Safety
/// - `data` must point to `len` readable bytes, or be null when `len` is 0
/// - `out_buf` must point to `out_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error (null pointer, unknown algorithm,
/// or `out_buf` too small).
#[no_mangle]
pub unsafe extern "C" fn ab_hash(
    algo: u8,
    data: *const u8,
    len: usize,
    out_buf: *mut u8,
    out_len: usize,
) -> u64 {
    if out_buf.is_null() || (data.is_null() && len != 0) {
        warn!(op = "ab_hash", "null pointer");
        return 0;
    }

    let kind = match AlgoType::try_from(algo) {
        Ok(kind) => kind,
        Err(err) => {
            warn!(%err, op = "ab_hash", "rejected");
            return 0;
        }
    };

    let input: &[u8] = if len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len)
    };
    let digest = Algo::new(kind).hash(input);

    if digest.len() > out_len {
        warn!(
            op = "ab_hash",
            needed = digest.len(),
            out_len,
            "output buffer too small"
        );
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, digest.len());
    out_slice.copy_from_slice(digest.as_bytes());
    digest.len() as u64
}

/// Returns the static, NUL-terminated name of a hash algorithm code.
///
/// # Returns
/// The name, or null for an unknown code. The pointer must not be freed.
#[no_mangle]
pub extern "C" fn ab_algo_name(algo: u8) -> *const c_char {
    match AlgoType::try_from(algo) {
        Ok(kind) => kind.c_name().as_ptr(),
        Err(_) => ptr::null(),
    }
}

/// Maps a NUL-terminated algorithm name to its code for `ab_hash`.
///
/// Only the exact name "blake3" selects BLAKE3 (1). Any other name, a null
/// pointer, or non-UTF-8 bytes select the default hasher (0).
///
/// # Safety
/// - `name` must be null or point to a NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn ab_algo_from_name(name: *const c_char) -> u8 {
    if name.is_null() {
        return AlgoType::Default.code();
    }
    let name = CStr::from_ptr(name).to_str().unwrap_or_default();
    AlgoType::from_name(name).code()
}
