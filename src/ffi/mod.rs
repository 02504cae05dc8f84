//! C FFI layer for host runtimes.
//!
//! This module exports C ABI functions for use from Node.js loaders, LuaJIT FFI
//! or Python `ctypes`. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`. Declarations live in `include/algo_binding.h`.
//!
//! The actual logic is in the `ops` module. These functions are thin wrappers
//! that handle null checks, pointer-to-slice conversions and status codes.

pub mod arith;
pub mod hash;
pub mod matrix;
pub mod status;

pub use arith::{ab_plus, ab_plus_f64};
pub use hash::{ab_algo_from_name, ab_algo_name, ab_hash};
pub use matrix::ab_matrix_multiply;
pub use status::{ab_init_logging, ab_status_message};
