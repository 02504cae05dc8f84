//! Algo Binding - native arithmetic, hashing and matrix routines
//!
//! This library provides a C ABI so that host runtimes can call into Rust
//! synchronously. Every exported function is pure: no state survives a call.

pub mod error;
pub mod ffi;
pub mod logging;
pub mod ops;

pub use error::{AlgoError, Result, AB_INVALID_ARGUMENT, AB_OK, AB_OVERFLOW};
pub use ffi::*;
