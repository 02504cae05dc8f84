//! Pure Rust logic behind the exported functions.
//!
//! Nothing here touches raw pointers. The FFI layer in `ffi/` validates
//! arguments, converts them to slices and calls into these modules.

pub mod arith;
pub mod hash;
pub mod matrix;

pub use arith::{plus, plus_f64};
pub use hash::{Algo, AlgoType};
pub use matrix::{multiply_parallel, multiply_single, Matrix};
