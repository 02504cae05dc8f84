//! Error type shared by the ops layer and its mapping to C status codes.

use std::ffi::CStr;

use thiserror::Error;

/// Status code returned by successful `ab_*` calls.
pub const AB_OK: i32 = 0;
/// Status code for [`AlgoError::InvalidArgument`].
pub const AB_INVALID_ARGUMENT: i32 = 1;
/// Status code for [`AlgoError::Overflow`].
pub const AB_OVERFLOW: i32 = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("overflow: {lhs} + {rhs} is not representable")]
    Overflow { lhs: String, rhs: String },
}

impl AlgoError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AlgoError::InvalidArgument(message.into())
    }

    pub fn overflow(lhs: impl ToString, rhs: impl ToString) -> Self {
        AlgoError::Overflow {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// The C status code for this error.
    pub fn status(&self) -> i32 {
        match self {
            AlgoError::InvalidArgument(_) => AB_INVALID_ARGUMENT,
            AlgoError::Overflow { .. } => AB_OVERFLOW,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;

/// Static description of a status code.
pub fn status_message(code: i32) -> &'static CStr {
    match code {
        AB_OK => c"ok",
        AB_INVALID_ARGUMENT => c"invalid argument",
        AB_OVERFLOW => c"overflow",
        _ => c"unknown status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AlgoError::invalid("x").status(), AB_INVALID_ARGUMENT);
        assert_eq!(AlgoError::overflow(1u32, 2u32).status(), AB_OVERFLOW);
    }

    #[test]
    fn test_display() {
        let err = AlgoError::overflow(u32::MAX, 1u32);
        assert_eq!(
            err.to_string(),
            "overflow: 4294967295 + 1 is not representable"
        );
        assert_eq!(
            AlgoError::invalid("null output pointer").to_string(),
            "invalid argument: null output pointer"
        );
    }

    #[test]
    fn test_status_message() {
        for code in [AB_OK, AB_INVALID_ARGUMENT, AB_OVERFLOW, 42] {
            assert_eq!(status_message(code).to_bytes_with_nul().last(), Some(&0));
        }
        assert_eq!(status_message(AB_OVERFLOW), c"overflow");
        assert_eq!(status_message(42).to_str(), Ok("unknown status"));
    }
}
