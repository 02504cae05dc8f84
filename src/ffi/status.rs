//! Status descriptions and logging setup.

use std::os::raw::c_char;

use crate::error::{self, AB_OK};
use crate::logging;

/// Returns a static, NUL-terminated description of a status code.
/// The pointer must not be freed.
#[no_mangle]
pub extern "C" fn ab_status_message(code: i32) -> *const c_char {
    error::status_message(code).as_ptr()
}

/// Installs a stderr log subscriber. `verbose != 0` enables debug events.
///
/// Safe to call more than once; later calls are no-ops.
///
/// # Returns
/// Always 0.
#[no_mangle]
pub extern "C" fn ab_init_logging(verbose: u8) -> i32 {
    logging::init(verbose != 0);
    AB_OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AB_INVALID_ARGUMENT, AB_OVERFLOW};
    use std::ffi::CStr;

    #[test]
    fn test_status_message() {
        fn msg(code: i32) -> &'static str {
            let text = unsafe { CStr::from_ptr(ab_status_message(code)) };
            text.to_str().unwrap()
        }
        assert_eq!(msg(AB_OK), "ok");
        assert_eq!(msg(AB_INVALID_ARGUMENT), "invalid argument");
        assert_eq!(msg(AB_OVERFLOW), "overflow");
        assert_eq!(msg(-5), "unknown status");
    }

    #[test]
    fn test_init_logging_repeatable() {
        assert_eq!(ab_init_logging(1), AB_OK);
        assert_eq!(ab_init_logging(0), AB_OK);
    }
}
