//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! URLs cross the boundary as owned `*mut c_char`. The JSON entry point also
//! needs to report why a description was rejected, so it returns a tagged
//! `FfiUrlResult` envelope instead of a bare string. Conversion helpers live
//! here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use robinhood_endpoints::EndpointError;

/// Opaque handle to an `Endpoints` builder. C callers receive a pointer to
/// this and pass it back into every `rh_url_*` function.
pub struct FfiEndpoints {
    pub(crate) inner: robinhood_endpoints::Endpoints,
}

/// Move a Rust string into a heap-allocated C string.
///
/// Returns null if `s` contains an interior NUL byte.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Error codes returned in `FfiUrlResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidCall = 1,
    InvalidDate = 2,
    InteriorNul = 3,
    Panic = 4,
    NullArg = 5,
}

/// Result envelope for `rh_url_for_json`.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `url` holds
/// the endpoint URL. On failure `url` is null and `error_message` is a
/// human-readable C string.
#[repr(C)]
pub struct FfiUrlResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub url: *mut c_char,
}

impl FfiUrlResult {
    fn boxed(error_code: FfiErrorCode, error_message: *mut c_char, url: *mut c_char) -> *mut Self {
        Box::into_raw(Box::new(FfiUrlResult {
            error_code,
            error_message,
            url,
        }))
    }

    fn error(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        let message = CString::new(msg).unwrap_or_default().into_raw();
        Self::boxed(error_code, message, std::ptr::null_mut())
    }

    /// Build a success result carrying `url`.
    pub(crate) fn ok(url: String) -> *mut Self {
        match CString::new(url) {
            Ok(url) => Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), url.into_raw()),
            Err(_) => Self::error(FfiErrorCode::InteriorNul, "url contains a NUL byte"),
        }
    }

    /// Build an error result from an `EndpointError`.
    pub(crate) fn from_error(err: EndpointError) -> *mut Self {
        let code = match &err {
            EndpointError::InvalidCall(_) => FfiErrorCode::InvalidCall,
            EndpointError::InvalidDate { .. } => FfiErrorCode::InvalidDate,
        };
        Self::error(code, &err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, msg)
    }
}
