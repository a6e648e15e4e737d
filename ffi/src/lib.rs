//! C-ABI wrapper around `robinhood-endpoints`.
//!
//! # Overview
//! Exposes every endpoint through `extern "C"` functions so any language with
//! a C FFI can build Robinhood URLs without linking serde or chrono directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - One `rh_url_*` function per endpoint mirrors the core API 1:1. Optional
//!   parameters accept null for their default; a null required parameter
//!   yields a null URL.
//! - Input C strings are decoded lossily. URLs are never rejected for their
//!   content, matching the core builder.
//! - The C caller owns all returned pointers and must release them with
//!   `rh_free_string` or `rh_free_result`.

pub mod types;

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, UnwindSafe};

use robinhood_endpoints::{parse_expiration_date, EndpointCall, Endpoints};

use types::*;

/// Borrow a C string as UTF-8, replacing invalid sequences. Null maps to `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn c_str<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
    }
}

/// Run `f` against the builder behind `endpoints` and hand the URL to C.
///
/// Returns null if `endpoints` is null, if `f` returns `None`, or on panic.
fn build_url<F>(endpoints: *const FfiEndpoints, f: F) -> *mut c_char
where
    F: FnOnce(&Endpoints) -> Option<String> + UnwindSafe,
{
    catch_unwind(|| {
        if endpoints.is_null() {
            return std::ptr::null_mut();
        }
        let endpoints = unsafe { &*endpoints };
        f(&endpoints.inner).map_or(std::ptr::null_mut(), into_c_string)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Builder lifecycle
// ---------------------------------------------------------------------------

/// Create an endpoint builder bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `rh_endpoints_free`.
#[unsafe(no_mangle)]
pub extern "C" fn rh_endpoints_new(base_url: *const c_char) -> *mut FfiEndpoints {
    catch_unwind(|| {
        let Some(url) = (unsafe { c_str(base_url) }) else {
            return std::ptr::null_mut();
        };
        let inner = Endpoints::new(&url);
        Box::into_raw(Box::new(FfiEndpoints { inner }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create an endpoint builder bound to the production API address.
///
/// The caller must free the returned pointer with `rh_endpoints_free`.
#[unsafe(no_mangle)]
pub extern "C" fn rh_endpoints_production() -> *mut FfiEndpoints {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiEndpoints {
            inner: Endpoints::production(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a builder created by `rh_endpoints_new` or `rh_endpoints_production`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_endpoints_free(endpoints: *mut FfiEndpoints) {
    if !endpoints.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(endpoints) });
        });
    }
}

// ---------------------------------------------------------------------------
// Fixed endpoints
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_login(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.login()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_logout(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.logout()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_accounts(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.accounts()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_applications(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.applications()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_dividends(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.dividends()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_margin_upgrades(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.margin_upgrades()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_markets(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.markets()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_notifications(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.notifications()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_password_reset(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.password_reset()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_portfolios(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.portfolios()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_positions(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.positions()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_quotes(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.quotes()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_historicals(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.historicals()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_document_requests(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.document_requests()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_user(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.user()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_watchlists(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.watchlists()))
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_convert_token(endpoints: *const FfiEndpoints) -> *mut c_char {
    build_url(endpoints, |e| Some(e.convert_token()))
}

// ---------------------------------------------------------------------------
// Parameterized endpoints
// ---------------------------------------------------------------------------

/// ACH endpoint. A null `option` selects the IAV auth endpoint.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_ach(endpoints: *const FfiEndpoints, option: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| {
        let option = unsafe { c_str(option) };
        Some(e.ach(option.as_deref()))
    })
}

/// Instruments endpoint. Null `instrument_id` or `option` become empty segments.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_instruments(
    endpoints: *const FfiEndpoints,
    instrument_id: *const c_char,
    option: *const c_char,
) -> *mut c_char {
    build_url(endpoints, |e| {
        let instrument_id = unsafe { c_str(instrument_id) };
        let option = unsafe { c_str(option) };
        Some(e.instruments(instrument_id.as_deref(), option.as_deref()))
    })
}

/// Orders endpoint. A null `order_id` lists all orders.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_orders(endpoints: *const FfiEndpoints, order_id: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| {
        let order_id = unsafe { c_str(order_id) };
        Some(e.orders(order_id.as_deref()))
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn rh_url_tags(endpoints: *const FfiEndpoints, tag: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| {
        let tag = unsafe { c_str(tag) };
        Some(e.tags(tag.as_deref()))
    })
}

/// News endpoint. Returns null if `stock` is null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_news(endpoints: *const FfiEndpoints, stock: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| unsafe { c_str(stock) }.map(|stock| e.news(&stock)))
}

/// Fundamentals endpoint. Returns null if `stock` is null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_fundamentals(endpoints: *const FfiEndpoints, stock: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| unsafe { c_str(stock) }.map(|stock| e.fundamentals(&stock)))
}

/// Options chain endpoint. Returns null if `instrument_id` is null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_chain(endpoints: *const FfiEndpoints, instrument_id: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| {
        unsafe { c_str(instrument_id) }.map(|instrument_id| e.chain(&instrument_id))
    })
}

/// Option instruments endpoint. `expiration_date` must be `YYYY-MM-DD`.
///
/// Returns null if any argument is null or the date does not parse.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_options(
    endpoints: *const FfiEndpoints,
    chain_id: *const c_char,
    expiration_date: *const c_char,
    option_type: *const c_char,
) -> *mut c_char {
    build_url(endpoints, |e| {
        let chain_id = unsafe { c_str(chain_id) }?;
        let expiration_date = unsafe { c_str(expiration_date) }?;
        let option_type = unsafe { c_str(option_type) }?;
        let date = parse_expiration_date(&expiration_date).ok()?;
        Some(e.options(&chain_id, date, &option_type))
    })
}

/// Option market data endpoint. Returns null if `option_id` is null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_market_data(endpoints: *const FfiEndpoints, option_id: *const c_char) -> *mut c_char {
    build_url(endpoints, |e| unsafe { c_str(option_id) }.map(|option_id| e.market_data(&option_id)))
}

// ---------------------------------------------------------------------------
// Calls described as JSON
// ---------------------------------------------------------------------------

/// Build the URL for a JSON call description such as
/// `{"endpoint":"orders","order_id":"abc123"}`.
///
/// Always returns a result; inspect `error_code` before reading `url`.
#[unsafe(no_mangle)]
pub extern "C" fn rh_url_for_json(endpoints: *const FfiEndpoints, json: *const c_char) -> *mut FfiUrlResult {
    catch_unwind(|| {
        if endpoints.is_null() {
            return FfiUrlResult::null_arg("endpoints");
        }
        let Some(json) = (unsafe { c_str(json) }) else {
            return FfiUrlResult::null_arg("json");
        };
        let endpoints = unsafe { &*endpoints };
        match EndpointCall::from_json(&json) {
            Ok(call) => FfiUrlResult::ok(endpoints.inner.url_for(&call)),
            Err(e) => FfiUrlResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiUrlResult::panic("panic in rh_url_for_json"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiUrlResult` returned by `rh_url_for_json`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_free_result(result: *mut FfiUrlResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.url.is_null() {
            drop(unsafe { CString::from_raw(result.url) });
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rh_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
