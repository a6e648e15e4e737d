//! Error types for the endpoint builder.
//!
//! Building a URL never fails. Errors only arise when a call is described as
//! data (JSON, C strings) and that description cannot be decoded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EndpointError {
    /// The JSON description did not match any `EndpointCall` variant.
    #[error("invalid endpoint call: {0}")]
    InvalidCall(String),

    /// An expiration date was not in `YYYY-MM-DD` form.
    #[error("invalid expiration date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}
