//! URL builder for the Robinhood REST API.
//!
//! # Overview
//! Maps a logical resource (accounts, orders, option chains, news, ...) and a
//! few identifying parameters to the fully-qualified URL the brokerage
//! expects. Nothing here performs I/O: the caller hands the URL to whatever
//! HTTP client it already uses.
//!
//! # Design
//! - `Endpoints` is stateless. It holds only `base_url`, which defaults to
//!   [`API_URL`] and can point at a sandbox or a local mock server instead.
//! - Parameters are substituted verbatim. No escaping, no validation, and no
//!   method can fail: an empty identifier yields an empty path segment.
//! - `EndpointCall` describes one call as data so hosts (C callers, JSON test
//!   vectors) can request a URL without binding every method.

pub mod call;
pub mod endpoints;
pub mod error;

pub use call::{parse_expiration_date, AchOption, EndpointCall};
pub use endpoints::{Endpoints, API_URL};
pub use error::EndpointError;
