//! Local stand-in for the Robinhood REST API.
//!
//! Answers every request by echoing what it received, so tests can check the
//! exact path and query a URL produced on the wire. Paths outside the known
//! Robinhood resources answer 404.

use axum::{
    http::{Method, StatusCode, Uri},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Resource prefixes served by the real API, most specific first.
const RESOURCES: &[&str] = &[
    "oauth/token",
    "oauth2/migrate_token",
    "user",
    "accounts",
    "ach",
    "applications",
    "dividends",
    "instruments",
    "margin/upgrades",
    "markets",
    "notifications",
    "orders",
    "password_reset/request",
    "portfolios",
    "positions",
    "quotes",
    "historicals",
    "document_requests",
    "watchlists",
    "midlands/news",
    "midlands/tags",
    "fundamentals",
    "options/chains",
    "options/instruments",
    "marketdata/options",
];

/// What the mock saw for one request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub resource: Option<String>,
}

pub fn app() -> Router {
    Router::new().fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The known resource `path` belongs to, if any.
pub fn resource_for(path: &str) -> Option<&'static str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    RESOURCES.iter().copied().find(|resource| {
        rest.strip_prefix(resource)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
    })
}

async fn echo(method: Method, uri: Uri) -> (StatusCode, Json<EchoedRequest>) {
    let resource = resource_for(uri.path());
    let echoed = EchoedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        resource: resource.map(str::to_string),
    };
    let status = if resource.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    tracing::debug!(%method, path = %echoed.path, query = ?echoed.query, status = status.as_u16(), "request");
    (status, Json(echoed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_for_single_segment() {
        assert_eq!(resource_for("/accounts/"), Some("accounts"));
        assert_eq!(resource_for("/orders/abc123"), Some("orders"));
        assert_eq!(resource_for("/orders/"), Some("orders"));
    }

    #[test]
    fn resource_for_nested_resources() {
        assert_eq!(resource_for("/midlands/news/AAPL"), Some("midlands/news"));
        assert_eq!(resource_for("/options/instruments/"), Some("options/instruments"));
        assert_eq!(resource_for("/options/chains"), Some("options/chains"));
        assert_eq!(resource_for("/user/investment_profile/"), Some("user"));
    }

    #[test]
    fn resource_for_keeps_empty_segments() {
        assert_eq!(resource_for("/instruments//"), Some("instruments"));
    }

    #[test]
    fn resource_for_requires_segment_boundary() {
        assert_eq!(resource_for("/userdata/"), None);
        assert_eq!(resource_for("/options/"), None);
        assert_eq!(resource_for("/"), None);
    }

    #[test]
    fn echoed_request_serializes_to_json() {
        let echoed = EchoedRequest {
            method: "GET".to_string(),
            path: "/options/chains".to_string(),
            query: Some("equity_instrument_ids=id-1".to_string()),
            resource: Some("options/chains".to_string()),
        };
        let json = serde_json::to_value(&echoed).unwrap();
        assert_eq!(json["path"], "/options/chains");
        assert_eq!(json["query"], "equity_instrument_ids=id-1");
        assert_eq!(json["resource"], "options/chains");
    }
}
