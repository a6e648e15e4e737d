//! Verify every endpoint against the JSON vectors in `test-vectors/`.
//!
//! Each case pairs an `EndpointCall` description with the path expected after
//! the base URL. Cases run against both the production base and a custom one.

use robinhood_endpoints::{EndpointCall, Endpoints, API_URL};

fn cases() -> Vec<(String, EndpointCall, String)> {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|case| {
            let name = case["name"].as_str().unwrap().to_string();
            let call: EndpointCall = serde_json::from_value(case["call"].clone())
                .unwrap_or_else(|e| panic!("{name}: bad call: {e}"));
            let path = case["path"].as_str().unwrap().to_string();
            (name, call, path)
        })
        .collect()
}

#[test]
fn production_vectors() {
    let e = Endpoints::production();
    for (name, call, path) in cases() {
        assert_eq!(e.url_for(&call), format!("{API_URL}{path}"), "{name}");
    }
}

#[test]
fn custom_base_vectors() {
    let e = Endpoints::new("http://localhost:3000");
    for (name, call, path) in cases() {
        assert_eq!(e.url_for(&call), format!("http://localhost:3000{path}"), "{name}");
    }
}

#[test]
fn every_url_starts_with_base() {
    let e = Endpoints::production();
    for (name, call, _) in cases() {
        assert!(e.url_for(&call).starts_with(API_URL), "{name}");
    }
}

#[test]
fn vectors_cover_every_endpoint() {
    let mut seen: Vec<String> = cases()
        .into_iter()
        .map(|(_, call, _)| serde_json::to_value(&call).unwrap()["endpoint"].as_str().unwrap().to_string())
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 26);
}
