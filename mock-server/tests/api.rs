use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use robinhood_mock::{app, EchoedRequest};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- known resources ---

#[tokio::test]
async fn accounts_echoes_path() {
    let resp = app().oneshot(get("/accounts/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: EchoedRequest = body_json(resp).await;
    assert_eq!(echoed.method, "GET");
    assert_eq!(echoed.path, "/accounts/");
    assert_eq!(echoed.query, None);
    assert_eq!(echoed.resource.as_deref(), Some("accounts"));
}

#[tokio::test]
async fn chain_echoes_query() {
    let resp = app()
        .oneshot(get("/options/chains?equity_instrument_ids=id-1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: EchoedRequest = body_json(resp).await;
    assert_eq!(echoed.path, "/options/chains");
    assert_eq!(echoed.query.as_deref(), Some("equity_instrument_ids=id-1"));
    assert_eq!(echoed.resource.as_deref(), Some("options/chains"));
}

#[tokio::test]
async fn instruments_double_slash_is_preserved() {
    let resp = app().oneshot(get("/instruments//")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: EchoedRequest = body_json(resp).await;
    assert_eq!(echoed.path, "/instruments//");
    assert_eq!(echoed.resource.as_deref(), Some("instruments"));
}

#[tokio::test]
async fn post_is_echoed_with_method() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/oauth/token/")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: EchoedRequest = body_json(resp).await;
    assert_eq!(echoed.method, "POST");
    assert_eq!(echoed.resource.as_deref(), Some("oauth/token"));
}

// --- unknown resources ---

#[tokio::test]
async fn unknown_resource_returns_404() {
    let resp = app().oneshot(get("/crypto/holdings/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let echoed: EchoedRequest = body_json(resp).await;
    assert_eq!(echoed.resource, None);
}

#[tokio::test]
async fn root_returns_404() {
    let resp = app().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(!body_bytes(resp).await.is_empty());
}
