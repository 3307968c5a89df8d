// tests/support/helpers.rs
use super::mocks::{FakeSessionVerifier, InMemoryProfileStore, InMemoryStoreProvider};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use private_profile::{
    application::{ports::security::SessionVerifier, services::ApplicationServices},
    domain::profile::ProfileStoreProvider,
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;

pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<InMemoryProfileStore>,
    pub provider: Arc<InMemoryStoreProvider>,
}

pub fn make_test_app(store: InMemoryProfileStore) -> TestApp {
    let store = Arc::new(store);
    let provider = Arc::new(InMemoryStoreProvider::new(Arc::clone(&store)));

    let verifier: Arc<dyn SessionVerifier> = Arc::new(FakeSessionVerifier);
    let stores: Arc<dyn ProfileStoreProvider> = provider.clone();
    let services = Arc::new(ApplicationServices::new(verifier, stores));

    let router = build_router(HttpState { services }, &[]);
    TestApp {
        router,
        store,
        provider,
    }
}

pub fn profile_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("GET")
        .uri("/api/v1/private/profile");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&body_bytes).expect("json body");
    (status, json)
}

/// Assert an error body of the form `{"error": .., "message": ..}`.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
