mod common;

use axum::http::{HeaderValue, StatusCode, header};
use std::sync::Arc;

use common::{InMemoryUrlRepository, access_token, create_test_server};

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(InMemoryUrlRepository::with_records(&[(
        "abc123",
        "https://a.com/page?q=1",
    )]));
    let server = create_test_server(repo);

    let response = server
        .get("/url/abc123")
        .authorization_bearer(access_token())
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://a.com/page?q=1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = create_test_server(Arc::new(InMemoryUrlRepository::default()));

    let response = server
        .get("/url/missing")
        .authorization_bearer(access_token())
        .await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_requires_token() {
    let repo = Arc::new(InMemoryUrlRepository::with_records(&[(
        "abc123",
        "https://a.com",
    )]));
    let server = create_test_server(repo);

    let response = server.get("/url/abc123").await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let repo = Arc::new(InMemoryUrlRepository::with_records(&[(
        "abc123",
        "https://a.com",
    )]));
    let server = create_test_server(repo);

    let value = HeaderValue::from_str(&format!("bearer {}", access_token())).unwrap();
    let response = server
        .get("/url/abc123")
        .add_header(header::AUTHORIZATION, value)
        .await;

    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_with_unrepresentable_target_is_500() {
    let repo = Arc::new(InMemoryUrlRepository::with_records(&[(
        "newl",
        "https://a.com/x\ny",
    )]));
    let server = create_test_server(repo);

    let response = server
        .get("/url/newl")
        .authorization_bearer(access_token())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::LOCATION).is_none());
}
