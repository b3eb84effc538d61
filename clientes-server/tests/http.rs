//! Router-level tests that don't need a reachable database.
//!
//! The pool is lazy, so validation paths and the generic-500 mapping can
//! be exercised by pointing it at a port nothing listens on.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tower::util::ServiceExt;

use clientes_server::http::{build_router, AppState};

/// Router backed by a pool that can never connect.
fn unreachable_app() -> Router {
    let options = MySqlConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nada");

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(options);

    build_router(AppState { pool })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let response = unreachable_app()
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let response = unreachable_app()
        .oneshot(empty_request("GET", "/clientes/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn non_positive_id_is_400() {
    let response = unreachable_app()
        .oneshot(empty_request("DELETE", "/clientes/0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_missing_email_is_400() {
    let response = unreachable_app()
        .oneshot(json_request(
            "POST",
            "/clientes",
            serde_json::json!({"nome": "Ana"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn post_empty_nome_is_400() {
    let response = unreachable_app()
        .oneshot(json_request(
            "POST",
            "/clientes",
            serde_json::json!({"nome": "", "email": "ana@x.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_empty_body_is_400() {
    let response = unreachable_app()
        .oneshot(json_request("PATCH", "/clientes/1", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_unknown_field_is_400() {
    let response = unreachable_app()
        .oneshot(json_request(
            "PATCH",
            "/clientes/1",
            serde_json::json!({"cliente_id": "7"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn unreachable_database_is_generic_500() {
    let response = unreachable_app()
        .oneshot(empty_request("GET", "/clientes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "erro interno no servidor");
    // Driver text must never reach the caller
    assert!(!body.to_string().to_lowercase().contains("refused"));
}
