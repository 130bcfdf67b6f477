#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use comics_core::types::ComicId;
use comics_db::error::GatewayError;
use comics_db::models::comics::{Comics, CreateComics};
use comics_db::repositories::{ComicsGateway, MemoryComicsRepo};
use http_body_util::BodyExt;
use tower::ServiceExt;

use comics_api::config::{ServerConfig, StorageBackend};
use comics_api::router::build_app_router;
use comics_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router around the given gateway.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(comics: Arc<dyn ComicsGateway>) -> Router {
    build_test_app_with_config(comics, test_config())
}

pub fn build_test_app_with_config(comics: Arc<dyn ComicsGateway>, config: ServerConfig) -> Router {
    let state = AppState {
        comics,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router backed by a fresh, empty in-memory gateway.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryComicsRepo::new()))
}

// ---------------------------------------------------------------------------
// Gateway stubs
// ---------------------------------------------------------------------------

/// Gateway whose every operation fails with a storage error.
pub struct FailingGateway;

#[async_trait]
impl ComicsGateway for FailingGateway {
    async fn list(&self) -> Result<Vec<Comics>, GatewayError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get_by_id(&self, _id: ComicId) -> Result<Comics, GatewayError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _input: &CreateComics) -> Result<Comics, GatewayError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update_price(&self, _id: ComicId, _price: u64) -> Result<(), GatewayError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: ComicId) -> Result<(), GatewayError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Gateway that panics on `list`; everything else is unreachable in tests.
pub struct PanickingGateway;

#[async_trait]
impl ComicsGateway for PanickingGateway {
    async fn list(&self) -> Result<Vec<Comics>, GatewayError> {
        panic!("gateway exploded");
    }

    async fn get_by_id(&self, _id: ComicId) -> Result<Comics, GatewayError> {
        unimplemented!()
    }

    async fn create(&self, _input: &CreateComics) -> Result<Comics, GatewayError> {
        unimplemented!()
    }

    async fn update_price(&self, _id: ComicId, _price: u64) -> Result<(), GatewayError> {
        unimplemented!()
    }

    async fn delete(&self, _id: ComicId) -> Result<(), GatewayError> {
        unimplemented!()
    }
}

/// Gateway whose `list` outlives any sane request timeout.
pub struct StalledGateway;

#[async_trait]
impl ComicsGateway for StalledGateway {
    async fn list(&self) -> Result<Vec<Comics>, GatewayError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: ComicId) -> Result<Comics, GatewayError> {
        unimplemented!()
    }

    async fn create(&self, _input: &CreateComics) -> Result<Comics, GatewayError> {
        unimplemented!()
    }

    async fn update_price(&self, _id: ComicId, _price: u64) -> Result<(), GatewayError> {
        unimplemented!()
    }

    async fn delete(&self, _id: ComicId) -> Result<(), GatewayError> {
        unimplemented!()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, Some("application/json"), body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, Some("application/json"), body.to_string()).await
}

/// Send an arbitrary body, optionally without a `Content-Type` header.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard error object and return it.
pub async fn assert_error_body(
    response: Response<Body>,
    code: &str,
    kind: &str,
) -> serde_json::Value {
    let json = body_json(response).await;
    assert_eq!(json["error"], code, "unexpected error body: {json}");
    assert_eq!(json["type"], kind, "unexpected error body: {json}");
    assert!(
        json["description"].as_str().is_some_and(|d| !d.is_empty()),
        "description should be a non-empty string: {json}"
    );
    json
}
