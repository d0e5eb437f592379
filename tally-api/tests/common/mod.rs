//! Common test utilities for integration tests.
//!
//! Two tiers of context:
//!
//! - [`lazy_app`]: a router over a lazily-connected pool. Requests that must
//!   fail *before* any store access (identifier-format checks) can run
//!   against it without a database; a handler that did touch the store would
//!   error instead of returning the expected 400.
//! - [`TestContext`]: full setup against a live PostgreSQL (`DATABASE_URL`),
//!   with migrations applied. Tests using it are `#[ignore]`-gated.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use sqlx::PgPool;
use tally_api::app::{build_router, AppState};
use tally_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use tower::ServiceExt as _;
use uuid::Uuid;

/// JWT secret shared by the test app and token assertions
pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Builds a Config without touching the environment
pub fn test_config(database_url: &str) -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// Router over a pool that never connects unless a handler queries it
pub fn lazy_app() -> axum::Router {
    let config = test_config("postgresql://localhost:1/unreachable");
    let pool = PgPool::connect_lazy(&config.database.url).expect("lazy pool");
    build_router(AppState::new(pool, config))
}

/// Test context backed by a live database
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Connects to `DATABASE_URL`, applies migrations, builds the router
    pub async fn new() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for database tests"))?;

        let db = PgPool::connect(&database_url).await?;
        sqlx::migrate!("../tally-shared/migrations").run(&db).await?;

        let config = test_config(&database_url);
        let app = build_router(AppState::new(db.clone(), config.clone()));

        Ok(Self { db, app, config })
    }
}

/// Unique email per test run so suites can re-run against the same database
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Sends a GET request to the router
pub async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Sends a POST request with a JSON body to the router
pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Collects a response body as a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collects a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts status and returns the body as a string
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> String {
    let actual = response.status();
    let body = body_string(response).await;
    assert_eq!(actual, status, "unexpected status, body: {}", body);
    body
}
