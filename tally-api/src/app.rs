//! Application state and router builder.
//!
//! `AppState` carries the two process-wide resources: the database pool,
//! created once at startup and injected here rather than reached through a
//! global, and the parsed configuration. Axum clones it per request;
//! cloning is cheap (`PgPool` is an Arc internally, `Config` is wrapped in
//! one).
//!
//! # Example
//!
//! ```no_run
//! use tally_api::{app::{build_router, AppState}, config::Config};
//! use sqlx::PgPool;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let pool = PgPool::connect(&config.database.url).await?;
//! let app = build_router(AppState::new(pool, config));
//! # Ok(())
//! # }
//! ```

use crate::routes;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;

/// Shared application state, cloned for each request handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router
///
/// # Routes
///
/// ```text
/// GET  /                               liveness text
/// POST /signup                         create user + personal account
/// POST /login                          issue bearer token
/// GET  /users/:id                      user display name
/// POST /add-expense                    record an expense
/// GET  /accounts/current/:user_id      accounts administered by a user
/// GET  /accounts/:account_id/expenses  expenses on an account
/// ```
///
/// No route demands authentication: callers are identified by the ids they
/// pass, validated for format only. Middleware stack is request tracing
/// plus CORS (any origin, GET/POST/PUT/DELETE, credentials allowed).
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(routes::root::root))
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login))
        .route("/users/:id", get(routes::users::get_user))
        .route("/add-expense", post(routes::expenses::add_expense))
        .route(
            "/accounts/current/:user_id",
            get(routes::accounts::current_accounts),
        )
        .route(
            "/accounts/:account_id/expenses",
            get(routes::accounts::account_expenses),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
