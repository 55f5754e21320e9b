//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database and upload storage (public)
//! - `/api/auth/*`       - Register, login, logout (public, strict rate limit)
//! - `/api/*`            - REST API (session cookie or Bearer token required)
//! - `/`, `/login`, `/register` - Public pages
//! - `/posts`, `/profile`, `/friends`, `/activity` - Pages requiring a session
//! - `/articles`         - Permanent redirect to `/posts`
//! - `/static/*`         - Static assets
//! - `/img/*`            - Uploaded post images
//!
//! Anything else falls through to a 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins may call the API with credentials
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Session cookie or Bearer token (API), cookie only (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the routes and middleware without path normalization.
///
/// Pages are materialized from `state.navigation`; paths of the legacy table
/// that the served table dropped answer with permanent redirects.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - `behind_proxy` selects the rate limit key source,
///   `cors_allowed_origins` the CORS policy and `upload_path` the `/img` root
pub fn app_routes(state: AppState, config: &Config) -> Router {
    let behind_proxy = config.behind_proxy;

    let api_public = api::routes::auth_routes().layer(rate_limit::secure_layer(behind_proxy));
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer(behind_proxy));

    let api_router = Router::new()
        .merge(api_public)
        .merge(api_protected)
        .layer(cors::layer(&config.cors_allowed_origins));

    let table = state.navigation.clone();

    let web_protected = web::routes::protected_routes(&table)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer(behind_proxy));

    let web_public = web::routes::public_routes(&table)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::optional_layer,
        ))
        .merge(web::routes::legacy_routes(&table))
        .layer(rate_limit::layer(behind_proxy));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_protected)
        .merge(web_public)
        .nest_service("/static", ServeDir::new("static"))
        .nest_service("/img", ServeDir::new(&config.upload_path))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Full application router with trailing slashes trimmed before routing,
/// so `/posts/` resolves exactly like `/posts`.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, config))
}
