#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use social_media_api::config::Config;
use social_media_api::infrastructure::storage::{FileImageStorage, ImageStorage};
use social_media_api::routes::app_router;
use social_media_api::state::AppState;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub const PASSWORD: &str = "correct horse battery staple";

pub fn upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("social-media-api-test-{}", uuid::Uuid::new_v4()))
}

pub fn test_config(upload_path: &Path) -> Config {
    Config {
        database_url: "postgres://postgres@127.0.0.1:1/unused".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        jwt_secret: "integration-test-secret-0123456789abcdef".to_string(),
        jwt_expiration_seconds: 3600,
        jwt_cookie_name: "auth_token".to_string(),
        cookie_secure: false,
        upload_path: upload_path.to_string_lossy().into_owned(),
        cors_allowed_origins: vec!["http://localhost:8080".to_string()],
        db_max_connections: 5,
        db_connect_timeout: 1,
        db_idle_timeout: 60,
        db_max_lifetime: 300,
    }
}

pub async fn create_test_state(pool: PgPool, config: &Config) -> AppState {
    let storage: Arc<dyn ImageStorage> = Arc::new(
        FileImageStorage::new(&config.upload_path)
            .await
            .unwrap(),
    );

    AppState::new(Arc::new(pool), storage, config)
}

/// State whose pool points at a closed port, for routes that never reach the database.
pub async fn create_offline_state() -> (AppState, Config) {
    let config = test_config(&upload_dir());
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy(&config.database_url)
        .unwrap();

    (create_test_state(pool, &config).await, config)
}

/// Production router, path normalization included, served over HTTP so rate
/// limiting sees a peer address.
pub fn create_test_server(state: AppState, config: &Config) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(state, config),
    );
    TestServer::new(app).unwrap()
}

pub fn session_cookie(state: &AppState, email: &str) -> (HeaderName, HeaderValue) {
    let token = state.auth_service.issue_token(email);
    let value = format!("{}={}", state.session.name(), token);
    (header::COOKIE, HeaderValue::from_str(&value).unwrap())
}

pub fn bearer(state: &AppState, email: &str) -> (HeaderName, HeaderValue) {
    let token = state.auth_service.issue_token(email);
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

pub async fn create_test_user(state: &AppState, email: &str, name: &str) -> i64 {
    state
        .user_service
        .register(email, PASSWORD, name)
        .await
        .unwrap()
        .id
}

pub async fn create_test_post(pool: &PgPool, author_id: i64, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3) RETURNING id")
        .bind(title)
        .bind(format!("{title} content"))
        .bind(author_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn follow(pool: &PgPool, channel_id: i64, subscriber_id: i64) {
    sqlx::query("INSERT INTO user_subscriptions (channel_id, subscriber_id) VALUES ($1, $2)")
        .bind(channel_id)
        .bind(subscriber_id)
        .execute(pool)
        .await
        .unwrap();
}
