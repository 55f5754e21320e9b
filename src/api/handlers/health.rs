//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Runs `SELECT 1`
/// 2. **Storage**: Checks the upload directory
/// 3. **Navigation**: Reports the served page count; an empty table is degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "storage": { "status": "ok", "message": "Upload directory available" },
///     "navigation": { "status": "ok", "message": "7 pages" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let storage = if state.storage.health_check().await {
        CheckStatus::ok("Upload directory available")
    } else {
        CheckStatus::error("Upload directory unavailable")
    };

    let navigation = if state.navigation.is_empty() {
        CheckStatus::error("No pages registered")
    } else {
        CheckStatus::ok(format!("{} pages", state.navigation.len()))
    };

    let all_healthy = database.is_ok() && storage.is_ok() && navigation.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            storage,
            navigation,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check database query failed");
            CheckStatus::error("Database unreachable")
        }
    }
}
