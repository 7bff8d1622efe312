use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in process memory, so the service is healthy whenever it
/// can answer. The current record count is included for convenience.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let products = state.store.len().await;
    tracing::debug!("Health check passed ({} products)", products);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            products,
        }),
    )
}
