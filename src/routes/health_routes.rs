use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::utils::errors::AppError;

pub const LIVENESS_MESSAGE: &str = "Route Scheduler API is running";

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check con ping al store
async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await?;

    Ok(Json(json!({
        "status": "ok",
        "store": state.store.backend_name(),
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
