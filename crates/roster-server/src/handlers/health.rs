//! Liveness probe

use axum::Json;
use roster_core::StatusResponse;

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}
