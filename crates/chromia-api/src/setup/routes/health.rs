//! Liveness handler

use axum::{http::StatusCode, response::IntoResponse, Json};
use chromia_core::constants::LIVENESS_MESSAGE;
use chromia_core::models::StatusResponse;

/// Liveness check: the process is up and serving.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: LIVENESS_MESSAGE.to_string(),
        }),
    )
}
