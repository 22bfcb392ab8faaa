use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use chromia_core::models::DominantColorsResponse;
use chromia_core::AppError;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{extract_image_field, resolve_color_count};

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub count: Option<usize>,
}

/// Accept one uploaded image and report its most frequent colors.
///
/// Deletion of the upload is scheduled before it is written, so the file is
/// removed whether the write, the analysis or the client connection fails.
#[tracing::instrument(skip_all, fields(operation = "analyze_image"))]
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DominantColorsResponse>, HttpAppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidCount(e.body_text()))?;
    let count = resolve_color_count(query.count, state.config.dominant_color_count())?;

    let multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request body is not multipart");
        AppError::MissingImage
    })?;

    let upload = extract_image_field(multipart).await?;
    let storage_key = upload.storage_key();

    tracing::info!(
        key = %storage_key,
        size_bytes = upload.size_bytes(),
        count,
        "Received image for analysis"
    );

    // every key that can reach disk is tracked by the scheduler
    state.deletions.schedule(storage_key.clone());
    let path = state.storage.store(&storage_key, &upload.data).await?;

    let swatches = state.analyzer.analyze(path, count).await?;

    tracing::info!(
        key = %storage_key,
        colors = swatches.len(),
        "Image analyzed"
    );

    Ok(Json(DominantColorsResponse {
        dominant_colors: swatches,
    }))
}
