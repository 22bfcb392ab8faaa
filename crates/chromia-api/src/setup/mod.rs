//! Application setup and initialization
//!
//! Everything `main` needs besides telemetry, so tests can build the full
//! router against a temporary upload directory.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use chromia_core::Config;
use chromia_infra::DeletionScheduler;
use chromia_processing::DominantColorAnalyzer;
use chromia_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir())
            .await
            .context("Failed to prepare upload directory")?,
    );
    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        deletion_delay_secs = config.deletion_delay().as_secs_f64(),
        "Upload storage ready"
    );

    let deletions = DeletionScheduler::new(storage.clone(), config.deletion_delay());

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        deletions,
        analyzer: DominantColorAnalyzer::default(),
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
