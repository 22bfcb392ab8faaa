//! Route table and middleware stack

mod health;

use crate::handlers::analyze::analyze_image;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use chromia_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route("/", get(health::liveness_check))
        .route("/analyze", post(analyze_image))
        .layer(DefaultBodyLimit::max(config.max_file_size_bytes()))
        .layer(setup_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin may call the API; no credentials are involved.
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
