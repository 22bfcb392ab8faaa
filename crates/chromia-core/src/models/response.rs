use serde::Serialize;

use super::ColorSwatch;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Body of a successful `POST /analyze`
#[derive(Debug, Clone, Serialize)]
pub struct DominantColorsResponse {
    pub dominant_colors: Vec<ColorSwatch>,
}
