use thiserror::Error;

/// Failures while turning a stored upload into a color ranking
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Analysis task did not complete: {0}")]
    Interrupted(String),
}
