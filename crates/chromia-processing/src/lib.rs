//! Chromia Processing Library
//!
//! Image decoding and dominant-color extraction.

pub mod error;
pub mod image;

pub use error::AnalysisError;
pub use crate::image::{rank_colors, DominantColorAnalyzer};
