//! Image processing module

pub mod analyzer;

pub use analyzer::{rank_colors, DominantColorAnalyzer};
