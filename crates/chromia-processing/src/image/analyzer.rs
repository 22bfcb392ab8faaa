//! Dominant-color extraction
//!
//! The image is flattened to RGB, shrunk to a small fixed canvas and every pixel
//! value is counted exactly. No perceptual clustering is applied, so results are
//! approximate for photographs and exact for flat artwork.

use std::path::{Path, PathBuf};

use chromia_core::constants::ANALYSIS_CANVAS_SIZE;
use chromia_core::models::ColorSwatch;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, RgbImage};
use indexmap::IndexMap;

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy)]
pub struct DominantColorAnalyzer {
    canvas_size: u32,
    filter: FilterType,
}

impl Default for DominantColorAnalyzer {
    fn default() -> Self {
        Self {
            canvas_size: ANALYSIS_CANVAS_SIZE,
            filter: FilterType::CatmullRom,
        }
    }
}

impl DominantColorAnalyzer {
    /// Decode the file at `path` and return up to `count` dominant colors.
    ///
    /// The format is sniffed from the file contents, so the upload's extension
    /// does not need to match.
    pub fn analyze_file(
        &self,
        path: &Path,
        count: usize,
    ) -> Result<Vec<ColorSwatch>, AnalysisError> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(self.analyze_image(&image, count))
    }

    pub fn analyze_image(&self, image: &DynamicImage, count: usize) -> Vec<ColorSwatch> {
        let rgb = image.to_rgb8();
        let resized = imageops::resize(&rgb, self.canvas_size, self.canvas_size, self.filter);
        rank_colors(&resized, count)
    }

    /// Run [`Self::analyze_file`] on the blocking pool.
    ///
    /// Decoding and resampling are CPU bound; the caller still awaits the
    /// result, there is no timeout.
    pub async fn analyze(
        &self,
        path: PathBuf,
        count: usize,
    ) -> Result<Vec<ColorSwatch>, AnalysisError> {
        let analyzer = *self;
        let start = std::time::Instant::now();

        let swatches =
            tokio::task::spawn_blocking(move || analyzer.analyze_file(&path, count))
                .await
                .map_err(|e| AnalysisError::Interrupted(e.to_string()))??;

        tracing::debug!(
            colors = swatches.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Dominant colors extracted"
        );

        Ok(swatches)
    }
}

/// Count exact pixel values in row-major order and keep the `count` most frequent.
///
/// Colors with equal counts keep the order in which they were first seen.
pub fn rank_colors(image: &RgbImage, count: usize) -> Vec<ColorSwatch> {
    let mut frequencies: IndexMap<[u8; 3], u32> = IndexMap::new();
    for pixel in image.pixels() {
        *frequencies.entry(pixel.0).or_insert(0) += 1;
    }

    let mut ranked: Vec<([u8; 3], u32)> = frequencies.into_iter().collect();
    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(count)
        .map(|(rgb, pixels)| ColorSwatch::new(rgb, pixels))
        .collect()
}
