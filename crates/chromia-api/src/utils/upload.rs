//! Multipart upload helpers

use axum::extract::Multipart;
use chromia_core::constants::{IMAGE_FIELD_NAME, MAX_COLOR_COUNT};
use chromia_core::models::UploadedImage;
use chromia_core::AppError;

use crate::error::HttpAppError;

const MAX_FILENAME_LENGTH: usize = 200;

/// Pull the first file part named `image` out of the form.
///
/// Parts without a filename are plain form values and do not count as an upload.
/// An empty filename (browser form with no file chosen) or a zero-length payload
/// is `EmptyImage`.
pub async fn extract_image_field(mut multipart: Multipart) -> Result<UploadedImage, HttpAppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD_NAME) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field.bytes().await?;
        if filename.is_empty() || data.is_empty() {
            return Err(AppError::EmptyImage.into());
        }

        return Ok(UploadedImage::new(sanitize_filename(&filename), data.to_vec()));
    }

    Err(AppError::MissingImage.into())
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory parts are dropped, characters outside `[A-Za-z0-9._-]` become `_`
/// and runs of dots are broken up so the result can never contain `..`.
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.replace("..", "_");

    if sanitized.is_empty() || sanitized == "." {
        "upload".to_string()
    } else {
        sanitized
    }
}

/// Resolve the requested number of colors against the configured default.
pub fn resolve_color_count(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    match requested {
        None => Ok(default),
        Some(count) if (1..=MAX_COLOR_COUNT).contains(&count) => Ok(count),
        Some(count) => Err(AppError::InvalidCount(format!(
            "count must be between 1 and {}, got {}",
            MAX_COLOR_COUNT, count
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("sunset-01_final.png"), "sunset-01_final.png");
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\cat.jpg"), "cat.jpg");
        assert_eq!(sanitize_filename("uploads/"), "upload");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("café.png"), "caf_.png");
    }

    #[test]
    fn test_sanitize_never_yields_parent_reference() {
        for name in ["..", "...", "a..b.png", "....png"] {
            let sanitized = sanitize_filename(name);
            assert!(!sanitized.contains(".."), "{} -> {}", name, sanitized);
            assert!(!sanitized.is_empty());
        }
    }

    #[test]
    fn test_sanitize_truncates_long_names() {
        let long = "a".repeat(500);
        assert_eq!(sanitize_filename(&long).len(), MAX_FILENAME_LENGTH);
    }

    #[test]
    fn test_resolve_color_count() {
        assert_eq!(resolve_color_count(None, 5).unwrap(), 5);
        assert_eq!(resolve_color_count(Some(1), 5).unwrap(), 1);
        assert_eq!(resolve_color_count(Some(MAX_COLOR_COUNT), 5).unwrap(), MAX_COLOR_COUNT);
        assert!(matches!(
            resolve_color_count(Some(0), 5),
            Err(AppError::InvalidCount(_))
        ));
        assert!(matches!(
            resolve_color_count(Some(MAX_COLOR_COUNT + 1), 5),
            Err(AppError::InvalidCount(_))
        ));
    }
}
