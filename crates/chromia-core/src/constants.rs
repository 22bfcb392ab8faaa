//! Application-wide constants

/// Width and height of the canvas images are resized to before counting colors.
pub const ANALYSIS_CANVAS_SIZE: u32 = 150;

/// Number of dominant colors returned when the request does not ask for a count.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Upper bound for the `count` query parameter.
pub const MAX_COLOR_COUNT: usize = 64;

pub const DEFAULT_DELETION_DELAY_SECS: u64 = 60;

pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD_NAME: &str = "image";

pub const LIVENESS_MESSAGE: &str = "Image Color Analyzer API is alive ✅";
