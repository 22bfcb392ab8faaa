//! Error types module
//!
//! All request-level failures are unified under `AppError`. Each variant describes
//! its own HTTP presentation through `ErrorMetadata`, so the API layer only has to
//! render what the error tells it.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like missing form fields
    Debug,
    /// Warning level - for client input the server could not process
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_IMAGE"), used in logs
    fn error_code(&self) -> &'static str;

    /// Client-facing message, rendered as the `error` field
    fn client_message(&self) -> String;

    /// Diagnostic text rendered as the `details` field, if any
    fn details(&self) -> Option<String>;

    /// Whether details must never reach the client
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No image uploaded")]
    MissingImage,

    #[error("Empty file")]
    EmptyImage,

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Error processing image: {0}")]
    Analysis(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MissingImage => (400, "MISSING_IMAGE", false, LogLevel::Debug),
        AppError::EmptyImage => (400, "EMPTY_IMAGE", false, LogLevel::Debug),
        AppError::InvalidCount(_) => (400, "INVALID_COUNT", false, LogLevel::Debug),
        AppError::InvalidMultipart(_) => (400, "INVALID_MULTIPART", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::Analysis(_) => (500, "ANALYSIS_ERROR", false, LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", false, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingImage => "MissingImage",
            AppError::EmptyImage => "EmptyImage",
            AppError::InvalidCount(_) => "InvalidCount",
            AppError::InvalidMultipart(_) => "InvalidMultipart",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Analysis(_) => "Analysis",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingImage => "No image uploaded".to_string(),
            AppError::EmptyImage => "Empty file".to_string(),
            AppError::InvalidCount(_) => "Invalid count".to_string(),
            AppError::InvalidMultipart(_) => "Invalid multipart body".to_string(),
            AppError::PayloadTooLarge(_) => "File too large".to_string(),
            AppError::Analysis(_) => "Error processing image".to_string(),
            AppError::Storage(_) => "Failed to store image".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    fn details(&self) -> Option<String> {
        if self.is_sensitive() {
            return None;
        }
        match self {
            AppError::InvalidCount(msg)
            | AppError::InvalidMultipart(msg)
            | AppError::Analysis(msg)
            | AppError::Storage(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}
