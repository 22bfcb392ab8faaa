//! Chromia Storage Library
//!
//! This crate provides the storage abstraction for temporary uploads and its
//! local filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are flat file names inside the upload directory (`<uuid>_<filename>`).
//! Keys must not be empty, contain `..`, or contain a path separator.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
