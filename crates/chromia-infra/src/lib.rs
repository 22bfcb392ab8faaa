//! Chromia Infrastructure Library
//!
//! Background components and process-level plumbing:
//! - Deletion scheduler for temporary uploads
//! - Tracing subscriber setup

pub mod cleanup;
pub mod telemetry;

pub use cleanup::DeletionScheduler;
pub use telemetry::init_telemetry;
