//! Chromia API Library
//!
//! This crate provides the HTTP handlers and application setup.

mod handlers;
mod utils;

pub mod error;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
