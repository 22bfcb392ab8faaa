//! Data models for the application

mod color;
mod response;
mod upload;

pub use color::*;
pub use response::*;
pub use upload::*;
