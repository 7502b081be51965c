//! Eraser Core Library
//!
//! This crate provides the configuration, error types, and domain models shared
//! by the processing pipeline and the HTTP API.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{ImageMime, UploadedImage};
