//! Domain models

pub mod image;

pub use image::{ImageMime, UploadedImage};
