//! Codec error types

/// Failure while decoding or re-encoding an image
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("{0}")]
    Decode(String),

    #[error("Failed to encode JPEG: {0}")]
    Encode(String),
}

impl From<image::ImageError> for CodecError {
    fn from(err: image::ImageError) -> Self {
        CodecError::Decode(err.to_string())
    }
}

/// Failure while inspecting image headers for the metadata summary
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Failed to read image header: {0}")]
    Header(String),
}
