//! Eraser Processing Library
//!
//! Metadata-stripping pipeline: upload validation, metadata summary, orientation
//! normalization, and metadata-free JPEG re-encoding.

pub mod compression;
pub mod error;
pub mod image;
pub mod metadata;
pub mod pipeline;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use compression::{JpegCompressor, JPEG_QUALITY};
pub use error::{CodecError, ExtractionError};
pub use self::image::{ContainerMetadata, ImageCodec, ImageInspector, ImageOrientation, JpegCodec};
pub use metadata::{MetadataFields, MetadataSnapshot, MetadataSummarizer};
pub use pipeline::{CleanError, CleanOutcome, CleanedImage, CleaningPipeline, CLEANED_MIME};
pub use validator::{UploadValidator, ValidationError};
