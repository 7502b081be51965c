use crate::image::{ContainerMetadata, ImageCodec};
use bytes::Bytes;
use eraser_core::ImageMime;
use serde::Serialize;

pub const EXIF_PRESENT: &str = "EXIF data present";
pub const EXIF_ABSENT: &str = "No EXIF data";
pub const ICC_PRESENT: &str = "ICC profile present";
pub const ICC_ABSENT: &str = "No ICC profile";
pub const EXTRACTION_FAILED: &str = "Could not extract metadata";

/// Human-readable summary of what an encoded image carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFields {
    pub format: ImageMime,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
    pub has_profile: bool,
    pub has_alpha: bool,
    pub exif: String,
    pub icc: String,
}

impl MetadataFields {
    pub fn new(
        format: ImageMime,
        (width, height): (u32, u32),
        has_alpha: bool,
        container: ContainerMetadata,
    ) -> Self {
        Self {
            format,
            width,
            height,
            density: container.density,
            has_profile: container.has_icc,
            has_alpha,
            exif: if container.has_exif {
                EXIF_PRESENT
            } else {
                EXIF_ABSENT
            }
            .to_string(),
            icc: if container.has_icc {
                ICC_PRESENT
            } else {
                ICC_ABSENT
            }
            .to_string(),
        }
    }

    pub fn has_exif(&self) -> bool {
        self.exif == EXIF_PRESENT
    }

    pub fn has_icc(&self) -> bool {
        self.icc == ICC_PRESENT
    }
}

/// Metadata summary, or a marker when the header could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataSnapshot {
    Fields(MetadataFields),
    Unavailable { error: String },
}

impl MetadataSnapshot {
    pub fn unavailable() -> Self {
        MetadataSnapshot::Unavailable {
            error: EXTRACTION_FAILED.to_string(),
        }
    }

    pub fn fields(&self) -> Option<&MetadataFields> {
        match self {
            MetadataSnapshot::Fields(fields) => Some(fields),
            MetadataSnapshot::Unavailable { .. } => None,
        }
    }
}

pub struct MetadataSummarizer;

impl MetadataSummarizer {
    /// Best-effort summary. Extraction failures never propagate.
    pub fn summarize(codec: &dyn ImageCodec, data: &Bytes) -> MetadataSnapshot {
        match codec.read_metadata(data) {
            Ok(fields) => MetadataSnapshot::Fields(fields),
            Err(e) => {
                tracing::debug!(error = %e, "Could not extract metadata");
                MetadataSnapshot::unavailable()
            }
        }
    }
}
