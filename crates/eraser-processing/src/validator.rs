use eraser_core::ImageMime;

/// Upload validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No image file uploaded")]
    MissingFile,

    #[error("Invalid content type: {content_type} (allowed: image/jpeg, image/png, image/webp)")]
    UnsupportedContentType { content_type: String },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Only one image may be uploaded per request")]
    DuplicateField,
}

/// Upload validator
///
/// Checks the declared content type against the closed allow-set and enforces
/// the size cap. Content is never sniffed here; decoding is the codec's job.
#[derive(Debug, Clone, Copy)]
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate the declared content type. A missing type is rejected.
    pub fn validate_content_type(
        &self,
        content_type: Option<&str>,
    ) -> Result<ImageMime, ValidationError> {
        let content_type = content_type.unwrap_or_default();
        ImageMime::from_content_type(content_type).ok_or_else(|| {
            ValidationError::UnsupportedContentType {
                content_type: content_type.to_string(),
            }
        })
    }

    /// Validate file size. Empty uploads count as missing.
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::MissingFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }
}
