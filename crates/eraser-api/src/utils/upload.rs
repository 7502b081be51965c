//! Multipart upload extraction for the clean endpoint

use crate::constants::{DEFAULT_FILENAME, IMAGE_FIELD};
use crate::error::{from_multipart_error, HttpAppError};
use axum::extract::Multipart;
use bytes::BytesMut;
use eraser_core::UploadedImage;
use eraser_processing::{UploadValidator, ValidationError};

/// Extract the single `image` field from a multipart form.
///
/// The declared content type is checked before any bytes are read, and the
/// size cap is enforced while streaming so oversized parts are never buffered
/// in full. Other fields are ignored; a second `image` field is rejected.
pub async fn extract_image_upload(
    mut multipart: Multipart,
    validator: &UploadValidator,
    max_mb: usize,
) -> Result<UploadedImage, HttpAppError> {
    let mut upload: Option<UploadedImage> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| from_multipart_error(e, max_mb))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        if upload.is_some() {
            return Err(ValidationError::DuplicateField.into());
        }

        let mime = validator.validate_content_type(field.content_type())?;
        let filename = client_filename(field.file_name().unwrap_or_default());

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| from_multipart_error(e, max_mb))?
        {
            data.extend_from_slice(&chunk);
            if data.len() > validator.max_file_size() {
                return Err(ValidationError::FileTooLarge {
                    size: data.len(),
                    max: validator.max_file_size(),
                }
                .into());
            }
        }
        validator.validate_file_size(data.len())?;

        tracing::debug!(
            mime = %mime,
            size = data.len(),
            filename = %filename,
            "Received image upload"
        );
        upload = Some(UploadedImage::new(data.freeze(), mime, filename));
    }

    upload.ok_or_else(|| ValidationError::MissingFile.into())
}

/// Client filename without any directory components.
///
/// The name is otherwise kept as sent; it is only echoed back, never used as a path.
pub fn client_filename(filename: &str) -> String {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    if basename.trim().is_empty() {
        return DEFAULT_FILENAME.to_string();
    }

    basename.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_filename_keeps_name_as_sent() {
        assert_eq!(client_filename("photo.jpg"), "photo.jpg");
        assert_eq!(client_filename("photo (1).png"), "photo (1).png");
        assert_eq!(client_filename("Été à Paris #2.webp"), "Été à Paris #2.webp");
    }

    #[test]
    fn client_filename_strips_directories() {
        assert_eq!(client_filename("../../etc/passwd"), "passwd");
        assert_eq!(client_filename("C:\\Users\\me\\IMG 001.jpg"), "IMG 001.jpg");
    }

    #[test]
    fn client_filename_falls_back() {
        assert_eq!(client_filename(""), "image");
        assert_eq!(client_filename("   "), "image");
        assert_eq!(client_filename("dir/"), "image");
    }
}
