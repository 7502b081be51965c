use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Accepted upload content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMime {
    Jpeg,
    Png,
    WebP,
}

impl ImageMime {
    pub const ALL: [ImageMime; 3] = [ImageMime::Jpeg, ImageMime::Png, ImageMime::WebP];

    /// Match a declared Content-Type against the allow-set.
    ///
    /// Parameters are stripped ("image/jpeg; charset=binary" -> "image/jpeg") and the
    /// comparison is case-insensitive.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let normalized = content_type
            .split(';')
            .next()
            .map(|s| s.trim())
            .unwrap_or(content_type)
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|mime| mime.as_str() == normalized)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::WebP => "image/webp",
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image received from a client, immutable for the rest of the request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    data: Bytes,
    mime: ImageMime,
    original_filename: String,
}

impl UploadedImage {
    pub fn new(data: Bytes, mime: ImageMime, original_filename: impl Into<String>) -> Self {
        Self {
            data,
            mime,
            original_filename: original_filename.into(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared handle to the upload buffer; cloning it does not copy
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type_allow_set() {
        assert_eq!(
            ImageMime::from_content_type("image/jpeg"),
            Some(ImageMime::Jpeg)
        );
        assert_eq!(ImageMime::from_content_type("image/png"), Some(ImageMime::Png));
        assert_eq!(
            ImageMime::from_content_type("image/webp"),
            Some(ImageMime::WebP)
        );
    }

    #[test]
    fn test_from_content_type_normalizes() {
        assert_eq!(
            ImageMime::from_content_type("IMAGE/JPEG"),
            Some(ImageMime::Jpeg)
        );
        assert_eq!(
            ImageMime::from_content_type("image/png; charset=binary"),
            Some(ImageMime::Png)
        );
    }

    #[test]
    fn test_from_content_type_rejects_others() {
        assert_eq!(ImageMime::from_content_type("image/gif"), None);
        assert_eq!(ImageMime::from_content_type("image/jpg"), None);
        assert_eq!(ImageMime::from_content_type("application/octet-stream"), None);
        assert_eq!(ImageMime::from_content_type(""), None);
    }

    #[test]
    fn test_serializes_as_short_format_name() {
        assert_eq!(serde_json::to_string(&ImageMime::Jpeg).unwrap(), "\"jpeg\"");
        assert_eq!(serde_json::to_string(&ImageMime::WebP).unwrap(), "\"webp\"");
    }

    #[test]
    fn test_uploaded_image_accessors() {
        let upload = UploadedImage::new(Bytes::from_static(b"abc"), ImageMime::Png, "a.png");
        assert_eq!(upload.size(), 3);
        assert!(!upload.is_empty());
        assert_eq!(upload.mime(), ImageMime::Png);
        assert_eq!(upload.original_filename(), "a.png");
        assert_eq!(upload.mime().to_string(), "image/png");
    }

    #[test]
    fn test_bytes_handle_shares_upload_buffer() {
        let upload = UploadedImage::new(Bytes::from(vec![7u8; 1024]), ImageMime::Jpeg, "a.jpg");
        let shared = upload.bytes().clone();
        assert_eq!(shared.as_ptr(), upload.data().as_ptr());
        assert_eq!(shared.len(), upload.size());
    }
}
