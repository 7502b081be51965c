use crate::compression::JpegCompressor;
use crate::error::{CodecError, ExtractionError};
use crate::image::inspect::ImageInspector;
use crate::image::orientation::ImageOrientation;
use crate::metadata::MetadataFields;
use bytes::Bytes;
use eraser_core::ImageMime;
use image::{ImageDecoder, ImageFormat, ImageReader};
use std::io::Cursor;

/// Codec seam between the cleaning pipeline and the imaging libraries.
///
/// Implementations are synchronous; callers on an async runtime run them on
/// the blocking pool.
pub trait ImageCodec: Send + Sync {
    /// Read format, dimensions and metadata presence without decoding pixels
    fn read_metadata(&self, data: &Bytes) -> Result<MetadataFields, ExtractionError>;

    /// Decode, orient upright, and re-encode without metadata
    fn reencode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Production codec: every input becomes a metadata-free JPEG
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec {
    compressor: JpegCompressor,
}

impl JpegCodec {
    pub fn new(compressor: JpegCompressor) -> Self {
        Self { compressor }
    }
}

impl ImageCodec for JpegCodec {
    fn read_metadata(&self, data: &Bytes) -> Result<MetadataFields, ExtractionError> {
        let reader = ImageReader::new(Cursor::new(&data[..]))
            .with_guessed_format()
            .map_err(|e| ExtractionError::Header(e.to_string()))?;

        let format = match reader.format() {
            Some(ImageFormat::Jpeg) => ImageMime::Jpeg,
            Some(ImageFormat::Png) => ImageMime::Png,
            Some(ImageFormat::WebP) => ImageMime::WebP,
            _ => return Err(ExtractionError::UnknownFormat),
        };

        let decoder = reader
            .into_decoder()
            .map_err(|e| ExtractionError::Header(e.to_string()))?;
        let dimensions = decoder.dimensions();
        let has_alpha = decoder.color_type().has_alpha();

        Ok(MetadataFields::new(
            format,
            dimensions,
            has_alpha,
            ImageInspector::inspect(data),
        ))
    }

    fn reencode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| CodecError::Decode(e.to_string()))?
            .decode()?;

        let img = ImageOrientation::apply_exif_orientation(img, data);
        self.compressor.compress(&img)
    }
}
