use crate::error::CodecError;
use image::{DynamicImage, RgbImage};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Fixed JPEG quality for cleaned output (0-100)
pub const JPEG_QUALITY: u8 = 95;

/// Largest width or height libjpeg accepts
pub const JPEG_MAX_DIMENSION: u32 = 65_500;

/// JPEG encoder for cleaned images.
///
/// Output never carries APPn metadata segments beyond the JFIF header mozjpeg
/// writes itself, so no EXIF, XMP, IPTC, or ICC survives re-encoding.
#[derive(Debug, Clone, Copy)]
pub struct JpegCompressor {
    quality: u8,
}

impl Default for JpegCompressor {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }
}

impl JpegCompressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Compress to JPEG using mozjpeg.
    ///
    /// Alpha is discarded; JPEG has no transparency.
    pub fn compress(&self, img: &DynamicImage) -> Result<Vec<u8>, CodecError> {
        let rgb_img = img.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        let in_range = |side: u32| (1..=JPEG_MAX_DIMENSION).contains(&side);
        if !in_range(width) || !in_range(height) {
            return Err(CodecError::Encode(format!(
                "image dimensions {}x{} are outside the JPEG limit of {} pixels per side",
                width, height, JPEG_MAX_DIMENSION
            )));
        }

        // libjpeg reports fatal errors by unwinding out of the encoder
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.encode_rgb(&rgb_img, width as usize, height as usize)
        }))
        .unwrap_or_else(|payload| Err(CodecError::Encode(panic_message(payload.as_ref()))))
    }

    fn encode_rgb(
        &self,
        rgb_img: &RgbImage,
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, CodecError> {
        let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
        comp.set_size(width, height);
        comp.set_quality(self.quality as f32);
        comp.set_progressive_mode();
        comp.set_optimize_coding(true);

        let mut comp = comp
            .start_compress(Vec::new())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        comp.write_scanlines(rgb_img)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        let jpeg_data = comp
            .finish()
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(jpeg_data)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "encoder aborted".to_string()
    }
}
