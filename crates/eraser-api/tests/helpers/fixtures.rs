//! Test fixtures: images generated in memory, with optional EXIF/ICC blocks.

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::{ImageEXIF, ImageICC};
use std::io::Cursor;

/// Gradient image so orientation changes are visible.
pub fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
    }))
}

pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .expect("Failed to encode test image");
    buf.into_inner()
}

pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&test_image(width, height), ImageFormat::Jpeg)
}

pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(&test_image(width, height), ImageFormat::Png)
}

pub fn create_test_webp(width: u32, height: u32) -> Vec<u8> {
    encode(&test_image(width, height), ImageFormat::WebP)
}

/// Big-endian TIFF block with a single Orientation entry.
pub fn orientation_exif(orientation: u8) -> Bytes {
    Bytes::from(vec![
        0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, 0x00, 0x01, 0x01, 0x12, 0x00, 0x03,
        0x00, 0x00, 0x00, 0x01, 0x00, orientation, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ])
}

/// JPEG carrying an EXIF orientation tag and an ICC profile.
pub fn create_tagged_jpeg(width: u32, height: u32, orientation: u8) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(create_test_jpeg(width, height)))
        .expect("Failed to parse test JPEG");
    jpeg.set_exif(Some(orientation_exif(orientation)));
    jpeg.set_icc_profile(Some(Bytes::from_static(b"test icc profile")));
    jpeg.encoder().bytes().to_vec()
}

/// GIF header bytes, outside the allow-set.
pub fn create_test_gif() -> Vec<u8> {
    b"GIF89a\x01\x00\x01\x00\x00\x00\x00;".to_vec()
}
