//! In-memory image fixtures shared by unit tests

use bytes::Bytes;
use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::png::{Png, PngChunk};
use img_parts::{ImageEXIF, ImageICC};
use std::io::Cursor;

/// Horizontal gradient so rotations are visible
pub fn sample_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 64])
    });
    DynamicImage::ImageRgb8(img)
}

pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        // The JPEG encoder rejects alpha channels
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_to(&mut buf, format)
            .unwrap(),
        _ => img.write_to(&mut buf, format).unwrap(),
    }
    buf.into_inner()
}

pub fn jpeg_with_density(img: &DynamicImage, dpi: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, 90);
        encoder.set_pixel_density(PixelDensity::dpi(dpi));
        encoder.encode_image(&img.to_rgb8()).unwrap();
    }
    buf
}

/// Big-endian TIFF block holding a single Orientation entry
pub fn orientation_tiff(orientation: u8) -> Bytes {
    Bytes::from(vec![
        0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // header, IFD0 at 8
        0x00, 0x01, // one entry
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, orientation, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, // no next IFD
    ])
}

/// Big-endian TIFF block declaring `dpi` pixels per inch
pub fn resolution_tiff(dpi: u32) -> Bytes {
    let mut tiff = vec![
        0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // header, IFD0 at 8
        0x00, 0x02, // two entries
        0x01, 0x1A, 0x00, 0x05, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x26, // XResolution
        0x01, 0x28, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, // inches
        0x00, 0x00, 0x00, 0x00, // no next IFD
    ];
    tiff.extend_from_slice(&dpi.to_be_bytes());
    tiff.extend_from_slice(&1u32.to_be_bytes());
    Bytes::from(tiff)
}

pub fn jpeg_with_exif(jpeg: &[u8], exif: Bytes) -> Vec<u8> {
    let mut parsed = Jpeg::from_bytes(Bytes::copy_from_slice(jpeg)).unwrap();
    parsed.set_exif(Some(exif));
    parsed.encoder().bytes().to_vec()
}

pub fn jpeg_with_icc(jpeg: &[u8], icc: Bytes) -> Vec<u8> {
    let mut parsed = Jpeg::from_bytes(Bytes::copy_from_slice(jpeg)).unwrap();
    parsed.set_icc_profile(Some(icc));
    parsed.encoder().bytes().to_vec()
}

/// Insert a pHYs chunk right after IHDR
pub fn png_with_phys(png: &[u8], pixels_per_meter: u32) -> Vec<u8> {
    let mut parsed = Png::from_bytes(Bytes::copy_from_slice(png)).unwrap();
    let mut contents = Vec::with_capacity(9);
    contents.extend_from_slice(&pixels_per_meter.to_be_bytes());
    contents.extend_from_slice(&pixels_per_meter.to_be_bytes());
    contents.push(1);
    parsed
        .chunks_mut()
        .insert(1, PngChunk::new(*b"pHYs", Bytes::from(contents)));
    parsed.encoder().bytes().to_vec()
}
