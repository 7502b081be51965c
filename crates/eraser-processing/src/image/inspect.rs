//! Container-level inspection: metadata blocks and declared pixel density.
//!
//! Nothing here decodes pixels. JPEG, PNG and WebP containers are parsed with
//! `img-parts`; EXIF payloads are read with `kamadak-exif`.

use bytes::Bytes;
use exif::{In, Reader, Tag, Value};
use img_parts::jpeg::{markers, Jpeg};
use img_parts::png::Png;
use img_parts::{DynImage, ImageEXIF, ImageICC};
use std::io::Cursor;

const JFIF_IDENTIFIER: &[u8] = b"JFIF\0";
const INCHES_PER_METER: f64 = 0.0254;
const CM_PER_INCH: f64 = 2.54;

/// Presence of metadata blocks found in an encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerMetadata {
    pub has_exif: bool,
    pub has_icc: bool,
    /// Declared density in pixels per inch
    pub density: Option<u32>,
}

pub struct ImageInspector;

impl ImageInspector {
    /// Inspect the container structure of an encoded image.
    ///
    /// Unparseable containers report no metadata rather than failing; the
    /// caller has already identified the format from its header.
    pub fn inspect(data: &Bytes) -> ContainerMetadata {
        let parsed = match DynImage::from_bytes(data.clone()) {
            Ok(Some(parsed)) => parsed,
            Ok(None) | Err(_) => return ContainerMetadata::default(),
        };

        let has_exif = parsed.exif().is_some();
        let has_icc = parsed.icc_profile().is_some();

        let declared = match &parsed {
            DynImage::Jpeg(jpeg) => Self::jfif_density(jpeg),
            DynImage::Png(png) => Self::phys_density(png),
            _ => None,
        };
        let density = declared.or_else(|| {
            if has_exif {
                Self::exif_density(data)
            } else {
                None
            }
        });

        ContainerMetadata {
            has_exif,
            has_icc,
            density,
        }
    }

    pub fn has_exif(data: &Bytes) -> bool {
        Self::inspect(data).has_exif
    }

    pub fn has_icc(data: &Bytes) -> bool {
        Self::inspect(data).has_icc
    }

    /// Density from the JFIF APP0 segment. Units 0 only declare an aspect ratio.
    fn jfif_density(jpeg: &Jpeg) -> Option<u32> {
        let app0 = jpeg
            .segments()
            .iter()
            .find(|segment| segment.marker() == markers::APP0)?;
        let contents = app0.contents();
        if contents.len() < 12 || !contents.starts_with(JFIF_IDENTIFIER) {
            return None;
        }

        let units = contents[7];
        let x_density = u16::from_be_bytes([contents[8], contents[9]]);
        match units {
            1 => Some(u32::from(x_density)),
            2 => Some((f64::from(x_density) * CM_PER_INCH).round() as u32),
            _ => None,
        }
    }

    /// Density from the PNG pHYs chunk, stored in pixels per meter.
    fn phys_density(png: &Png) -> Option<u32> {
        let phys = png.chunk_by_type(*b"pHYs")?;
        let contents = phys.contents();
        if contents.len() < 9 || contents[8] != 1 {
            return None;
        }

        let pixels_per_meter =
            u32::from_be_bytes([contents[0], contents[1], contents[2], contents[3]]);
        Some((f64::from(pixels_per_meter) * INCHES_PER_METER).round() as u32)
    }

    /// Density from EXIF XResolution and ResolutionUnit (2 = inch, 3 = cm).
    fn exif_density(data: &[u8]) -> Option<u32> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(data))
            .ok()?;

        let resolution = match exif.get_field(Tag::XResolution, In::PRIMARY)?.value {
            Value::Rational(ref values) => values.first()?.to_f64(),
            _ => return None,
        };
        if !resolution.is_finite() || resolution <= 0.0 {
            return None;
        }

        let unit = exif
            .get_field(Tag::ResolutionUnit, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(2);
        match unit {
            2 => Some(resolution.round() as u32),
            3 => Some((resolution * CM_PER_INCH).round() as u32),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{
        encode, jpeg_with_density, jpeg_with_exif, jpeg_with_icc, orientation_tiff,
        png_with_phys, resolution_tiff, sample_image,
    };
    use image::ImageFormat;

    #[test]
    fn test_plain_images_have_no_metadata() {
        let img = sample_image(8, 8);
        for format in [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP] {
            let meta = ImageInspector::inspect(&Bytes::from(encode(&img, format)));
            assert!(!meta.has_exif, "{:?}", format);
            assert!(!meta.has_icc, "{:?}", format);
        }
    }

    #[test]
    fn test_detects_exif_and_icc_in_jpeg() {
        let jpeg = encode(&sample_image(8, 8), ImageFormat::Jpeg);
        let with_exif = Bytes::from(jpeg_with_exif(&jpeg, orientation_tiff(3)));
        assert!(ImageInspector::has_exif(&with_exif));
        assert!(!ImageInspector::has_icc(&with_exif));

        let with_icc = Bytes::from(jpeg_with_icc(&jpeg, Bytes::from_static(b"fake icc profile")));
        assert!(ImageInspector::has_icc(&with_icc));
        assert!(!ImageInspector::has_exif(&with_icc));
    }

    #[test]
    fn test_jfif_density() {
        let jpeg = Bytes::from(jpeg_with_density(&sample_image(8, 8), 300));
        assert_eq!(ImageInspector::inspect(&jpeg).density, Some(300));
    }

    #[test]
    fn test_png_phys_density() {
        let png = encode(&sample_image(8, 8), ImageFormat::Png);
        assert_eq!(ImageInspector::inspect(&Bytes::from(png.clone())).density, None);

        // 2835 pixels per meter is 72 dpi
        let with_phys = Bytes::from(png_with_phys(&png, 2835));
        assert_eq!(ImageInspector::inspect(&with_phys).density, Some(72));
    }

    #[test]
    fn test_exif_density_fallback() {
        let jpeg = encode(&sample_image(8, 8), ImageFormat::Jpeg);
        let tagged = Bytes::from(jpeg_with_exif(&jpeg, resolution_tiff(240)));
        assert_eq!(ImageInspector::inspect(&tagged).density, Some(240));
    }

    #[test]
    fn test_garbage_reports_nothing() {
        assert_eq!(
            ImageInspector::inspect(&Bytes::from_static(b"definitely not an image")),
            ContainerMetadata::default()
        );
    }
}
