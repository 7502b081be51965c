//! Image codec module
//!
//! This module provides:
//! - The codec adapter used by the cleaning pipeline (codec)
//! - Header inspection without pixel decoding (inspect)
//! - EXIF orientation normalization (orientation)

pub mod codec;
pub mod inspect;
pub mod orientation;

pub use codec::{ImageCodec, JpegCodec};
pub use inspect::{ContainerMetadata, ImageInspector};
pub use orientation::ImageOrientation;
