//! WebP encoder
//!
//! Decodes the source with `image`, normalizes to 8-bit RGBA and encodes with
//! libwebp.

use image::DynamicImage;

use crate::domain::ports::{EncodeError, EncodeOptions, Encoder};

/// Encodes any image `image` can decode into WebP.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpEncoder;

impl WebpEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for WebpEncoder {
    fn extension(&self) -> &str {
        "webp"
    }

    fn encode(&self, source: &[u8], options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        let decoded =
            image::load_from_memory(source).map_err(|e| EncodeError::Decode(e.to_string()))?;

        // libwebp only takes 8-bit RGB(A); 16-bit and grayscale PNGs are widened here.
        let rgba = DynamicImage::ImageRgba8(decoded.to_rgba8());
        let encoder = ::webp::Encoder::from_image(&rgba)
            .map_err(|e| EncodeError::Encode(e.to_string()))?;
        let memory = encoder
            .encode_simple(options.lossless, options.quality)
            .map_err(|e| EncodeError::Encode(format!("{:?}", e)))?;

        Ok(memory.to_vec())
    }
}
