//! Encoder port - the image-encoding capability
//!
//! The converter hands source bytes to an `Encoder` and writes whatever comes
//! back. Production uses the WebP encoder; tests inject fakes.

use thiserror::Error;

/// Encoding settings. There is exactly one supported mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    pub lossless: bool,
    /// 0.0 (smallest) to 100.0 (best)
    pub quality: f32,
}

impl EncodeOptions {
    /// Lossy encoding at the library's usual default quality.
    pub const LOSSY: EncodeOptions = EncodeOptions {
        lossless: false,
        quality: 80.0,
    };
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::LOSSY
    }
}

/// Failure inside the encoder
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Source bytes are not a decodable image
    #[error("cannot decode source image: {0}")]
    Decode(String),

    /// Image decoded but could not be encoded
    #[error("cannot encode image: {0}")]
    Encode(String),
}

/// Image encoding capability
pub trait Encoder {
    /// Extension of the files this encoder produces (without the dot)
    fn extension(&self) -> &str;

    /// Encode `source` (a complete image file) into the target format
    fn encode(&self, source: &[u8], options: &EncodeOptions) -> Result<Vec<u8>, EncodeError>;
}
