//! Conversion results for a single image

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// An image that was converted: the original is gone, the converted file exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedAsset {
    pub original: PathBuf,
    pub converted: PathBuf,
}

impl ConvertedAsset {
    pub fn new(original: impl Into<PathBuf>, converted: impl Into<PathBuf>) -> Self {
        Self {
            original: original.into(),
            converted: converted.into(),
        }
    }

    /// Extension of the converted file (without the dot)
    pub fn converted_extension(&self) -> Option<&str> {
        self.converted.extension().and_then(|e| e.to_str())
    }
}

/// Reason an image was left alone without attempting conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A file already occupies the output path
    DestinationExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::DestinationExists => write!(f, "destination already exists"),
        }
    }
}

/// An image that was not converted on purpose
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedAsset {
    pub path: PathBuf,
    pub destination: PathBuf,
    pub reason: SkipReason,
}

/// An image whose conversion failed; the original is untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionFailure {
    pub path: PathBuf,
    pub error: String,
}

impl ConversionFailure {
    pub fn new(path: &Path, error: impl fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            error: error.to_string(),
        }
    }
}

/// Outcome of converting one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted(ConvertedAsset),
    Skipped(SkippedAsset),
    Failed(ConversionFailure),
}

impl ConversionOutcome {
    pub fn converted(&self) -> Option<&ConvertedAsset> {
        match self {
            ConversionOutcome::Converted(asset) => Some(asset),
            _ => None,
        }
    }
}
