//! Error types for webpify
//!
//! Only setup problems surface as `WebpifyError`. Per-asset conversion and
//! per-file rewrite problems are recorded in the migration report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webpify operations
pub type WebpifyResult<T> = Result<T, WebpifyError>;

/// Main error type for webpify operations
#[derive(Error, Debug)]
pub enum WebpifyError {
    /// Image root is missing or not a directory
    #[error("invalid image directory: {path}")]
    InvalidImageRoot { path: PathBuf },

    /// Project root is missing or not a directory
    #[error("invalid project root: {path}")]
    InvalidProjectRoot { path: PathBuf },

    /// Discovery found nothing to convert
    #[error("no .{extension} images found in {root}")]
    NoImagesFound { root: PathBuf, extension: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration was declined at the confirmation prompt
    #[error("migration aborted by user")]
    Aborted,
}
