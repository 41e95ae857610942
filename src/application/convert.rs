//! Image conversion
//!
//! Converts one image at a time. The original is removed only after the
//! converted file has been fully written; any failure leaves the disk as it
//! was.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{
    ConversionFailure, ConversionOutcome, ConvertedAsset, SkipReason, SkippedAsset,
};
use crate::domain::ports::{EncodeError, EncodeOptions, Encoder, FileSystem, FsError};

/// Options for the image converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Extension of convertible images (without the dot)
    pub source_extension: String,
    /// Replace a file already sitting at the output path
    pub overwrite_existing: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source_extension: "png".to_string(),
            overwrite_existing: false,
        }
    }
}

#[derive(Debug, Error)]
enum ConvertError {
    #[error("not a .{0} file")]
    UnsupportedExtension(String),
    #[error("cannot read source: {0}")]
    Read(#[source] FsError),
    #[error("cannot read existing output: {0}")]
    ReadExisting(#[source] FsError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("cannot write output: {0}")]
    Write(#[source] FsError),
    #[error("output written but original could not be removed: {0}")]
    RemoveOriginal(#[source] FsError),
}

/// Converts images through an injected encoder
pub struct ImageConverter<FS, E>
where
    FS: FileSystem,
    E: Encoder,
{
    fs: FS,
    encoder: E,
    options: ConvertOptions,
}

impl<FS, E> ImageConverter<FS, E>
where
    FS: FileSystem,
    E: Encoder,
{
    pub fn new(fs: FS, encoder: E, options: ConvertOptions) -> Self {
        Self {
            fs,
            encoder,
            options,
        }
    }

    /// Same directory and stem, encoder's extension. `None` when `source` does
    /// not carry the source extension.
    pub fn output_path(&self, source: &Path) -> Option<PathBuf> {
        let ext = source.extension()?.to_str()?;
        if !ext.eq_ignore_ascii_case(&self.options.source_extension) {
            return None;
        }
        Some(source.with_extension(self.encoder.extension()))
    }

    /// What `convert` would do, without reading, encoding, writing or deleting.
    pub fn plan(&self, source: &Path) -> ConversionOutcome {
        match self.destination(source) {
            Ok(output) => ConversionOutcome::Converted(ConvertedAsset::new(source, output)),
            Err(outcome) => outcome,
        }
    }

    /// Convert `source`, write the output beside it and remove the original.
    pub fn convert(&self, source: &Path) -> ConversionOutcome {
        let output = match self.destination(source) {
            Ok(output) => output,
            Err(outcome) => return outcome,
        };

        match self.encode_and_replace(source, &output) {
            Ok(()) => {
                log::debug!("converted {} -> {}", source.display(), output.display());
                ConversionOutcome::Converted(ConvertedAsset::new(source, output))
            }
            Err(ConvertError::Write(FsError::AlreadyExists(_))) => {
                log::info!(
                    "skipping {}: {} appeared during conversion",
                    source.display(),
                    output.display()
                );
                ConversionOutcome::Skipped(skipped(source, output))
            }
            Err(err) => {
                log::warn!("conversion failed for {}: {}", source.display(), err);
                ConversionOutcome::Failed(ConversionFailure::new(source, err))
            }
        }
    }

    fn destination(&self, source: &Path) -> Result<PathBuf, ConversionOutcome> {
        let Some(output) = self.output_path(source) else {
            let err = ConvertError::UnsupportedExtension(self.options.source_extension.clone());
            return Err(ConversionOutcome::Failed(ConversionFailure::new(source, err)));
        };

        if !self.options.overwrite_existing && self.fs.exists(&output) {
            log::info!(
                "skipping {}: {} already exists",
                source.display(),
                output.display()
            );
            return Err(ConversionOutcome::Skipped(skipped(source, output)));
        }

        Ok(output)
    }

    fn encode_and_replace(&self, source: &Path, output: &Path) -> Result<(), ConvertError> {
        let bytes = self.fs.read(source).map_err(ConvertError::Read)?;
        let encoded = self.encoder.encode(&bytes, &EncodeOptions::LOSSY)?;

        let previous = if self.options.overwrite_existing && self.fs.exists(output) {
            Some(self.fs.read(output).map_err(ConvertError::ReadExisting)?)
        } else {
            None
        };
        let written = if self.options.overwrite_existing {
            self.fs.write_atomic(output, &encoded)
        } else {
            self.fs.write_new(output, &encoded)
        };
        written.map_err(ConvertError::Write)?;

        if let Err(err) = self.fs.remove(source) {
            self.roll_back(output, previous.as_deref());
            return Err(ConvertError::RemoveOriginal(err));
        }
        Ok(())
    }

    /// Put `output` back the way it was before `encode_and_replace` wrote it.
    fn roll_back(&self, output: &Path, previous: Option<&[u8]>) {
        let restored = match previous {
            Some(bytes) => self.fs.write_atomic(output, bytes),
            None => self.fs.remove(output),
        };
        if let Err(err) = restored {
            log::warn!("could not restore {}: {}", output.display(), err);
        }
    }
}

fn skipped(source: &Path, destination: PathBuf) -> SkippedAsset {
    SkippedAsset {
        path: source.to_path_buf(),
        destination,
        reason: SkipReason::DestinationExists,
    }
}
