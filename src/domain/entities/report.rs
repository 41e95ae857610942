//! Migration report

use std::path::PathBuf;

use serde::Serialize;

use super::asset::{ConversionFailure, ConvertedAsset, SkippedAsset};
use super::candidate::ReplacementCandidate;
use super::rewrite::{FileRewrite, RewriteFailure};

/// Result of a full migration run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub image_root: PathBuf,
    pub dry_run: bool,
    pub converted: Vec<ConvertedAsset>,
    pub skipped: Vec<SkippedAsset>,
    pub failures: Vec<ConversionFailure>,
    pub candidates: Vec<ReplacementCandidate>,
    pub code_files_scanned: usize,
    pub rewrites: Vec<FileRewrite>,
    pub rewrite_failures: Vec<RewriteFailure>,
    pub size_before: u64,
    pub size_after: u64,
}

impl MigrationReport {
    pub fn new(image_root: PathBuf, dry_run: bool) -> Self {
        Self {
            image_root,
            dry_run,
            ..Self::default()
        }
    }

    /// Bytes reclaimed in the image root; negative when the directory grew.
    pub fn space_saved(&self) -> i64 {
        self.size_before as i64 - self.size_after as i64
    }

    /// No conversion and no rewrite failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.rewrite_failures.is_empty()
    }

    pub fn total_substitutions(&self) -> usize {
        self.rewrites.iter().map(FileRewrite::replaced_count).sum()
    }
}
