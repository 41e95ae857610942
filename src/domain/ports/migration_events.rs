//! Migration Event Port
//!
//! Progress reporting for a migration run. The console sink prints these as
//! they happen; JSON mode ignores them and prints the final report instead.

use std::path::PathBuf;

use crate::domain::entities::{
    ConversionFailure, ConvertedAsset, FileRewrite, RewriteFailure, SkippedAsset,
};

/// Event emitted during a migration run
#[derive(Debug, Clone)]
pub enum MigrationEvent {
    /// Conversion phase started
    Started {
        image_root: PathBuf,
        image_count: usize,
        dry_run: bool,
    },

    /// Image converted (or would be, in a dry run)
    Converted {
        index: usize,
        total: usize,
        asset: ConvertedAsset,
    },

    /// Image left alone
    Skipped {
        index: usize,
        total: usize,
        asset: SkippedAsset,
    },

    /// Image conversion failed
    ConversionFailed {
        index: usize,
        total: usize,
        failure: ConversionFailure,
    },

    /// Reference rewriting started
    RewriteStarted {
        file_count: usize,
        candidate_count: usize,
    },

    /// Code file updated
    FileRewritten { rewrite: FileRewrite },

    /// Code file could not be read or written
    RewriteFailed { failure: RewriteFailure },

    /// Run finished
    Completed {
        converted: usize,
        skipped: usize,
        failed: usize,
        files_rewritten: usize,
        substitutions: usize,
    },
}

/// Trait for receiving migration events
pub trait MigrationEventSink {
    /// Handle a migration event
    fn on_event(&self, event: MigrationEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl MigrationEventSink for NoopEventSink {
    fn on_event(&self, _event: MigrationEvent) {}
}
