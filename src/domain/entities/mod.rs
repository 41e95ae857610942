//! Domain Entities

mod asset;
mod candidate;
mod report;
mod rewrite;

pub use asset::{ConversionFailure, ConversionOutcome, ConvertedAsset, SkipReason, SkippedAsset};
pub use candidate::ReplacementCandidate;
pub use report::MigrationReport;
pub use rewrite::{FileRewrite, RewriteFailure, RewriteOutcome, Substitution};
