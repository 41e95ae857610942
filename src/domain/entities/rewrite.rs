//! Rewrite results for code files

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One candidate that matched inside a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
    /// Number of occurrences replaced
    pub count: usize,
}

/// A code file whose references were updated (or would be, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub substitutions: Vec<Substitution>,
    /// Unified diff of the change, only computed for dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl FileRewrite {
    pub fn replaced_count(&self) -> usize {
        self.substitutions.iter().map(|s| s.count).sum()
    }
}

/// A code file that could not be read or written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteFailure {
    pub path: PathBuf,
    pub error: String,
}

impl RewriteFailure {
    pub fn new(path: &Path, error: impl fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            error: error.to_string(),
        }
    }
}

/// Everything the rewriter did across the code tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteOutcome {
    pub rewrites: Vec<FileRewrite>,
    pub failures: Vec<RewriteFailure>,
}

impl RewriteOutcome {
    pub fn total_substitutions(&self) -> usize {
        self.rewrites.iter().map(FileRewrite::replaced_count).sum()
    }
}
