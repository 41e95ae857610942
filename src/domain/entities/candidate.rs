//! Replacement candidates
//!
//! A candidate pairs a guessed reference string with its post-conversion form.

use serde::Serialize;

/// A guessed reference (`original`) and the text that replaces it (`replacement`).
///
/// The two strings share everything up to and including the final `.` of the
/// last path segment; only the extension differs. The constructor is the only
/// way to build one, so the invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReplacementCandidate {
    original: String,
    replacement: String,
    #[serde(skip)]
    stem_len: usize,
}

impl ReplacementCandidate {
    /// Build a candidate by swapping the extension of `reference` for
    /// `target_extension`.
    ///
    /// Returns `None` when the last path segment has no extension.
    pub fn swap_extension(reference: impl Into<String>, target_extension: &str) -> Option<Self> {
        let original = reference.into();
        let segment_start = original.rfind('/').map_or(0, |i| i + 1);
        let dot = segment_start + original[segment_start..].rfind('.')?;
        let stem_len = dot + 1;
        if stem_len == original.len() {
            return None;
        }

        let replacement = format!("{}{}", &original[..stem_len], target_extension);
        Some(Self {
            original,
            replacement,
            stem_len,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Extension of the original reference (without the dot)
    pub fn original_extension(&self) -> &str {
        &self.original[self.stem_len..]
    }

    /// Rebuild the original text from the replacement by swapping the extension back.
    pub fn reverse(&self) -> String {
        format!(
            "{}{}",
            &self.replacement[..self.stem_len],
            self.original_extension()
        )
    }
}
