//! Path predicates for discovery

use std::path::{Component, Path};

/// Matches files by extension while rejecting anything inside an excluded
/// directory.
///
/// Extensions compare ASCII case-insensitively. A directory is excluded when
/// one of the path's components equals an excluded name exactly, so `dist/`
/// is skipped but `distribution/` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
}

impl PathFilter {
    pub fn new<E, D>(extensions: E, exclude_dirs: D) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            exclude_dirs: exclude_dirs
                .into_iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.has_extension(path) && !self.is_excluded(path)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let parent = path.parent().unwrap_or(Path::new(""));
        parent.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|n| self.exclude_dirs.iter().any(|d| d == n)),
            _ => false,
        })
    }
}
