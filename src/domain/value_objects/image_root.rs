//! Image root alias value object

use std::fmt;

/// The image root exactly as the user typed it, normalized for use inside
/// reference strings.
///
/// Backslashes become `/` and trailing slashes are dropped, so `.\public\images\`
/// and `./public/images` produce the same references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRootAlias(String);

impl ImageRootAlias {
    pub fn new(raw: &str) -> Self {
        let normalized = raw.trim().replace('\\', "/");
        let trimmed = normalized.trim_end_matches('/');
        if trimmed.is_empty() && normalized.starts_with('/') {
            return Self("/".to_string());
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImageRootAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
