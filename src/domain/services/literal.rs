//! Literal matcher
//!
//! Exact-text matching built on an escaped regex, kept apart from real
//! pattern matching so that path characters like `+`, `(` or `.` are never
//! interpreted.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// Matches one literal string, nothing else.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    literal: String,
    regex: Regex,
}

impl LiteralMatcher {
    pub fn new(literal: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&regex::escape(literal))?;
        Ok(Self {
            literal: literal.to_string(),
            regex,
        })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Number of non-overlapping occurrences in `haystack`
    pub fn count(&self, haystack: &str) -> usize {
        if self.literal.is_empty() {
            return 0;
        }
        self.regex.find_iter(haystack).count()
    }

    /// Replace every occurrence with `replacement`, inserted verbatim.
    pub fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        if self.literal.is_empty() {
            return Cow::Borrowed(haystack);
        }
        self.regex.replace_all(haystack, NoExpand(replacement))
    }
}
