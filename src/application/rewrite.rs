//! Codebase reference rewriting
//!
//! Applies replacement candidates to code files as exact-text substitutions.
//! Candidates run in order against the progressively updated content, so a
//! later candidate sees the output of earlier ones.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::domain::entities::{
    FileRewrite, ReplacementCandidate, RewriteFailure, RewriteOutcome, Substitution,
};
use crate::domain::ports::{FileSystem, MigrationEvent, MigrationEventSink};
use crate::domain::services::LiteralMatcher;

/// Candidates compiled into literal matchers, ready to apply to many files.
#[derive(Debug, Clone)]
pub struct ReplacementRules {
    rules: Vec<(LiteralMatcher, String)>,
}

impl ReplacementRules {
    pub fn compile(candidates: &[ReplacementCandidate]) -> Self {
        let rules = candidates
            .iter()
            .filter_map(|c| match LiteralMatcher::new(c.original()) {
                Ok(matcher) => Some((matcher, c.replacement().to_string())),
                Err(e) => {
                    log::warn!("ignoring candidate {:?}: {}", c.original(), e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order. `None` when nothing matched.
    pub fn apply(&self, content: &str) -> Option<(String, Vec<Substitution>)> {
        let mut current = content.to_string();
        let mut substitutions = Vec::new();

        for (matcher, replacement) in &self.rules {
            let count = matcher.count(&current);
            if count == 0 {
                continue;
            }
            current = matcher.replace_all(&current, replacement).into_owned();
            substitutions.push(Substitution {
                from: matcher.literal().to_string(),
                to: replacement.clone(),
                count,
            });
        }

        if substitutions.is_empty() {
            None
        } else {
            Some((current, substitutions))
        }
    }
}

/// Options for the reference rewriter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Compute substitutions and diffs without writing
    pub dry_run: bool,
}

/// Rewrites references in code files
pub struct ReferenceRewriter<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ReferenceRewriter<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Rewrite every file in `files` with `candidates`.
    ///
    /// Files without a match are never written. Read and write errors are
    /// recorded and the batch moves on.
    pub fn rewrite(
        &self,
        files: &[PathBuf],
        candidates: &[ReplacementCandidate],
        options: RewriteOptions,
        events: &dyn MigrationEventSink,
    ) -> RewriteOutcome {
        let rules = ReplacementRules::compile(candidates);
        let mut outcome = RewriteOutcome::default();
        if rules.is_empty() {
            return outcome;
        }
        log::debug!("applying {} replacement rules to {} files", rules.len(), files.len());

        for path in files {
            match self.rewrite_file(path, &rules, options) {
                Ok(Some(rewrite)) => {
                    events.on_event(MigrationEvent::FileRewritten {
                        rewrite: rewrite.clone(),
                    });
                    outcome.rewrites.push(rewrite);
                }
                Ok(None) => {}
                Err(failure) => {
                    log::warn!("cannot rewrite {}: {}", failure.path.display(), failure.error);
                    events.on_event(MigrationEvent::RewriteFailed {
                        failure: failure.clone(),
                    });
                    outcome.failures.push(failure);
                }
            }
        }

        outcome
    }

    fn rewrite_file(
        &self,
        path: &Path,
        rules: &ReplacementRules,
        options: RewriteOptions,
    ) -> Result<Option<FileRewrite>, RewriteFailure> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| RewriteFailure::new(path, e))?;

        let Some((updated, substitutions)) = rules.apply(&content) else {
            return Ok(None);
        };

        let diff = if options.dry_run {
            Some(unified_diff(path, &content, &updated))
        } else {
            self.fs
                .write_atomic(path, updated.as_bytes())
                .map_err(|e| RewriteFailure::new(path, e))?;
            None
        };

        log::debug!(
            "{} {} ({} substitutions)",
            if options.dry_run { "would update" } else { "updated" },
            path.display(),
            substitutions.len()
        );

        Ok(Some(FileRewrite {
            path: path.to_path_buf(),
            substitutions,
            diff,
        }))
    }
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(1)
        .header(&name, &name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::migration_events::tests::RecordingEventSink;
    use crate::domain::ports::NoopEventSink;
    use crate::infrastructure::fs::MemoryFs;

    fn candidates(pairs: &[&str]) -> Vec<ReplacementCandidate> {
        pairs
            .iter()
            .map(|p| ReplacementCandidate::swap_extension(*p, "webp").unwrap())
            .collect()
    }

    #[test]
    fn apply_replaces_every_occurrence_and_counts() {
        let rules = ReplacementRules::compile(&candidates(&["/images/logo.png"]));
        let (out, subs) = rules
            .apply(r#"<img src="/images/logo.png"> url(/images/logo.png)"#)
            .unwrap();

        assert_eq!(out, r#"<img src="/images/logo.webp"> url(/images/logo.webp)"#);
        assert_eq!(
            subs,
            vec![Substitution {
                from: "/images/logo.png".to_string(),
                to: "/images/logo.webp".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn apply_returns_none_without_matches() {
        let rules = ReplacementRules::compile(&candidates(&["logo.png"]));
        assert!(rules.apply("const x = 'logo.svg';").is_none());
    }

    #[test]
    fn earlier_candidates_shadow_later_overlapping_ones() {
        let rules = ReplacementRules::compile(&candidates(&["/images/logo.png", "logo.png"]));
        let (out, subs) = rules.apply("a /images/logo.png b logo.png").unwrap();

        assert_eq!(out, "a /images/logo.webp b logo.webp");
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].count, 1);
        assert_eq!(subs[1].count, 1);
    }

    #[test]
    fn duplicate_candidates_are_idempotent() {
        let rules = ReplacementRules::compile(&candidates(&["a.png", "a.png"]));
        let (out, subs) = rules.apply("a.png").unwrap();
        assert_eq!(out, "a.webp");
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn rewrite_updates_matching_files_only() {
        let fs = MemoryFs::new();
        fs.insert("/p/src/App.vue", r#"<img src="/images/logo.png" />"#);
        fs.insert("/p/src/util.js", "export const x = 1;\n");

        let files = vec![PathBuf::from("/p/src/App.vue"), PathBuf::from("/p/src/util.js")];
        let sink = RecordingEventSink::default();
        let outcome = ReferenceRewriter::new(fs.clone()).rewrite(
            &files,
            &candidates(&["/images/logo.png"]),
            RewriteOptions::default(),
            &sink,
        );

        assert_eq!(outcome.rewrites.len(), 1);
        assert_eq!(outcome.rewrites[0].path, PathBuf::from("/p/src/App.vue"));
        assert!(outcome.rewrites[0].diff.is_none());
        assert_eq!(
            fs.get_string("/p/src/App.vue").unwrap(),
            r#"<img src="/images/logo.webp" />"#
        );
        assert_eq!(fs.get_string("/p/src/util.js").unwrap(), "export const x = 1;\n");
        assert_eq!(fs.write_count(), 1);
        assert_eq!(sink.events.borrow().len(), 1);
    }

    #[test]
    fn second_pass_changes_nothing() {
        let fs = MemoryFs::new();
        fs.insert("/p/a.css", ".hero { background: url(images/hero.png); }");
        let files = vec![PathBuf::from("/p/a.css")];
        let cands = candidates(&["/images/hero.png", "images/hero.png", "hero.png"]);
        let rewriter = ReferenceRewriter::new(fs.clone());

        let first = rewriter.rewrite(&files, &cands, RewriteOptions::default(), &NoopEventSink);
        let second = rewriter.rewrite(&files, &cands, RewriteOptions::default(), &NoopEventSink);

        assert_eq!(first.total_substitutions(), 1);
        assert!(second.rewrites.is_empty());
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn read_failures_are_recorded_and_batch_continues() {
        let fs = MemoryFs::new();
        fs.insert("/p/locked.js", "logo.png");
        fs.fail_read("/p/locked.js");
        fs.insert("/p/binary.js", vec![0xff, 0xfe, b'l']);
        fs.insert("/p/ok.js", "'logo.png'");

        let files = vec![
            PathBuf::from("/p/binary.js"),
            PathBuf::from("/p/locked.js"),
            PathBuf::from("/p/ok.js"),
        ];
        let outcome = ReferenceRewriter::new(fs.clone()).rewrite(
            &files,
            &candidates(&["logo.png"]),
            RewriteOptions::default(),
            &NoopEventSink,
        );

        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.rewrites.len(), 1);
        assert_eq!(fs.get_string("/p/ok.js").unwrap(), "'logo.webp'");
    }

    #[test]
    fn write_failure_is_recorded() {
        let fs = MemoryFs::new();
        fs.insert("/p/a.js", "logo.png");
        fs.fail_write("/p/a.js");

        let outcome = ReferenceRewriter::new(fs.clone()).rewrite(
            &[PathBuf::from("/p/a.js")],
            &candidates(&["logo.png"]),
            RewriteOptions::default(),
            &NoopEventSink,
        );

        assert!(outcome.rewrites.is_empty());
        assert_eq!(outcome.failures[0].path, PathBuf::from("/p/a.js"));
        assert_eq!(fs.get_string("/p/a.js").unwrap(), "logo.png");
    }

    #[test]
    fn dry_run_reports_diff_without_writing() {
        let fs = MemoryFs::new();
        fs.insert("/p/index.html", "<h1>Hi</h1>\n<img src=\"img/a.png\">\n");

        let outcome = ReferenceRewriter::new(fs.clone()).rewrite(
            &[PathBuf::from("/p/index.html")],
            &candidates(&["img/a.png"]),
            RewriteOptions { dry_run: true },
            &NoopEventSink,
        );

        let diff = outcome.rewrites[0].diff.as_deref().unwrap();
        assert!(diff.contains("-<img src=\"img/a.png\">"));
        assert!(diff.contains("+<img src=\"img/a.webp\">"));
        assert_eq!(fs.write_count(), 0);
        assert!(fs.get_string("/p/index.html").unwrap().contains("a.png"));
    }
}
