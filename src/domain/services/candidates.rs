//! Reference-candidate generation
//!
//! Source files reference images in whatever style their authors chose, and
//! nothing tells us which. For every converted image we therefore emit each
//! plausible reference string. Forms that never occur in the code are harmless;
//! a style we do not generate is left dangling and has to be fixed by hand.

use std::path::{Component, Path, PathBuf};

use crate::config::CandidatesConfig;
use crate::domain::entities::{ConvertedAsset, ReplacementCandidate};
use crate::domain::value_objects::{ImageRootAlias, ReferenceForm};

/// Produces replacement candidates for converted images.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    alias: ImageRootAlias,
    image_root: PathBuf,
    public_prefix: String,
    forms: Vec<ReferenceForm>,
    extra_prefixes: Vec<String>,
}

impl CandidateGenerator {
    /// `alias` is the image root as typed by the user; `image_root` is the
    /// resolved directory the images were discovered under.
    pub fn new(alias: ImageRootAlias, image_root: impl Into<PathBuf>, config: &CandidatesConfig) -> Self {
        Self {
            alias,
            image_root: image_root.into(),
            public_prefix: config.public_prefix.trim_matches('/').to_string(),
            forms: config.forms.clone(),
            extra_prefixes: config
                .extra_prefixes
                .iter()
                .map(|p| p.trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Candidates for one converted image, in generation order.
    ///
    /// Empty when the image does not live under the image root.
    pub fn generate(&self, asset: &ConvertedAsset) -> Vec<ReplacementCandidate> {
        let Some(relative) = relative_reference(&self.image_root, &asset.original) else {
            log::warn!(
                "{} is outside {}, no references generated",
                asset.original.display(),
                self.image_root.display()
            );
            return Vec::new();
        };
        let Some(target_extension) = asset.converted_extension() else {
            return Vec::new();
        };

        self.references(&relative)
            .into_iter()
            .filter_map(|reference| ReplacementCandidate::swap_extension(reference, target_extension))
            .collect()
    }

    /// Candidates for every converted image, concatenated in order.
    pub fn collect<'a>(
        &self,
        assets: impl IntoIterator<Item = &'a ConvertedAsset>,
    ) -> Vec<ReplacementCandidate> {
        assets
            .into_iter()
            .flat_map(|asset| self.generate(asset))
            .collect()
    }

    fn references(&self, relative: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(self.forms.len() + self.extra_prefixes.len());

        for form in &self.forms {
            match form {
                ReferenceForm::Alias => out.push(self.join_alias(relative)),
                ReferenceForm::RootedAlias => out.push(format!("/{}", self.join_alias(relative))),
                ReferenceForm::RootedPublic => {
                    out.push(format!("/{}", self.join_public(relative)))
                }
                ReferenceForm::Public => out.push(self.join_public(relative)),
                ReferenceForm::Bare => out.push(relative.to_string()),
                ReferenceForm::BareUnprefixed => {
                    if let Some(stripped) = self.strip_public(relative) {
                        out.push(stripped.to_string());
                    }
                }
            }
        }

        for prefix in &self.extra_prefixes {
            out.push(format!("{}/{}", prefix, relative));
        }

        out
    }

    fn join_alias(&self, relative: &str) -> String {
        match self.alias.as_str() {
            "" => relative.to_string(),
            "/" => format!("/{}", relative),
            alias => format!("{}/{}", alias, relative),
        }
    }

    fn join_public(&self, relative: &str) -> String {
        if self.public_prefix.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.public_prefix, relative)
        }
    }

    fn strip_public<'r>(&self, relative: &'r str) -> Option<&'r str> {
        if self.public_prefix.is_empty() {
            return None;
        }
        relative
            .strip_prefix(self.public_prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }
}

/// `path` relative to `root`, joined with `/` whatever the platform.
fn relative_reference(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<_> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Option<_>>()?;
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}
