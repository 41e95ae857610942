//! Migration request and plan

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::ImageRootAlias;

/// What the user asked for, with paths resolved against the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Image root as typed, used to build references
    pub alias: ImageRootAlias,
    /// Image root resolved to a directory
    pub image_root: PathBuf,
    /// Directory searched for code files
    pub project_root: PathBuf,
    pub dry_run: bool,
}

impl MigrationRequest {
    /// Resolve `typed` (and `project_root`, defaulting to `cwd`) against `cwd`.
    pub fn new(typed: &str, cwd: &Path, project_root: Option<&Path>, dry_run: bool) -> Self {
        let alias = ImageRootAlias::new(typed);
        let image_root = normalize(&cwd.join(alias.as_str()));
        let project_root = match project_root {
            Some(root) => normalize(&cwd.join(root)),
            None => normalize(cwd),
        };
        Self {
            alias,
            image_root,
            project_root,
            dry_run,
        }
    }
}

/// A validated request plus the images it will convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    pub request: MigrationRequest,
    pub images: Vec<PathBuf>,
}

impl MigrationPlan {
    pub fn image_root(&self) -> &Path {
        &self.request.image_root
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Lexically drop `.` and resolve `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
