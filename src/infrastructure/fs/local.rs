//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use ignore::WalkBuilder;
use tempfile::NamedTempFile;

use crate::domain::ports::{FileSystem, FsError, FsResult, WalkEntry};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory that is synced and
/// then renamed over the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to a synced temp file beside `path`, then move it into place.
fn write_via_temp(path: &Path, content: &[u8], replace: bool) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| FsError::from_io(path, e))?;
    let persisted = if replace {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };
    persisted.map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        write_via_temp(path, content, true)
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        write_via_temp(path, content, false)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn walk(&self, root: &Path, visit: &mut dyn FnMut(WalkEntry<'_>)) {
        // Every file counts: no hidden-file or .gitignore filtering.
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            match entry.metadata() {
                Ok(meta) => visit(WalkEntry {
                    path: entry.path(),
                    len: meta.len(),
                }),
                Err(e) => log::warn!("cannot stat {}: {}", entry.path().display(), e),
            }
        }
    }
}
