//! In-memory File System
//!
//! A `FileSystem` backed by a sorted map, for tests. Clones share state.
//! Individual paths can be made to fail on read, write or remove.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::ports::{FileSystem, FsError, FsResult, WalkEntry};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_read: HashSet<PathBuf>,
    fail_write: HashSet<PathBuf>,
    fail_remove: HashSet<PathBuf>,
    writes: usize,
}

/// In-memory file system
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Rc<RefCell<State>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.state
            .borrow_mut()
            .files
            .insert(path.into(), content.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.borrow().files.get(path.as_ref()).cloned()
    }

    pub fn get_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.get(path).and_then(|b| String::from_utf8(b).ok())
    }

    pub fn fail_read(&self, path: impl Into<PathBuf>) {
        self.state.borrow_mut().fail_read.insert(path.into());
    }

    pub fn fail_write(&self, path: impl Into<PathBuf>) {
        self.state.borrow_mut().fail_write.insert(path.into());
    }

    pub fn fail_remove(&self, path: impl Into<PathBuf>) {
        self.state.borrow_mut().fail_remove.insert(path.into());
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// All file paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.state.borrow().files.keys().cloned().collect()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        let state = self.state.borrow();
        if state.fail_read.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| FsError::InvalidUtf8(path.to_path_buf()))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_write.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        state.writes += 1;
        Ok(())
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.state.borrow().files.contains_key(path) {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        self.write_atomic(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.borrow().files.contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state
            .borrow()
            .files
            .keys()
            .any(|p| p != path && p.starts_with(path))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_remove.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn walk(&self, root: &Path, visit: &mut dyn FnMut(WalkEntry<'_>)) {
        // Snapshot first so visitors may call back into the file system.
        let entries: Vec<(PathBuf, u64)> = self
            .state
            .borrow()
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(root) && p.as_path() != root)
            .map(|(p, c)| (p.clone(), c.len() as u64))
            .collect();

        for (path, len) in &entries {
            visit(WalkEntry { path, len: *len });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFs::new();
        let other = fs.clone();
        other.insert("/a.txt", "hi");
        assert_eq!(fs.get_string("/a.txt").as_deref(), Some("hi"));
    }

    #[test]
    fn directories_are_implied_by_files() {
        let fs = MemoryFs::new();
        fs.insert("/p/img/a.png", vec![1]);
        assert!(fs.is_dir(Path::new("/p/img")));
        assert!(fs.exists(Path::new("/p")));
        assert!(!fs.is_dir(Path::new("/p/img/a.png")));
    }

    #[test]
    fn injected_failures() {
        let fs = MemoryFs::new();
        fs.insert("/a.png", vec![1]);
        fs.fail_remove("/a.png");
        assert!(fs.remove(Path::new("/a.png")).is_err());
        assert!(fs.get("/a.png").is_some());
    }

    #[test]
    fn write_new_keeps_existing_file() {
        let fs = MemoryFs::new();
        fs.insert("/a.webp", "OLD");

        let err = fs.write_new(Path::new("/a.webp"), b"NEW").unwrap_err();

        assert!(matches!(err, FsError::AlreadyExists(_)));
        assert_eq!(fs.get("/a.webp").unwrap(), b"OLD");
        assert_eq!(fs.write_count(), 0);
    }
}
