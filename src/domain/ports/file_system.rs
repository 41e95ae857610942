//! FileSystem port - abstraction over file I/O operations
//!
//! The converter, rewriter and tree services only touch the disk through this
//! trait, so they run unchanged against the in-memory implementation in tests.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Destination already exists and may not be replaced
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Content is not valid UTF-8
    #[error("not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// Any other I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach a path to an I/O error, keeping the common kinds distinguishable.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::InvalidData => FsError::InvalidUtf8(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// A file seen during a tree walk
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    pub path: &'a Path,
    /// Size in bytes
    pub len: u64,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem {
    /// Read raw file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as UTF-8
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Write content so that readers see either the old file or the complete
    /// new one, and the data is on disk before this returns
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Like `write_atomic`, but fails with `FsError::AlreadyExists` instead of
    /// replacing a file that is already there
    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Visit every regular file under `root`, recursively, in file-name order
    fn walk(&self, root: &Path, visit: &mut dyn FnMut(WalkEntry<'_>));
}
