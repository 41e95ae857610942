//! Tree scanning and size reporting
//!
//! Both are thin visitors over `FileSystem::walk`, so they share one
//! traversal and see the same files.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Every file under `root` whose path relative to `root` satisfies `predicate`.
///
/// Returned paths are `root` joined with the relative path. Order follows the
/// walk (file-name order at each level). The caller must check that `root` is
/// a directory first.
pub fn scan<FS>(fs: &FS, root: &Path, predicate: impl Fn(&Path) -> bool) -> Vec<PathBuf>
where
    FS: FileSystem + ?Sized,
{
    let mut found = Vec::new();
    fs.walk(root, &mut |entry| {
        let relative = entry.path.strip_prefix(root).unwrap_or(entry.path);
        if predicate(relative) {
            found.push(entry.path.to_path_buf());
        }
    });
    found
}

/// Sum of the sizes of every file under `root`, read from the current state of
/// the file system.
pub fn total_size<FS>(fs: &FS, root: &Path) -> u64
where
    FS: FileSystem + ?Sized,
{
    let mut total = 0u64;
    fs.walk(root, &mut |entry| total += entry.len);
    total
}

/// Human-readable size: `x.xx MB` from one mebibyte up, `x.xx KB` below.
pub fn format_size(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    let kb = bytes.unsigned_abs() as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb >= 1.0 {
        format!("{sign}{mb:.2} MB")
    } else {
        format!("{sign}{kb:.2} KB")
    }
}
