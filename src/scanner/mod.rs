mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, StringRayError};
use crate::extractor::FileInput;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Walk `root` in file-name order. Filters see paths relative to `root`;
    /// a root that is itself a file is always kept.
    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }
        if !root.exists() {
            return Err(StringRayError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
            });
        }

        Ok(WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let relative = e.path().strip_prefix(root).unwrap_or_else(|_| e.path());
                self.filter.should_include(relative)
            })
            .map(walkdir::DirEntry::into_path)
            .collect())
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = self.scan_impl(root)?;
        debug!(root = %root.display(), files = files.len(), "scanned");
        Ok(files)
    }
}

/// The path as reported in results: forward slashes, no leading `./`.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let path = path.strip_prefix(".").unwrap_or(path);
    path.to_string_lossy().replace('\\', "/")
}

/// Read every file in parallel, keeping the input order. Invalid UTF-8 is
/// replaced rather than rejected.
///
/// # Errors
/// Returns `FileRead` for the first file that cannot be read.
pub fn read_files(paths: &[PathBuf]) -> Result<Vec<FileInput>> {
    paths
        .par_iter()
        .map(|path| {
            let bytes = std::fs::read(path).map_err(|source| StringRayError::FileRead {
                path: path.clone(),
                source,
            })?;
            Ok(FileInput::new(
                display_path(path),
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
