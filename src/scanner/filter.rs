use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StringRayError};

pub trait FileFilter {
    /// `path` is relative to the scanned root.
    fn should_include(&self, path: &Path) -> bool;
}

pub struct GlobFilter {
    include_patterns: GlobSet,
    exclude_patterns: GlobSet,
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| StringRayError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| StringRayError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

impl GlobFilter {
    /// Create a filter that keeps paths matching any include pattern and no
    /// exclude pattern. No include patterns means everything is included.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            include_patterns: build_set(include_patterns)?,
            exclude_patterns: build_set(exclude_patterns)?,
        })
    }

    fn is_included(&self, path: &Path) -> bool {
        self.include_patterns.is_empty() || self.include_patterns.is_match(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_included(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
