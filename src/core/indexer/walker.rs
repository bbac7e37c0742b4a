//! Document discovery with pattern-based filtering.
//!
//! Walks a generated documentation tree and collects the (X)HTML
//! files to index. Traversal errors (permission denied, dangling
//! links) are logged and skipped. Results are sorted so document
//! ordinals are stable across runs of the same tree.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{DocdexError, Result};

/// Documentation tree walker
pub struct DocWalker {
    include_patterns: Vec<Pattern>,
    exclude_patterns: Vec<Pattern>,

    /// Files larger than this are skipped
    max_file_size_bytes: u64,
}

impl DocWalker {
    /// Create a walker from glob pattern lists.
    ///
    /// Include patterns match against the file name or the full
    /// path; an empty include list accepts every file.
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: parse_patterns(include_patterns)?,
            exclude_patterns: parse_patterns(exclude_patterns)?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect all matching files under `root`, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(DocdexError::InvalidPath(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.matches(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        // Deterministic ordinal assignment
        files.sort();
        Ok(files)
    }

    /// Hidden directories and excluded directory trees are pruned
    /// early; the root itself is never filtered.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();
        if path == root {
            return true;
        }

        if entry.file_type().is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    return false;
                }
            }
            if self.exclude_patterns.iter().any(|p| p.matches_path(path)) {
                tracing::debug!("Skipping excluded directory: {:?}", path);
                return false;
            }
        }

        true
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(path_str) = path.to_str() else {
            return false;
        };
        let file_name = path.file_name().and_then(|f| f.to_str()).unwrap_or("");

        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches(file_name));
        if !included {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| p.matches(path_str) || p.matches_path(path))
    }
}

fn parse_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| DocdexError::ConfigError(format!("Invalid pattern '{p}': {e}")))
        })
        .collect()
}
