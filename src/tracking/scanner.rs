//! Image directory scanner.
//!
//! Lists the files directly inside the images directory whose name matches
//! the configured glob pattern (`*.ff` by default). The scan is shallow:
//! subdirectories are neither returned nor descended into.

use crate::fs::ResourceFs;
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span, warn};

/// Name matching follows shell globbing: case-sensitive, and a leading `.`
/// must be matched literally so hidden files are skipped by `*.ff`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Scanner for candidate image files
#[derive(Debug, Clone)]
pub struct ImageScanner {
    /// Directory to scan, as configured (relative to the resource root)
    images_dir: PathBuf,
    /// Compiled file name pattern
    pattern: Pattern,
}

impl ImageScanner {
    /// Create a scanner for `images_dir` matching file names against `pattern`
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid glob pattern.
    pub fn new(images_dir: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern)
            .with_context(|| format!("Invalid image file pattern: {pattern}"))?;
        Ok(Self {
            images_dir: images_dir.into(),
            pattern,
        })
    }

    /// The directory that is listed, in the form candidates are reported in.
    ///
    /// A relative directory is prefixed with `./` (`images` becomes
    /// `./images`), an absolute one is used as-is.
    #[must_use]
    pub fn scan_dir(&self) -> PathBuf {
        if self.images_dir.is_absolute() || self.images_dir.starts_with(".") {
            self.images_dir.clone()
        } else {
            Path::new(".").join(&self.images_dir)
        }
    }

    /// Whether a file name matches the pattern
    ///
    /// Hidden names only match a pattern that itself starts with `.`; the
    /// glob options alone would still let `*.ff` match a file named `.ff`.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') && !self.pattern.as_str().starts_with('.') {
            return false;
        }
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }

    /// List every matching regular file, in the order the filesystem reports
    ///
    /// # Errors
    ///
    /// Returns an error if the images directory is missing or unreadable.
    pub fn scan(&self, fs: &impl ResourceFs) -> Result<Vec<PathBuf>> {
        let dir = self.scan_dir();
        let span = span!(Level::DEBUG, "scan", dir = %dir.display(), pattern = %self.pattern);
        let _guard = span.enter();

        let files = fs
            .list_files(&dir)
            .with_context(|| format!("Failed to read image directory {}", dir.display()))?;

        let candidates: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| {
                let Some(name) = path.file_name() else {
                    return false;
                };
                if name.to_str().is_none() {
                    warn!(
                        path = %path.display(),
                        "file name is not valid UTF-8, registering lossy name"
                    );
                }
                self.matches(&name.to_string_lossy())
            })
            .collect();

        debug!(candidates = candidates.len(), "scan complete");
        Ok(candidates)
    }
}
