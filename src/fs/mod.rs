//! Filesystem access used by the synchronizer.
//!
//! Everything the tool touches on disk goes through [`ResourceFs`]: one
//! optional manifest read, one directory listing and one manifest write.
//! Paths handed to and returned from a `ResourceFs` are *logical* paths,
//! relative to the resource root (the directory holding `resources.json`).
//!
//! - [`DiskFs`] - the real filesystem, rooted at a directory
//! - [`MemoryFs`] - an in-memory tree used by tests

mod disk;
mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use std::io;
use std::path::{Path, PathBuf};

/// Minimal filesystem surface needed to regenerate a resource manifest.
///
/// Implementations must report a missing file or directory as an
/// [`io::ErrorKind::NotFound`] error; the manifest loader relies on it to
/// tell "no manifest yet" apart from real failures.
pub trait ResourceFs {
    /// Reads a whole UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file does not exist, or any other I/O error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Creates or truncates `path` and writes `contents` to it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Lists the regular files directly inside `dir` (not recursive).
    ///
    /// Each returned path is `dir` joined with the file name. Subdirectories
    /// are never returned.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `dir` does not exist, or any other I/O error.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}
