use super::ResourceFs;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};

/// In-memory [`ResourceFs`] for tests.
///
/// `./images/a.ff` and `images/a.ff` name the same file. Adding a file
/// creates all of its parent directories.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    /// File contents keyed by normalized path
    files: BTreeMap<PathBuf, Vec<u8>>,
    /// Known directories, including every parent of every file
    dirs: BTreeSet<PathBuf>,
    /// When set, every write fails with `PermissionDenied`
    read_only: bool,
}

impl MemoryFs {
    /// Create an empty filesystem containing only the root directory
    #[must_use]
    pub fn new() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::new());
        Self {
            files: BTreeMap::new(),
            dirs,
            read_only: false,
        }
    }

    /// Builder form of [`MemoryFs::add_file`]
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.add_file(path, contents);
        self
    }

    /// Builder form of [`MemoryFs::add_dir`]
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Add (or replace) a file, creating its parent directories
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let key = Self::key(path.as_ref());
        if let Some(parent) = key.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files.insert(key, contents.as_ref().to_vec());
    }

    /// Add a directory and all of its parents
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let key = Self::key(path.as_ref());
        for ancestor in key.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Make every subsequent write fail
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Contents of a file as a string, if it exists
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .get(&Self::key(path.as_ref()))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Whether a file exists at `path`
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(&Self::key(path.as_ref()))
    }

    /// Drop `.` components so equivalent spellings share one key
    fn key(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// `NotFound` error for a path
    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self
            .files
            .get(&Self::key(path))
            .ok_or_else(|| Self::not_found(path))?;
        String::from_utf8(bytes.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }

        let key = Self::key(path);
        let parent_exists = key
            .parent()
            .is_none_or(|parent| self.dirs.contains(parent));
        if !parent_exists {
            return Err(Self::not_found(path));
        }
        if self.dirs.contains(&key) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            ));
        }

        self.files.insert(key, contents.to_vec());
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let key = Self::key(dir);
        if !self.dirs.contains(&key) {
            if self.files.contains_key(&key) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("{} is not a directory", dir.display()),
                ));
            }
            return Err(Self::not_found(dir));
        }

        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(key.as_path()))
            .filter_map(|path| path.file_name())
            .map(|name| dir.join(name))
            .collect())
    }
}
