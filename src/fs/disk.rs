use super::ResourceFs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// [`ResourceFs`] backed by the real filesystem.
///
/// Logical paths are resolved against `root`; absolute paths are used as-is.
#[derive(Debug, Clone)]
pub struct DiskFs {
    /// Directory that logical paths are relative to
    root: PathBuf,
}

impl DiskFs {
    /// Create a filesystem rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem rooted at the process working directory
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Resolve a logical path against the root
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for DiskFs {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl ResourceFs for DiskFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(self.resolve(path), contents)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let abs_dir = self.resolve(dir);

        // walkdir yields nothing for a non-directory root at depth 1
        if !fs::metadata(&abs_dir)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", abs_dir.display()),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&abs_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;

            // Symlinks count when their target is a regular file
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file {
                files.push(dir.join(entry.file_name()));
            } else {
                debug!(path = %entry.path().display(), "skipping non-file entry");
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_is_shallow_and_sorted() -> Result<()> {
        let temp = TempDir::new()?;
        let images = temp.path().join("images");
        fs::create_dir_all(images.join("nested"))?;
        fs::write(images.join("b.ff"), b"b")?;
        fs::write(images.join("a.ff"), b"a")?;
        fs::write(images.join("nested/c.ff"), b"c")?;

        let disk = DiskFs::new(temp.path());
        let files = disk.list_files(Path::new("./images"))?;

        assert_eq!(
            files,
            vec![PathBuf::from("./images/a.ff"), PathBuf::from("./images/b.ff")]
        );
        Ok(())
    }

    #[test]
    fn test_list_files_missing_dir_is_not_found() -> Result<()> {
        let temp = TempDir::new()?;
        let disk = DiskFs::new(temp.path());

        let err = disk.list_files(Path::new("images")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        Ok(())
    }

    #[test]
    fn test_list_files_on_regular_file_fails() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("images"), b"not a dir")?;
        let disk = DiskFs::new(temp.path());

        let err = disk.list_files(Path::new("images")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_follows_file_symlinks() -> Result<()> {
        let temp = TempDir::new()?;
        let images = temp.path().join("images");
        fs::create_dir_all(&images)?;
        fs::write(temp.path().join("real.ff"), b"x")?;
        std::os::unix::fs::symlink(temp.path().join("real.ff"), images.join("link.ff"))?;
        std::os::unix::fs::symlink(temp.path().join("gone.ff"), images.join("dangling.ff"))?;

        let disk = DiskFs::new(temp.path());
        let files = disk.list_files(Path::new("images"))?;

        assert_eq!(files, vec![PathBuf::from("images/link.ff")]);
        Ok(())
    }

    #[test]
    fn test_read_and_write_resolve_against_root() -> Result<()> {
        let temp = TempDir::new()?;
        let mut disk = DiskFs::new(temp.path());

        disk.write(Path::new("resources.json"), b"{}")?;
        assert_eq!(disk.read_to_string(Path::new("resources.json"))?, "{}");
        assert!(temp.path().join("resources.json").exists());

        let err = disk.read_to_string(Path::new("missing.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        Ok(())
    }
}
