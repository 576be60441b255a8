use anyhow::Result;
use assert_cmd::Command;
use resman::tracking::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Resource root fixture: a temp directory with an `images/` folder
pub struct TestRoot {
    pub temp_dir: TempDir,
}

impl TestRoot {
    /// Create a root with an empty images directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("images"))?;
        Ok(Self { temp_dir })
    }

    /// Get the temporary directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the root, creating parents
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Add an image file to `images/`
    pub fn image(&self, name: &str) -> Result<PathBuf> {
        self.write(&format!("images/{name}"), "farbfeld")
    }

    /// Raw manifest text
    pub fn manifest_text(&self) -> Result<String> {
        Ok(fs::read_to_string(self.path().join("resources.json"))?)
    }

    /// Parsed manifest
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::from_json(&self.manifest_text()?)
    }

    /// The resman binary, run inside the root
    pub fn resman(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("resman")?;
        cmd.current_dir(self.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
        Ok(cmd)
    }
}
