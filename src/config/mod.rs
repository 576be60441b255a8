//! Where the manifest and the images live.
//!
//! Every field has a default matching the layout the game expects, so the
//! tool runs without any configuration. A `resman.toml` next to the manifest
//! can override them:
//!
//! ```toml
//! manifest_path = "resources.json"
//! images_dir = "images"
//! pattern = "*.ff"
//! ```

pub mod parser;

use crate::fs::ResourceFs;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional configuration file, relative to the resource root
pub const CONFIG_FILE: &str = "resman.toml";

/// Default images directory
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Default image file name pattern
pub const DEFAULT_PATTERN: &str = "*.ff";

/// Locations used by a synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Manifest location, relative to the resource root
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    /// Directory scanned for images, relative to the resource root
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Glob matched against image file names
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

/// `resources.json`
fn default_manifest_path() -> PathBuf {
    PathBuf::from(crate::tracking::MANIFEST_FILE)
}

/// `images`
fn default_images_dir() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGES_DIR)
}

/// `*.ff`
fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            images_dir: default_images_dir(),
            pattern: default_pattern(),
        }
    }
}

impl Config {
    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file is not valid TOML or has unknown keys
    /// - A value fails validation
    pub fn load(fs: &impl ResourceFs, path: &Path) -> Result<Self> {
        match fs.read_to_string(path) {
            Ok(content) => parser::parse_config_str(&content)
                .with_context(|| format!("Invalid config file: {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file: {}", path.display()))
            }
        }
    }

    /// Check the values make sense
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        parser::validate_config(self)
    }
}
