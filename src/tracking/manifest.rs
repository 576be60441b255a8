//! The resource manifest (`resources.json`).
//!
//! The manifest records every image the game knows about. It is
//! append-only: entries are added when new files show up and never rewritten
//! or removed, so an image keeps its id for as long as the manifest exists.
//!
//! On disk it is compact JSON:
//!
//! ```json
//! {"images":[{"id":0,"name":"tile2.ff","path":"/images/tile2.ff"}]}
//! ```

use crate::fs::ResourceFs;
use crate::tracking::allocator::ImageId;
use crate::utils::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// File name of the manifest, relative to the resource root
pub const MANIFEST_FILE: &str = "resources.json";

/// One registered image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Stable identifier, unique within the manifest
    pub id: ImageId,
    /// File name including extension, e.g. `tile2.ff`
    pub name: String,
    /// Path the game loads the image from, e.g. `/images/tile2.ff`
    pub path: String,
}

impl ImageEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(id: ImageId, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The persisted list of images.
///
/// Only the `images` key is read and written; any other top-level key in an
/// existing file is dropped on the next save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Registered images, oldest first
    pub images: Vec<ImageEntry>,
}

impl Manifest {
    /// Create an empty manifest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the manifest from `path`
    ///
    /// Returns an empty manifest if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The content is not valid JSON or has no `images` list
    /// - An entry has a missing field or an id that is not a non-negative integer
    pub fn load(fs: &impl ResourceFs, path: &Path) -> Result<Self> {
        let content = match fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no manifest yet, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read manifest {}", path.display()));
            }
        };

        let manifest = Self::from_json(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
        manifest.warn_on_duplicates();

        debug!(path = %path.display(), images = manifest.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Write the manifest to `path`, replacing whatever was there
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot serialize the manifest
    /// - Cannot write to the file
    pub fn save(&self, fs: &mut impl ResourceFs, path: &Path) -> Result<()> {
        let data = self.to_json().context("Failed to serialize manifest")?;

        fs.write(path, data.as_bytes())
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

        debug!(path = %path.display(), images = self.len(), "saved manifest");
        Ok(())
    }

    /// Parse a manifest document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid manifest.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(Into::into)
    }

    /// Render the manifest as compact JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Ids of every registered image
    pub fn ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.images.iter().map(|image| image.id)
    }

    /// Lookup keys of every registered path (see [`paths::lookup_key`])
    #[must_use]
    pub fn path_keys(&self) -> HashSet<String> {
        self.images
            .iter()
            .map(|image| paths::lookup_key(&image.path))
            .collect()
    }

    /// Find the entry registered under `path`, ignoring leading `./` or `/`
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&ImageEntry> {
        let key = paths::lookup_key(path);
        self.images
            .iter()
            .find(|image| paths::lookup_key(&image.path) == key)
    }

    /// Append an entry
    pub fn push(&mut self, entry: ImageEntry) {
        self.images.push(entry);
    }

    /// Number of registered images
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no image is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Log entries of a hand-edited manifest that share an id or a path.
    ///
    /// They are kept as-is; new entries never collide with either.
    fn warn_on_duplicates(&self) {
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for image in &self.images {
            if !ids.insert(image.id) {
                warn!(id = image.id, path = %image.path, "duplicate image id in manifest");
            }
            if !keys.insert(paths::lookup_key(&image.path)) {
                warn!(id = image.id, path = %image.path, "duplicate image path in manifest");
            }
        }
    }
}
