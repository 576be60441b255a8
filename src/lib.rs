#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Resman - Image Resource Manifest Keeper
//!
//! Resman keeps a game's `resources.json` in step with its `images/`
//! directory. Every `*.ff` image gets a stable integer id, its file name and
//! the path the game loads it from.
//!
//! ## Guarantees
//!
//! - **Stable ids**: an image keeps its id across runs; entries are never
//!   rewritten or removed
//! - **Lowest free id**: newcomers fill gaps before extending the range
//! - **No duplicates**: a path is registered at most once
//! - **Idempotent**: re-running without filesystem changes writes the same
//!   manifest
//!
//! ## Architecture
//!
//! - [`tracking`]: manifest model, image scanner and id allocator
//! - [`sync`]: the load → scan → register → write pass
//! - [`fs`]: filesystem abstraction (disk and in-memory)
//! - [`config`]: manifest/images locations and file pattern
//! - [`output`]: user-facing messages and verbosity
//!
//! ## Example Usage
//!
//! ```no_run
//! use resman::ResmanContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = ResmanContext::new()?;
//! let report = resman::sync::execute(&ctx)?;
//! println!("{} new image(s)", report.added.len());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration of manifest and image locations.
pub mod config;

/// Filesystem access behind a trait, with disk and in-memory backends.
pub mod fs;

/// Output formatting and verbosity.
pub mod output;

/// Manifest synchronization.
pub mod sync;

/// Manifest, scanner and id allocation.
pub mod tracking;

/// Utility functions and helpers.
pub mod utils;

/// Test fixtures.
mod test_utils;

use anyhow::Result;
use std::path::PathBuf;

/// Current version of the resman binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a run needs: where the resources live and how they are laid out.
///
/// # Examples
///
/// ```no_run
/// use resman::ResmanContext;
///
/// # fn main() -> anyhow::Result<()> {
/// // Working directory, `resman.toml` if present
/// let ctx = ResmanContext::new()?;
///
/// // Explicit resource root (for testing)
/// let ctx = ResmanContext::with_root("/tmp/game/assets")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResmanContext {
    /// Directory holding the manifest; all configured paths are relative to it.
    pub root: PathBuf,

    /// Loaded configuration.
    pub config: config::Config,
}

impl ResmanContext {
    /// Creates a context for the current working directory.
    ///
    /// # Errors
    /// Returns an error if `resman.toml` exists but cannot be read or is invalid.
    pub fn new() -> Result<Self> {
        Self::with_root(".")
    }

    /// Creates a context rooted at `root`, loading `root/resman.toml` if present.
    ///
    /// # Errors
    /// Returns an error if the configuration file exists but cannot be read
    /// or is invalid.
    pub fn with_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let disk = fs::DiskFs::new(&root);
        let config = config::Config::load(&disk, std::path::Path::new(config::CONFIG_FILE))?;

        Ok(Self { root, config })
    }

    /// Creates a context with an explicit configuration, ignoring `resman.toml`.
    #[must_use]
    pub fn with_config(root: impl Into<PathBuf>, config: config::Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }
}
