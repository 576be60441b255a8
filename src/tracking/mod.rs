//! Bookkeeping of registered images.
//!
//! - [`crate::tracking::Manifest`] - what is registered (`resources.json`)
//! - [`crate::tracking::ImageScanner`] - what is on disk (`images/*.ff`)
//! - [`crate::tracking::IdAllocator`] - which id a newcomer gets
//!
//! # Usage
//!
//! ```no_run
//! use resman::fs::DiskFs;
//! use resman::tracking::{IdAllocator, ImageScanner, Manifest};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let fs = DiskFs::current_dir();
//! let manifest = Manifest::load(&fs, Path::new("resources.json"))?;
//! let mut ids = IdAllocator::with_used(manifest.ids());
//!
//! for file in ImageScanner::new("images", "*.ff")?.scan(&fs)? {
//!     println!("{} could get id {}", file.display(), ids.allocate()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod allocator;
pub mod manifest;
pub mod scanner;

pub use allocator::{IdAllocator, ImageId};
pub use manifest::{ImageEntry, MANIFEST_FILE, Manifest};
pub use scanner::ImageScanner;
