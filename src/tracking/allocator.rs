//! Allocation of image ids.
//!
//! New images always take the smallest non-negative id that nothing else
//! uses, so gaps left in a hand-edited manifest get filled first.

use anyhow::{Context, Result};
use std::collections::BTreeSet;

/// Image identifier as stored in the manifest
pub type ImageId = u32;

/// Hands out the lowest unused id, one at a time.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    /// Every id already taken, by the manifest or by this allocator
    used: BTreeSet<ImageId>,
    /// No id below this is free
    floor: ImageId,
}

impl IdAllocator {
    /// Create an allocator with nothing in use
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator seeded with ids that are already taken
    #[must_use]
    pub fn with_used(used: impl IntoIterator<Item = ImageId>) -> Self {
        Self {
            used: used.into_iter().collect(),
            floor: 0,
        }
    }

    /// Return the smallest free id and mark it used
    ///
    /// Ids are only ever added, so the smallest free id never decreases and
    /// the search resumes where the previous one stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if every representable id is in use.
    pub fn allocate(&mut self) -> Result<ImageId> {
        while self.used.contains(&self.floor) {
            self.floor = self
                .floor
                .checked_add(1)
                .context("No free image id left")?;
        }
        let id = self.floor;
        self.used.insert(id);
        Ok(id)
    }
}
