//! Manifest synchronization.
//!
//! A run is strictly linear: load the manifest, scan the images directory,
//! register every file the manifest doesn't know yet, write the manifest
//! back. Nothing is written if loading or scanning fails.

use crate::ResmanContext;
use crate::config::Config;
use crate::fs::{DiskFs, ResourceFs};
use crate::output;
use crate::tracking::{IdAllocator, ImageEntry, ImageScanner, Manifest};
use crate::utils::paths;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{Level, debug, info, span};

/// Outcome of a synchronization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries appended by this run, in scan order
    pub added: Vec<ImageEntry>,
    /// Scanned files that were already registered
    pub already_registered: usize,
    /// Number of entries in the manifest that was written
    pub total: usize,
}

impl SyncReport {
    /// Whether the run registered anything
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Bring the manifest at `config.manifest_path` up to date with the images
/// in `config.images_dir`
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The manifest exists but cannot be read or parsed
/// - The images directory is missing or unreadable
/// - The manifest cannot be written
pub fn synchronize(fs: &mut impl ResourceFs, config: &Config) -> Result<SyncReport> {
    let span = span!(
        Level::DEBUG,
        "synchronize",
        manifest = %config.manifest_path.display(),
        images = %config.images_dir.display()
    );
    let _guard = span.enter();

    config.validate()?;

    let mut manifest = Manifest::load(&*fs, &config.manifest_path)?;
    let scanner = ImageScanner::new(&config.images_dir, &config.pattern)?;
    let candidates = scanner.scan(&*fs)?;

    let report = register_new_images(&mut manifest, &candidates)?;

    manifest.save(fs, &config.manifest_path)?;
    debug!(
        added = report.added.len(),
        total = report.total,
        "synchronization complete"
    );
    Ok(report)
}

/// Append an entry for every candidate the manifest doesn't know yet
///
/// Existing entries are never touched. Each new entry gets the lowest id
/// not used by the manifest or by an entry added earlier in the same call.
/// A candidate whose path is already registered, or which appears twice in
/// `candidates`, is skipped.
///
/// # Errors
///
/// Returns an error if the id space is exhausted.
pub fn register_new_images(
    manifest: &mut Manifest,
    candidates: &[PathBuf],
) -> Result<SyncReport> {
    let mut ids = IdAllocator::with_used(manifest.ids());
    let mut known = manifest.path_keys();
    let mut report = SyncReport::default();

    for candidate in candidates {
        let path = paths::manifest_path(candidate);

        if !known.insert(paths::lookup_key(&path)) {
            debug!(%path, "already registered");
            report.already_registered += 1;
            continue;
        }

        let entry = ImageEntry::new(ids.allocate()?, paths::file_name(candidate), path);
        info!(id = entry.id, path = %entry.path, "registered image");
        manifest.push(entry.clone());
        report.added.push(entry);
    }

    report.total = manifest.len();
    Ok(report)
}

/// Run a synchronization in the context's resource root and report it
///
/// # Errors
///
/// Returns an error if [`synchronize`] fails.
pub fn execute(ctx: &ResmanContext) -> Result<SyncReport> {
    let mut fs = DiskFs::new(&ctx.root);
    let report = synchronize(&mut fs, &ctx.config)?;

    for entry in &report.added {
        output::action("Registered", &format!("{} as {}", entry.path, entry.id));
    }
    output::verbose(&format!(
        "{} image(s) already registered",
        report.already_registered
    ));

    // An empty manifest is still a successful run, so this stays quiet under -q
    if report.total == 0 {
        output::info(&format!(
            "No images matching {} in {}",
            ctx.config.pattern,
            ctx.config.images_dir.display()
        ));
    }

    if report.has_changes() {
        output::success(&format!(
            "Added {} image(s) to {} ({} total)",
            report.added.len(),
            ctx.config.manifest_path.display(),
            report.total
        ));
    } else {
        output::info(&format!(
            "{} is up to date ({} total)",
            ctx.config.manifest_path.display(),
            report.total
        ));
    }

    Ok(report)
}
