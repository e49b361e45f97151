//! Sync command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::reconcile::reconcile;

/// Options for the sync command.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Root of the source tree.
    pub directory: PathBuf,
    /// Bundle file to reconcile against.
    pub bundle: PathBuf,
}

/// Executes the sync command: a single reconciliation pass.
pub fn sync(options: SyncOptions) -> Result<()> {
    tracing::info!("Synchronizing...");

    let report = reconcile(&options.directory, &options.bundle)?;

    if report.is_empty() {
        println!("Already in sync.");
    } else {
        println!("Resolved {} divergence(s).", report.len());
    }

    Ok(())
}
