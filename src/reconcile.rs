//! Bidirectional reconciliation between a bundle and its source tree.

use std::path::Path;

use crate::errors::Result;
use crate::extract::extract_file;
use crate::io::{mtime, read_lines, write_lines};
use crate::model::Block;

/// What one reconciliation pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Source paths overwritten from their bundle block.
    pub files_updated: Vec<String>,
    /// Source paths whose bundle block was rewritten from disk.
    pub blocks_updated: Vec<String>,
}

impl SyncReport {
    /// Total number of writes performed.
    pub fn len(&self) -> usize {
        self.files_updated.len() + self.blocks_updated.len()
    }

    /// Returns true if the pass found nothing to do.
    pub fn is_empty(&self) -> bool {
        self.files_updated.is_empty() && self.blocks_updated.is_empty()
    }
}

/// Runs one reconciliation pass.
///
/// The bundle's mtime is taken once, before any block is examined, so a
/// pass that rewrites the bundle does not see its own writes as fresh
/// edits. Blocks are processed bottom-up: splicing a span moves the line
/// offsets of everything above it, and the blocks above are exactly the
/// ones not yet processed in a reverse walk.
pub fn reconcile(source_root: &Path, bundle_path: &Path) -> Result<SyncReport> {
    let bundle_mtime = mtime(bundle_path)?;
    let blocks = extract_file(bundle_path)?;
    let mut report = SyncReport::default();

    for block in blocks.iter().rev() {
        let source_path = source_root.join(&block.path);
        let source_lines = read_lines(&source_path)?;
        if source_lines == block.lines {
            continue;
        }

        if bundle_mtime > mtime(&source_path)? {
            write_lines(&source_path, &block.lines)?;
            tracing::info!(file = %block.path, "updated source file from bundle");
            println!("Syncing {} to match {}", block.path, bundle_path.display());
            report.files_updated.push(block.path.clone());
        } else {
            splice_block(bundle_path, block, &source_lines)?;
            tracing::info!(file = %block.path, "updated bundle block from source file");
            println!("Syncing {} to match {}", bundle_path.display(), block.path);
            report.blocks_updated.push(block.path.clone());
        }
    }

    Ok(report)
}

/// Replaces a block's body span inside the bundle with `lines`, each
/// re-indented by the block's recorded indent. Marker lines and every
/// other bundle line stay untouched.
fn splice_block(bundle_path: &Path, block: &Block, lines: &[String]) -> Result<()> {
    let mut contents = read_lines(bundle_path)?;
    let replacement = crate::model::indent_lines(lines, block.indent);
    contents.splice(block.start..block.end, replacement);
    write_lines(bundle_path, &contents)?;
    Ok(())
}
