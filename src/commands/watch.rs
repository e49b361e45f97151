//! Watch command implementation.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::errors::{ModulizeError, Result};
use crate::reconcile::reconcile;

/// Options for the watch command.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Root of the source tree.
    pub directory: PathBuf,
    /// Bundle file to reconcile against.
    pub bundle: PathBuf,
    /// Delay between reconciliation passes, in milliseconds.
    pub poll_interval_ms: u64,
}

/// Executes the watch command: reconcile in a poll loop until interrupted.
///
/// Interruption lands between ticks; a pass that has started always runs
/// to completion, so every tick is a whole read-decide-write transaction.
pub fn watch(options: WatchOptions) -> Result<()> {
    println!(
        "Watching {} against {} (poll every {}ms)...",
        options.directory.display(),
        options.bundle.display(),
        options.poll_interval_ms
    );
    println!("Press Ctrl+C to stop.");

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .map_err(|e| ModulizeError::Watch(e.to_string()))?;

    while running.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(options.poll_interval_ms));

        // A failed pass syncs nothing; the next tick starts from scratch.
        if let Err(e) = reconcile(&options.directory, &options.bundle) {
            eprintln!("Sync error: {}", e);
        }
    }

    println!("\nGood bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    // The loop blocks until an operator interrupt; the per-tick behavior
    // is covered by the reconcile module's tests.
}
