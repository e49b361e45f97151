//! Command implementations.

mod bundle;
mod sync;
mod watch;

pub use bundle::{bundle, BundleOptions};
pub use sync::{sync, SyncOptions};
pub use watch::{watch, WatchOptions};
