//! Modulize - single-file Python bundler and synchronizer
//!
//! This library bundles a multi-file Python source tree into one runnable
//! file and keeps the two representations mutually consistent afterwards.
//!
//! # Features
//!
//! - **Bundle**: walk import statements from an entry file and emit every
//!   discovered module as a marked block in one output file
//! - **Sync**: compare each block against its source file and propagate
//!   edits toward whichever side is stale, block by block
//! - **Watch**: poll continuously, reconciling on every tick
//!
//! # Example
//!
//! ```no_run
//! use modulize::commands::{bundle, BundleOptions};
//! use modulize::Config;
//!
//! let options = BundleOptions {
//!     input: "my_package".into(),
//!     output: "_combined.py".into(),
//! };
//! bundle(&Config::default(), options).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod discover;
pub mod errors;
pub mod extract;
pub mod imports;
pub mod io;
pub mod markers;
pub mod model;
pub mod reconcile;
pub mod templates;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ModulizeError, Result};
pub use model::{Block, SourceModule};
pub use reconcile::SyncReport;

// Re-export command options
pub use commands::{BundleOptions, SyncOptions, WatchOptions};
