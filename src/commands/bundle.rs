//! Bundle command implementation.

use std::path::PathBuf;

use crate::config::Config;
use crate::errors::{ModulizeError, Result};
use crate::writer::write_bundle;

/// Options for the bundle command.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Entry file or package directory.
    pub input: PathBuf,
    /// Bundle file to write.
    pub output: PathBuf,
}

/// Executes the bundle command.
///
/// A file input names the entry directly; a directory input implies the
/// configured entry filename inside it. Anything else is a usage error.
pub fn bundle(config: &Config, options: BundleOptions) -> Result<()> {
    tracing::info!("Bundling {}...", options.input.display());

    let (root, entry) = if options.input.is_file() {
        let root = match options.input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let entry = options
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ModulizeError::InvalidInput(options.input.clone()))?;
        (root, entry)
    } else if options.input.is_dir() {
        (options.input.clone(), config.entry_file.clone())
    } else {
        return Err(ModulizeError::InvalidInput(options.input.clone()));
    };

    write_bundle(&root, &entry, &options.output)?;

    println!("Successfully combined files.");
    Ok(())
}
