//! Error types for the modulize system.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for modulize operations.
#[derive(Error, Debug)]
pub enum ModulizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("begin marker for {path} at line {line} has no matching end marker")]
    UnterminatedBlock { path: String, line: usize },

    #[error("not a file or directory: {0}")]
    InvalidInput(PathBuf),

    #[error("watch error: {0}")]
    Watch(String),
}

/// Result type alias for modulize operations.
pub type Result<T> = std::result::Result<T, ModulizeError>;
