//! Configuration loading and management.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["modulize.toml", ".modulize.toml"];

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Entry filename assumed when the bundler input is a directory.
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Delay between reconciliation passes of the watch loop, in
    /// milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_entry_file() -> String {
    "__main__.py".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_file: default_entry_file(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Reads configuration, searching upward from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.entry_file, "__main__.py");
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modulize.toml");
        fs::write(&path, "entry_file = \"run.py\"\npoll_interval_ms = 250\n").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.entry_file, "run.py");
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modulize.toml");
        fs::write(&path, "poll_interval_ms = 50\n").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.entry_file, "__main__.py");
        assert_eq!(config.poll_interval_ms, 50);
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".modulize.toml");
        fs::write(&config_path, "").unwrap();

        let subdir = dir.path().join("sub");
        fs::create_dir(&subdir).unwrap();

        assert_eq!(find_config_file(&subdir).unwrap(), config_path);
    }

    #[test]
    fn test_read_config_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(read_config(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modulize.toml");
        fs::write(&path, "poll_interval_ms = \"fast\"\n").unwrap();
        assert!(read_config_file(&path).is_err());
    }
}
