//! File timestamp access.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::Result;

/// Returns a file's modification time.
pub fn mtime(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.modified()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_mtime_ordering() {
        let dir = tempdir().unwrap();
        let older = dir.path().join("older.py");
        let newer = dir.path().join("newer.py");
        fs::write(&older, "a").unwrap();
        fs::write(&newer, "b").unwrap();

        let later = SystemTime::now() + Duration::from_secs(60);
        fs::File::options()
            .write(true)
            .open(&newer)
            .unwrap()
            .set_modified(later)
            .unwrap();

        assert!(mtime(&newer).unwrap() > mtime(&older).unwrap());
    }

    #[test]
    fn test_mtime_missing_file() {
        let dir = tempdir().unwrap();
        assert!(mtime(&dir.path().join("absent.py")).is_err());
    }
}
