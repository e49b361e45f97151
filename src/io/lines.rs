//! Line-oriented file reading and writing.
//!
//! Lines keep their newline terminators, and a file's last line is
//! normalized to carry one even when the underlying storage omits it.
//! That makes content comparisons terminator-insensitive at the boundary.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Splits text into lines, keeping the newline terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Reads a file as lines, normalizing the last line to end with a newline.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let mut lines = split_lines(&text);
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
    Ok(lines)
}

/// Writes lines back by plain concatenation.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat())?;
    Ok(())
}
