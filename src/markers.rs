//! Begin/End marker lines delimiting bundled blocks.
//!
//! A marker line carries a fixed opening token, the source file path, a
//! cosmetic run of dashes, and a fixed closing token:
//!
//! ```text
//! ##----- Begin foo/bar.py ---------------------------------------------------##
//! ```
//!
//! The grammar is small and fixed, so parsing works on the literal tokens
//! alone. Only the indent and the path are load-bearing; the dash padding
//! is regenerated on every write and never inspected.

/// Opening token of a begin marker line.
pub const BEGIN_TOKEN: &str = "##----- Begin ";

/// Opening token of an end marker line.
pub const END_TOKEN: &str = "##----- End ";

/// Closing token of both marker lines.
pub const CLOSE_TOKEN: &str = "##";

/// Column the closing token is right-aligned to on an unindented marker.
pub const MARKER_COLUMNS: usize = 80;

/// A parsed marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Count of leading space characters.
    pub indent: usize,
    /// Path recorded between the opening token and the dash padding.
    pub path: String,
}

/// Parses a begin marker line, returning its indent and path.
pub fn parse_begin(line: &str) -> Option<Marker> {
    parse_marker(line, BEGIN_TOKEN)
}

/// Parses an end marker line, returning its indent and path.
pub fn parse_end(line: &str) -> Option<Marker> {
    parse_marker(line, END_TOKEN)
}

fn parse_marker(line: &str, token: &str) -> Option<Marker> {
    let line = line.trim_end_matches(['\r', '\n']);
    let stripped = line.trim_start_matches(' ');
    let indent = line.len() - stripped.len();

    let rest = stripped.strip_prefix(token)?;
    let rest = rest.strip_suffix(CLOSE_TOKEN)?;
    let rest = rest.trim_end_matches('-');
    let path = rest.strip_suffix(' ')?;
    if path.is_empty() {
        return None;
    }

    Some(Marker {
        indent,
        path: path.to_string(),
    })
}

/// Formats a begin marker line for `path`, without indent or terminator.
pub fn format_begin(path: &str) -> String {
    format_marker(BEGIN_TOKEN, path)
}

/// Formats an end marker line for `path`, without indent or terminator.
pub fn format_end(path: &str) -> String {
    format_marker(END_TOKEN, path)
}

fn format_marker(token: &str, path: &str) -> String {
    // One space always separates the path from the dash run; zero dashes
    // is legal for very long paths and still parses.
    let used = token.len() + path.len() + 1 + CLOSE_TOKEN.len();
    let dashes = "-".repeat(MARKER_COLUMNS.saturating_sub(used));
    format!("{token}{path} {dashes}{CLOSE_TOKEN}")
}
