//! A marked block extracted from a bundle file.

/// One marked region of a bundle, corresponding to exactly one source file.
///
/// `lines` holds the body with `indent` leading characters removed from
/// every raw line; re-indenting by the same width and splicing the result
/// back between the two marker lines reproduces the original text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 1-indexed line number of the begin marker.
    pub start: usize,
    /// 1-indexed line number of the last body line, `>= start`.
    pub end: usize,
    /// Count of leading spaces stripped from every body line.
    pub indent: usize,
    /// Source path recorded in the begin marker.
    pub path: String,
    /// Body lines, newline-terminated, indent removed.
    pub lines: Vec<String>,
}

impl Block {
    /// Returns the body re-indented for splicing back between its markers.
    pub fn indented_lines(&self) -> Vec<String> {
        indent_lines(&self.lines, self.indent)
    }
}

/// Prefixes every line, empty lines included, with `indent` spaces.
pub fn indent_lines(lines: &[String], indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    lines.iter().map(|line| format!("{pad}{line}")).collect()
}

/// Removes `indent` leading characters from a raw line.
///
/// A line shorter than `indent` strips to the empty string, mirroring how
/// the body was sliced when the bundle was written.
pub fn strip_indent(line: &str, indent: usize) -> &str {
    match line.char_indices().nth(indent) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
