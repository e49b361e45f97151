//! Block extraction from a bundle file.

use std::fs;
use std::path::Path;

use crate::errors::{ModulizeError, Result};
use crate::io::split_lines;
use crate::markers::{parse_begin, parse_end};
use crate::model::{strip_indent, Block};

/// Reads a bundle file and extracts every top-level marked block.
pub fn extract_file(path: &Path) -> Result<Vec<Block>> {
    let text = fs::read_to_string(path)?;
    extract_blocks(&text)
}

/// Scans bundle text once, yielding blocks in file order.
///
/// An end marker only closes the block whose begin marker recorded the
/// same path; anything else between the pair, marker-shaped or not, is
/// kept as body content and round-trips verbatim. A begin marker with no
/// matching end before end of input fails the whole extraction.
pub fn extract_blocks(text: &str) -> Result<Vec<Block>> {
    let lines = split_lines(text);
    let mut blocks = Vec::new();
    let mut iter = lines.iter().enumerate();

    while let Some((idx, line)) = iter.next() {
        let Some(begin) = parse_begin(line) else {
            continue;
        };
        let start = idx + 1;

        let mut body = Vec::new();
        let mut end = None;
        for (idx, line) in iter.by_ref() {
            if parse_end(line).is_some_and(|m| m.path == begin.path) {
                // Last body line sits just above the end marker.
                end = Some(idx);
                break;
            }
            body.push(strip_indent(line, begin.indent).to_string());
        }
        let Some(end) = end else {
            return Err(ModulizeError::UnterminatedBlock {
                path: begin.path,
                line: start,
            });
        };

        // A single trailing blank line is implicit and not stored.
        if body.last().is_some_and(|l| l == "\n") {
            body.pop();
        }

        blocks.push(Block {
            start,
            end,
            indent: begin.indent,
            path: begin.path,
            lines: body,
        });
    }

    Ok(blocks)
}
