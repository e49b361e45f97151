//! Data model for bundles and discovered source files.

mod block;
mod source_module;

pub use block::{indent_lines, strip_indent, Block};
pub use source_module::SourceModule;
