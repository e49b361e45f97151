//! Bundle file emission.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::discover::discover;
use crate::errors::Result;
use crate::markers::{format_begin, format_end};
use crate::model::SourceModule;
use crate::templates::PREAMBLE;

/// Indent applied to module and package bodies.
const BODY_INDENT: &str = "    ";

/// Discovers every module reachable from `entry` under `root` and writes
/// the combined bundle to `output`.
///
/// Sections land in discovery order, so each module's text precedes the
/// text of the files that import it and the entry file comes last.
pub fn write_bundle(root: &Path, entry: &str, output: &Path) -> Result<()> {
    let modules = discover(root, entry)?;

    let mut out = fs::File::create(output)?;
    out.write_all(PREAMBLE.as_bytes())?;

    let mut visited: HashSet<String> = HashSet::new();
    for module in &modules {
        println!("... {}", module.path);
        let text = fs::read_to_string(root.join(&module.path))?;
        let section = if module.path == entry {
            entry_section(&module.path, &text)
        } else {
            module_section(module, &text, &mut visited)
        };
        out.write_all(section.as_bytes())?;
    }

    tracing::debug!(count = modules.len(), output = %output.display(), "bundle written");
    Ok(())
}

/// Bare begin/end wrapping for the entry file. No dependency metadata:
/// the entry runs at top level, after everything it needs is registered.
fn entry_section(path: &str, text: &str) -> String {
    format!(
        "\n\n{begin}\n{text}\n{end}\n",
        begin = format_begin(path),
        end = format_end(path),
    )
}

/// `@modulize`-decorated section for a package initializer or a plain
/// module. The header names the module and the dependencies not yet
/// emitted above it; the body is indented one level into the class.
fn module_section(module: &SourceModule, text: &str, visited: &mut HashSet<String>) -> String {
    let name = module.dotted_name();
    visited.insert(name.clone());

    let residual: Vec<&String> = module
        .dependencies
        .iter()
        .filter(|dep| !visited.contains(*dep))
        .collect();
    let dependencies = if residual.is_empty() {
        String::new()
    } else {
        let quoted: Vec<String> = residual.iter().map(|dep| format!("'{dep}'")).collect();
        format!(", dependencies=[{}]", quoted.join(", "))
    };

    format!(
        "\n@modulize('{name}'{dependencies})\nclass _{short}:\n{indent}{begin}\n{body}\n{indent}{end}\n{indent}pass\n",
        short = module.short_name(),
        indent = BODY_INDENT,
        begin = format_begin(&module.path),
        body = indent_body(text),
        end = format_end(&module.path),
    )
}

/// Indents every line of `text`, empty lines included.
fn indent_body(text: &str) -> String {
    let indented: Vec<String> = text
        .split('\n')
        .map(|line| format!("{BODY_INDENT}{line}"))
        .collect();
    indented.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_blocks;
    use crate::io::read_lines;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_bundle_package_example() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("foo")).unwrap();
        fs::write(dir.path().join("foo/__init__.py"), "foo_var = 'foo'\n").unwrap();
        fs::write(
            dir.path().join("foo/bar.py"),
            "def bar_func(x):\n    return x\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("__main__.py"),
            "import foo.bar\nprint(foo.bar.bar_func(foo.foo_var))\n",
        )
        .unwrap();

        let output = dir.path().join("_combined.py");
        write_bundle(dir.path(), "__main__.py", &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("import sys\n"));
        assert!(text.contains("\n@modulize('foo')\nclass _foo:\n"));
        assert!(text.contains("\n@modulize('foo.bar')\nclass _bar:\n"));

        // Sections follow discovery order, entry last and unwrapped.
        let foo_at = text.find("@modulize('foo')").unwrap();
        let bar_at = text.find("@modulize('foo.bar')").unwrap();
        let main_at = text.find("##----- Begin __main__.py").unwrap();
        assert!(foo_at < bar_at && bar_at < main_at);
        assert!(!text.contains("@modulize('__main__'"));
    }

    #[test]
    fn test_residual_dependencies_annotated_once() {
        // b is discovered through a, so a's name is still pending when b
        // is emitted; a's own header then has nothing left to declare.
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "import b\n").unwrap();
        fs::write(dir.path().join("b.py"), "import a\n").unwrap();
        fs::write(dir.path().join("__main__.py"), "import a\n").unwrap();

        let output = dir.path().join("_combined.py");
        write_bundle(dir.path(), "__main__.py", &output).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("@modulize('b', dependencies=['a'])"));
        assert!(text.contains("@modulize('a')\n"));
    }

    #[test]
    fn test_bundle_blocks_roundtrip_to_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/__init__.py"), "").unwrap();
        // No trailing newline on purpose; comparison is
        // terminator-insensitive at the boundary.
        fs::write(dir.path().join("pkg/deep.py"), "def f():\n    return 1").unwrap();
        fs::write(dir.path().join("__main__.py"), "from pkg import deep\n").unwrap();

        let output = dir.path().join("_combined.py");
        write_bundle(dir.path(), "__main__.py", &output).unwrap();

        let blocks = extract_blocks(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(blocks.len(), 3);
        for block in &blocks {
            let source = read_lines(&dir.path().join(&block.path)).unwrap();
            assert_eq!(source, block.lines, "block {} diverges", block.path);
        }
    }

    #[test]
    fn test_marker_indent_matches_section_shape() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mod.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("__main__.py"), "import mod\n").unwrap();

        let output = dir.path().join("_combined.py");
        write_bundle(dir.path(), "__main__.py", &output).unwrap();

        let blocks = extract_blocks(&fs::read_to_string(&output).unwrap()).unwrap();
        let module = blocks.iter().find(|b| b.path == "mod.py").unwrap();
        let entry = blocks.iter().find(|b| b.path == "__main__.py").unwrap();
        assert_eq!(module.indent, 4);
        assert_eq!(entry.indent, 0);
    }
}
