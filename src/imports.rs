//! Import statement classification.

/// Extracts candidate dotted module names from one source line.
///
/// `import a.b as x, c` yields `a.b` and `c`. `from a.b import c, d`
/// yields `a.b`, then `a.b.c` and `a.b.d` — an imported name may be a
/// nested module rather than an attribute, so both readings are kept and
/// the ones that never resolve to a local file are discarded downstream.
/// Any other line yields nothing.
pub fn import_candidates(line: &str) -> Vec<String> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("import ") {
        rest.split(',')
            .filter_map(|part| part.split_whitespace().next())
            .map(str::to_string)
            .collect()
    } else if let Some(rest) = line.strip_prefix("from ") {
        let Some((module, names)) = rest.split_once(" import ") else {
            return Vec::new();
        };
        let module = module.trim();
        let mut candidates = vec![module.to_string()];
        for name in names.split(',') {
            if let Some(name) = name.split_whitespace().next() {
                candidates.push(format!("{module}.{name}"));
            }
        }
        candidates
    } else {
        Vec::new()
    }
}
