//! Import graph discovery.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::imports::import_candidates;
use crate::model::SourceModule;

/// Discovers `entry` and every local file it transitively imports.
///
/// Modules appear in depth-first discovery order, each dependency before
/// the file that first imported it, with `entry` last. A file reached
/// through several import paths is listed only once, at its first
/// discovery point, but its dotted name is still recorded as a dependency
/// at every import site. The visited set is scoped to this call, so two
/// consecutive invocations see the same tree.
pub fn discover(root: &Path, entry: &str) -> Result<Vec<SourceModule>> {
    let mut visited = HashSet::new();
    walk(root, entry, &mut visited)
}

fn walk(root: &Path, file: &str, visited: &mut HashSet<String>) -> Result<Vec<SourceModule>> {
    // Mark before reading so import cycles terminate.
    if !visited.insert(file.to_string()) {
        return Ok(Vec::new());
    }

    tracing::debug!(file, "scanning imports");

    let mut modules = Vec::new();
    let mut dependencies = BTreeSet::new();

    let text = fs::read_to_string(root.join(file))?;
    for line in text.lines() {
        for candidate in import_candidates(line) {
            let mut prefix = String::new();
            for part in candidate.split('.') {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(part);

                // A plain module shadows a package of the same name.
                let rel = prefix.replace('.', "/");
                let as_module = format!("{rel}.py");
                let as_package = format!("{rel}/__init__.py");
                if root.join(&as_module).is_file() {
                    modules.extend(walk(root, &as_module, visited)?);
                    dependencies.insert(prefix.clone());
                } else if root.join(&as_package).is_file() {
                    modules.extend(walk(root, &as_package, visited)?);
                    dependencies.insert(prefix.clone());
                }
            }
        }
    }

    modules.push(SourceModule::new(file, dependencies));
    Ok(modules)
}
