//! A source file discovered by the import graph walker.

use std::collections::BTreeSet;

/// A discovered source file and the local modules it imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Relative slash-separated path, e.g. `foo/bar.py`.
    pub path: String,
    /// Fully qualified dotted names of the local modules this file imports.
    pub dependencies: BTreeSet<String>,
}

impl SourceModule {
    /// Creates a new SourceModule.
    pub fn new(path: impl Into<String>, dependencies: BTreeSet<String>) -> Self {
        Self {
            path: path.into(),
            dependencies,
        }
    }

    /// Returns true if this file is a package initializer.
    pub fn is_package_init(&self) -> bool {
        self.path.ends_with("__init__.py")
    }

    /// Returns the dotted module name derived from the file path.
    ///
    /// A package initializer is named after its parent directory; a plain
    /// module after its own path.
    pub fn dotted_name(&self) -> String {
        match self.path.strip_suffix("__init__.py") {
            Some(parent) => parent.trim_end_matches('/').replace('/', "."),
            None => self
                .path
                .strip_suffix(".py")
                .unwrap_or(&self.path)
                .replace('/', "."),
        }
    }

    /// Returns the last component of the dotted name.
    pub fn short_name(&self) -> String {
        self.dotted_name()
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(path: &str) -> SourceModule {
        SourceModule::new(path, BTreeSet::new())
    }

    #[test]
    fn test_dotted_name_module() {
        assert_eq!(module("foo/bar.py").dotted_name(), "foo.bar");
        assert_eq!(module("top.py").dotted_name(), "top");
    }

    #[test]
    fn test_dotted_name_package() {
        assert_eq!(module("foo/__init__.py").dotted_name(), "foo");
        assert_eq!(module("a/b/__init__.py").dotted_name(), "a.b");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(module("a/b/c.py").short_name(), "c");
        assert_eq!(module("a/b/__init__.py").short_name(), "b");
    }

    #[test]
    fn test_is_package_init() {
        assert!(module("foo/__init__.py").is_package_init());
        assert!(!module("foo/bar.py").is_package_init());
    }
}
