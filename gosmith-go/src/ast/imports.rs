//! Go package clause and import declaration.

use gosmith_codegen::{CodeBuilder, Error, Node, Provenance, Result};

/// `package name`.
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    caller: Provenance,
}

impl Package {
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caller: Provenance::caller(),
        }
    }
}

impl Node for Package {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingField {
                node: "package",
                field: "name",
                caller: self.caller,
            });
        }
        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("package {}", self.name));
        Ok(b.build())
    }
}

/// One imported package path, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
    pub alias: Option<String>,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for ImportSpec {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ImportSpec {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// A parenthesized `import ( ... )` declaration.
///
/// Renders nothing at all when no package has been added.
#[derive(Debug, Clone, Default)]
pub struct Import {
    specs: Vec<(ImportSpec, Provenance)>,
}

impl Import {
    #[track_caller]
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImportSpec>,
    {
        Self::default().add_imports(paths)
    }

    #[track_caller]
    #[must_use]
    pub fn add_import(&self, spec: impl Into<ImportSpec>) -> Self {
        self.add_imports([spec])
    }

    /// Append packages. All of them are tagged with this call's location.
    #[track_caller]
    #[must_use]
    pub fn add_imports<I, S>(&self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImportSpec>,
    {
        let caller = Provenance::caller();
        let mut next = self.specs.clone();
        next.extend(specs.into_iter().map(|s| (s.into(), caller)));
        Self { specs: next }
    }

    /// Replace the imported packages.
    #[track_caller]
    #[must_use]
    pub fn imports<I, S>(&self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImportSpec>,
    {
        Self::default().add_imports(specs)
    }
}

impl Node for Import {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.specs.is_empty() {
            return Ok(String::new());
        }

        let mut b = CodeBuilder::new(indent_level);
        b.push_line("import (").push_indent();
        for (spec, caller) in &self.specs {
            if spec.path.is_empty() {
                return Err(Error::MissingField {
                    node: "import",
                    field: "path",
                    caller: *caller,
                });
            }
            match &spec.alias {
                Some(alias) => b.push_line(&format!("{} \"{}\"", alias, spec.path)),
                None => b.push_line(&format!("\"{}\"", spec.path)),
            };
        }
        b.push_dedent().push_line(")");
        Ok(b.build())
    }
}
