//! Single-line statements.

use gosmith_codegen::{CodeBuilder, Node, Result};

/// An empty line. Never indented.
#[derive(Debug, Clone, Copy, Default)]
pub struct Newline;

impl Node for Newline {
    fn render(&self, _indent_level: usize) -> Result<String> {
        Ok("\n".to_string())
    }
}

/// Arbitrary source text, emitted as is at the current indentation.
#[derive(Debug, Clone)]
pub struct RawStatement {
    stmt: String,
    newline: bool,
}

impl RawStatement {
    pub fn new(stmt: impl Into<String>) -> Self {
        Self {
            stmt: stmt.into(),
            newline: true,
        }
    }

    /// Whether a line terminator follows the text. Turn it off to continue
    /// the line with the next statement, e.g. `x := ` before an anonymous func.
    #[must_use]
    pub fn with_newline(&self, newline: bool) -> Self {
        Self {
            stmt: self.stmt.clone(),
            newline,
        }
    }
}

impl Node for RawStatement {
    fn render(&self, indent_level: usize) -> Result<String> {
        let mut b = CodeBuilder::new(indent_level);
        if self.newline {
            b.push_line(&self.stmt);
        } else {
            b.push_indented(&self.stmt);
        }
        Ok(b.build())
    }
}

/// `return` with zero or more comma-separated items.
#[derive(Debug, Clone, Default)]
pub struct ReturnStatement {
    items: Vec<String>,
}

impl ReturnStatement {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn add_items<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.items.clone();
        next.extend(items.into_iter().map(Into::into));
        Self { items: next }
    }

    /// Replace the returned items.
    #[must_use]
    pub fn items<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(items)
    }
}

impl Node for ReturnStatement {
    fn render(&self, indent_level: usize) -> Result<String> {
        let mut b = CodeBuilder::new(indent_level);
        if self.items.is_empty() {
            b.push_line("return");
        } else {
            b.push_line(&format!("return {}", self.items.join(", ")));
        }
        Ok(b.build())
    }
}
