//! Ordered statement sequences owned by composite nodes.

use super::{CodeBuilder, Stmt};
use crate::Result;

/// An ordered list of child statements.
///
/// Every mutator returns a new `Body` and leaves `self` untouched. The
/// backing vector is copied before it grows, so two bodies derived from
/// the same base never share storage.
#[derive(Debug, Clone, Default)]
pub struct Body {
    stmts: Vec<Stmt>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this body with `stmts` appended.
    #[must_use]
    pub fn appended(&self, stmts: impl IntoIterator<Item = Stmt>) -> Self {
        let mut next = self.stmts.clone();
        next.extend(stmts);
        Self { stmts: next }
    }

    /// A copy of this body with `stmt` appended.
    #[must_use]
    pub fn pushed(&self, stmt: impl Into<Stmt>) -> Self {
        self.appended([stmt.into()])
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stmt> {
        self.stmts.iter()
    }

    /// Render all statements at `indent_level`, concatenated in order.
    ///
    /// The first failing statement's error is returned as is; nothing
    /// rendered before it is kept.
    pub fn render(&self, indent_level: usize) -> Result<String> {
        let mut builder = CodeBuilder::new(indent_level);
        builder.emit_body(self)?;
        Ok(builder.build())
    }
}

impl FromIterator<Stmt> for Body {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Self {
            stmts: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Stmt>> for Body {
    fn from(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}
