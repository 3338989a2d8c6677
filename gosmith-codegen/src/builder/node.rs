//! The rendering contract shared by every tree element.

use std::{fmt, sync::Arc};

use crate::Result;

/// A tree element that renders itself to indented source text.
///
/// Rendering must be a pure function of the node and `indent_level`:
/// the same node rendered twice at the same level yields the same text
/// or the same error.
pub trait Node: fmt::Debug + Send + Sync {
    /// Render this node with `indent_level` units of indentation.
    fn render(&self, indent_level: usize) -> Result<String>;
}

/// A shared handle to an immutable node of any kind.
///
/// Containers store their children as `Stmt`s so a single tree can mix
/// comments, blocks, functions and so on. Nodes never change after
/// construction, so cloning a `Stmt` only bumps a reference count and two
/// containers holding the same child can never observe each other.
#[derive(Clone)]
pub struct Stmt(Arc<dyn Node>);

impl Stmt {
    /// Wrap a node.
    pub fn new(node: impl Node + 'static) -> Self {
        Self(Arc::new(node))
    }

    /// Render the wrapped node.
    pub fn render(&self, indent_level: usize) -> Result<String> {
        self.0.render(indent_level)
    }
}

impl<T: Node + 'static> From<T> for Stmt {
    fn from(node: T) -> Self {
        Self::new(node)
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
