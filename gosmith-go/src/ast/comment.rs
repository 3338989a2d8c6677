//! Go line comment.

use gosmith_codegen::{CodeBuilder, Node, Result};

/// A `//` line comment.
///
/// The text is emitted verbatim after the slashes, so pass a leading
/// space if one is wanted: `Comment::new(" TODO")` renders `// TODO`.
#[derive(Debug, Clone)]
pub struct Comment {
    text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Node for Comment {
    fn render(&self, indent_level: usize) -> Result<String> {
        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("//{}", self.text));
        Ok(b.build())
    }
}
