//! Line buffer used by nodes while rendering.

use super::{Body, Stmt};
use crate::Result;

/// One level of indentation. `gofmt` indents with tabs only.
const INDENT: &str = "\t";

/// Buffer for building tab-indented code, one render call at a time.
///
/// Nodes create a builder at the level they were asked to render at,
/// push their own delimiter lines and [`emit`](Self::emit) children at
/// whatever level the builder is currently at. A failing child aborts
/// the render through `?`, and the partially filled buffer is dropped
/// with it.
///
/// # Example
///
/// ```
/// use gosmith_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::new(1);
/// builder
///     .push_line("for {")
///     .push_indent()
///     .push_line("break")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "\tfor {\n\t\tbreak\n\t}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder starting at `indent_level`.
    pub fn new(indent_level: usize) -> Self {
        Self {
            indent_level,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add text with current indentation but no trailing newline.
    pub fn push_indented(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Render a statement at the current level and append its text.
    pub fn emit(&mut self, stmt: &Stmt) -> Result<&mut Self> {
        let rendered = stmt.render(self.indent_level)?;
        self.buffer.push_str(&rendered);
        Ok(self)
    }

    /// Render every statement of `body` in order, stopping at the first error.
    pub fn emit_body(&mut self, body: &Body) -> Result<&mut Self> {
        for stmt in body.iter() {
            self.emit(stmt)?;
        }
        Ok(self)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}
