//! Bare `{ ... }` block.

use gosmith_codegen::{Body, CodeBuilder, Node, Result};

/// A bare block introducing a new scope.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    body: Body,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }
}

body_mutators!(CodeBlock);

impl Node for CodeBlock {
    fn render(&self, indent_level: usize) -> Result<String> {
        let mut b = CodeBuilder::new(indent_level);
        b.push_line("{").push_indent();
        b.emit_body(&self.body)?;
        b.push_dedent().push_line("}");
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Func, Newline, RawStatement};
    use gosmith_codegen::{Error, stmts};

    #[test]
    fn test_empty_block() {
        assert_eq!(CodeBlock::new().render(0).unwrap(), "{\n}\n");
        assert_eq!(CodeBlock::new().render(3).unwrap(), "\t\t\t{\n\t\t\t}\n");
    }

    #[test]
    fn test_block_body() {
        let block = CodeBlock::new().add_statements(stmts![
            RawStatement::new("a := 1"),
            Newline,
            RawStatement::new("b := a"),
        ]);
        assert_eq!(block.render(1).unwrap(), "\t{\n\t\ta := 1\n\n\t\tb := a\n\t}\n");
    }

    #[test]
    fn test_mutation_keeps_base_output() {
        let base = CodeBlock::new().add_statement(RawStatement::new("x()"));
        let before = base.render(0).unwrap();
        let _extended = base.add_statement(RawStatement::new("y()"));
        let _replaced = base.statements(stmts![RawStatement::new("z()")]);
        assert_eq!(base.render(0).unwrap(), before);
    }

    #[test]
    fn test_fails_fast_on_second_child() {
        let block = CodeBlock::new().add_statements(stmts![
            RawStatement::new("ok()"),
            Func::new(None),
            RawStatement::new("never()"),
        ]);
        let err = block.render(0).unwrap_err();
        assert!(matches!(err, Error::MissingChild { node: "func", .. }));
    }
}
