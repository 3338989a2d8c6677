//! `if` and `for` statements.

use gosmith_codegen::{Body, CodeBuilder, Error, Node, Provenance, Result};

/// An `else if` branch of an [`If`].
#[derive(Debug, Clone)]
pub struct ElseIf {
    condition: String,
    body: Body,
    caller: Provenance,
}

impl ElseIf {
    #[track_caller]
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Body::new(),
            caller: Provenance::caller(),
        }
    }
}

body_mutators!(ElseIf);

/// The final `else` branch of an [`If`].
#[derive(Debug, Clone, Default)]
pub struct Else {
    body: Body,
}

impl Else {
    pub fn new() -> Self {
        Self::default()
    }
}

body_mutators!(Else);

/// `if cond { ... }` with any number of `else if` branches and an optional `else`.
#[derive(Debug, Clone)]
pub struct If {
    condition: String,
    body: Body,
    else_ifs: Vec<ElseIf>,
    else_branch: Option<Else>,
    caller: Provenance,
}

impl If {
    #[track_caller]
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Body::new(),
            else_ifs: Vec::new(),
            else_branch: None,
            caller: Provenance::caller(),
        }
    }

    /// Append an `else if` branch after the existing ones.
    #[must_use]
    pub fn add_else_if(&self, branch: ElseIf) -> Self {
        let mut else_ifs = self.else_ifs.clone();
        else_ifs.push(branch);
        Self {
            else_ifs,
            ..self.clone()
        }
    }

    /// Set the `else` branch. It always renders after every `else if`.
    #[must_use]
    pub fn else_branch(&self, branch: Else) -> Self {
        Self {
            else_branch: Some(branch),
            ..self.clone()
        }
    }
}

body_mutators!(If);

impl Node for If {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.condition.is_empty() {
            return Err(Error::MissingField {
                node: "if",
                field: "condition",
                caller: self.caller,
            });
        }

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("if {} {{", self.condition)).push_indent();
        b.emit_body(&self.body)?;
        b.push_dedent();

        for branch in &self.else_ifs {
            if branch.condition.is_empty() {
                return Err(Error::MissingField {
                    node: "else if",
                    field: "condition",
                    caller: branch.caller,
                });
            }
            b.push_line(&format!("}} else if {} {{", branch.condition))
                .push_indent();
            b.emit_body(&branch.body)?;
            b.push_dedent();
        }

        if let Some(branch) = &self.else_branch {
            b.push_line("} else {").push_indent();
            b.emit_body(&branch.body)?;
            b.push_dedent();
        }

        b.push_line("}");
        Ok(b.build())
    }
}

/// `for clause { ... }`. An empty clause renders an infinite `for {`.
#[derive(Debug, Clone, Default)]
pub struct For {
    clause: String,
    body: Body,
}

impl For {
    pub fn new(clause: impl Into<String>) -> Self {
        Self {
            clause: clause.into(),
            body: Body::new(),
        }
    }
}

body_mutators!(For);

impl Node for For {
    fn render(&self, indent_level: usize) -> Result<String> {
        let header = if self.clause.is_empty() {
            "for {".to_string()
        } else {
            format!("for {} {{", self.clause)
        };

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&header).push_indent();
        b.emit_body(&self.body)?;
        b.push_dedent().push_line("}");
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Comment, RawStatement};

    #[test]
    fn test_empty_if() {
        let node = If::new("a == b");
        assert_eq!(node.render(0).unwrap(), "if a == b {\n}\n");
        assert_eq!(node.render(2).unwrap(), "\t\tif a == b {\n\t\t}\n");
    }

    #[test]
    fn test_if_else_chain() {
        let node = If::new("i > 0")
            .add_statement(RawStatement::new("pos()"))
            .add_else_if(ElseIf::new("i < 0").add_statement(RawStatement::new("neg()")))
            .else_branch(Else::new().add_statement(RawStatement::new("zero()")));

        assert_eq!(
            node.render(0).unwrap(),
            "if i > 0 {\n\tpos()\n} else if i < 0 {\n\tneg()\n} else {\n\tzero()\n}\n"
        );
    }

    #[test]
    fn test_else_renders_last_even_when_set_first() {
        let node = If::new("a")
            .else_branch(Else::new())
            .add_else_if(ElseIf::new("b"));
        assert_eq!(node.render(0).unwrap(), "if a {\n} else if b {\n} else {\n}\n");
    }

    #[test]
    fn test_empty_condition() {
        let err = If::new("").render(0).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                node: "if",
                field: "condition",
                ..
            }
        ));

        let err = If::new("x").add_else_if(ElseIf::new("")).render(0).unwrap_err();
        assert!(matches!(err, Error::MissingField { node: "else if", .. }));
    }

    #[test]
    fn test_for() {
        let node = For::new("i := 0; i < 3; i++").add_statement(RawStatement::new("f(i)"));
        assert_eq!(node.render(0).unwrap(), "for i := 0; i < 3; i++ {\n\tf(i)\n}\n");
    }

    #[test]
    fn test_infinite_for() {
        let node = For::default().add_statement(Comment::new(" spin"));
        assert_eq!(node.render(1).unwrap(), "\tfor {\n\t\t// spin\n\t}\n");
    }

    #[test]
    fn test_nested_scopes_indent() {
        let node = If::new("ok").add_statement(For::new("").add_statement(RawStatement::new("x()")));
        assert_eq!(node.render(0).unwrap(), "if ok {\n\tfor {\n\t\tx()\n\t}\n}\n");
    }
}
