//! `switch` statement with its cases.

use gosmith_codegen::{Body, CodeBuilder, Error, Node, Provenance, Result};

/// `case label:` followed by its statements.
#[derive(Debug, Clone)]
pub struct Case {
    label: String,
    body: Body,
    caller: Provenance,
}

impl Case {
    #[track_caller]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: Body::new(),
            caller: Provenance::caller(),
        }
    }
}

body_mutators!(Case);

impl Node for Case {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.label.is_empty() {
            return Err(Error::MissingField {
                node: "case",
                field: "label",
                caller: self.caller,
            });
        }
        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("case {}:", self.label)).push_indent();
        b.emit_body(&self.body)?;
        Ok(b.build())
    }
}

/// `default:` followed by its statements.
#[derive(Debug, Clone, Default)]
pub struct DefaultCase {
    body: Body,
}

impl DefaultCase {
    pub fn new() -> Self {
        Self::default()
    }
}

body_mutators!(DefaultCase);

impl Node for DefaultCase {
    fn render(&self, indent_level: usize) -> Result<String> {
        let mut b = CodeBuilder::new(indent_level);
        b.push_line("default:").push_indent();
        b.emit_body(&self.body)?;
        Ok(b.build())
    }
}

/// `switch tag { ... }`.
///
/// Cases render in the order they were added. The default case, if any,
/// always renders last. An empty tag renders a tagless `switch {`.
#[derive(Debug, Clone, Default)]
pub struct Switch {
    tag: String,
    cases: Vec<Case>,
    default: Option<DefaultCase>,
}

impl Switch {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            cases: Vec::new(),
            default: None,
        }
    }

    #[must_use]
    pub fn add_case(&self, case: Case) -> Self {
        self.add_cases([case])
    }

    #[must_use]
    pub fn add_cases(&self, cases: impl IntoIterator<Item = Case>) -> Self {
        let mut next = self.cases.clone();
        next.extend(cases);
        Self {
            cases: next,
            ..self.clone()
        }
    }

    /// Replace the cases. The default case is kept.
    #[must_use]
    pub fn cases(&self, cases: impl IntoIterator<Item = Case>) -> Self {
        Self {
            cases: cases.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Set the default case, replacing any earlier one.
    #[must_use]
    pub fn default_case(&self, default: DefaultCase) -> Self {
        Self {
            default: Some(default),
            ..self.clone()
        }
    }
}

impl Node for Switch {
    fn render(&self, indent_level: usize) -> Result<String> {
        let header = if self.tag.is_empty() {
            "switch {".to_string()
        } else {
            format!("switch {} {{", self.tag)
        };

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&header);
        for case in &self.cases {
            b.push_raw(&case.render(indent_level)?);
        }
        if let Some(default) = &self.default {
            b.push_raw(&default.render(indent_level)?);
        }
        b.push_line("}");
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Comment, RawStatement};

    #[test]
    fn test_empty_switch() {
        assert_eq!(Switch::new("x").render(0).unwrap(), "switch x {\n}\n");
        assert_eq!(Switch::default().render(1).unwrap(), "\tswitch {\n\t}\n");
    }

    #[test]
    fn test_default_renders_last() {
        let switch = Switch::new("str")
            .default_case(DefaultCase::new().add_statement(Comment::new(" default")))
            .add_case(Case::new("\"a\"").add_statement(Comment::new(" a")))
            .add_cases([
                Case::new("\"b\"").add_statement(Comment::new(" b")),
                Case::new("\"c\"").add_statement(Comment::new(" c")),
            ]);

        assert_eq!(
            switch.render(0).unwrap(),
            "switch str {\ncase \"a\":\n\t// a\ncase \"b\":\n\t// b\ncase \"c\":\n\t// c\ndefault:\n\t// default\n}\n"
        );
    }

    #[test]
    fn test_switch_with_indent() {
        let switch = Switch::new("n")
            .add_case(Case::new("1").add_statement(RawStatement::new("one()")))
            .default_case(DefaultCase::new());
        assert_eq!(
            switch.render(1).unwrap(),
            "\tswitch n {\n\tcase 1:\n\t\tone()\n\tdefault:\n\t}\n"
        );
    }

    #[test]
    fn test_empty_case_label() {
        let switch = Switch::new("n").add_case(Case::new(""));
        assert!(matches!(
            switch.render(0).unwrap_err(),
            Error::MissingField {
                node: "case",
                field: "label",
                ..
            }
        ));
    }

    #[test]
    fn test_cases_replaces_but_keeps_default() {
        let switch = Switch::new("n")
            .add_case(Case::new("1"))
            .default_case(DefaultCase::new());
        let replaced = switch.cases([Case::new("2")]);
        assert_eq!(replaced.render(0).unwrap(), "switch n {\ncase 2:\ndefault:\n}\n");
        assert_eq!(switch.render(0).unwrap(), "switch n {\ncase 1:\ndefault:\n}\n");
    }
}
