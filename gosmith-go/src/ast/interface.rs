//! Go interface type declaration.

use gosmith_codegen::{CodeBuilder, Error, Node, Provenance, Result};

use super::FuncSignature;

/// `type Name interface { ... }` with one method signature per line.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    signatures: Vec<FuncSignature>,
    caller: Provenance,
}

impl Interface {
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signatures: Vec::new(),
            caller: Provenance::caller(),
        }
    }

    #[must_use]
    pub fn add_signature(&self, signature: FuncSignature) -> Self {
        self.add_signatures([signature])
    }

    #[must_use]
    pub fn add_signatures(&self, signatures: impl IntoIterator<Item = FuncSignature>) -> Self {
        let mut next = self.signatures.clone();
        next.extend(signatures);
        Self {
            signatures: next,
            ..self.clone()
        }
    }

    /// Replace the method set.
    #[must_use]
    pub fn signatures(&self, signatures: impl IntoIterator<Item = FuncSignature>) -> Self {
        Self {
            signatures: signatures.into_iter().collect(),
            ..self.clone()
        }
    }
}

impl Node for Interface {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingField {
                node: "interface",
                field: "name",
                caller: self.caller,
            });
        }

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("type {} interface {{", self.name))
            .push_indent();
        for signature in &self.signatures {
            b.push_line(&signature.render()?);
        }
        b.push_dedent().push_line("}");
        Ok(b.build())
    }
}
