//! Go struct type declaration.

use gosmith_codegen::{CodeBuilder, Error, Node, Provenance, Result};

/// A field in a Go struct, with an optional tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub tag: Option<String>,
    caller: Provenance,
}

impl Field {
    #[track_caller]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
            caller: Provenance::caller(),
        }
    }

    /// Attach a struct tag, written without the surrounding backquotes.
    #[must_use]
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..self.clone()
        }
    }

    fn render(&self) -> Result<String> {
        let missing = |field| Error::MissingField {
            node: "struct field",
            field,
            caller: self.caller,
        };
        if self.name.is_empty() {
            return Err(missing("name"));
        }
        if self.ty.is_empty() {
            return Err(missing("type"));
        }
        Ok(match &self.tag {
            Some(tag) => format!("{} {} `{}`", self.name, self.ty, tag),
            None => format!("{} {}", self.name, self.ty),
        })
    }
}

/// `type Name struct { ... }` with one field per line.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
    caller: Provenance,
}

impl Struct {
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            caller: Provenance::caller(),
        }
    }

    /// Shorthand for `add_field_spec(Field::new(name, ty))`.
    #[track_caller]
    #[must_use]
    pub fn add_field(&self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.add_field_spec(Field::new(name, ty))
    }

    #[must_use]
    pub fn add_field_spec(&self, field: Field) -> Self {
        self.add_fields([field])
    }

    #[must_use]
    pub fn add_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut next = self.fields.clone();
        next.extend(fields);
        Self {
            fields: next,
            ..self.clone()
        }
    }

    /// Replace the fields.
    #[must_use]
    pub fn fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            ..self.clone()
        }
    }
}

impl Node for Struct {
    fn render(&self, indent_level: usize) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingField {
                node: "struct",
                field: "name",
                caller: self.caller,
            });
        }

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("type {} struct {{", self.name))
            .push_indent();
        for field in &self.fields {
            b.push_line(&field.render()?);
        }
        b.push_dedent().push_line("}");
        Ok(b.build())
    }
}
