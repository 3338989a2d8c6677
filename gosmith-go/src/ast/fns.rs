//! Go function declarations and function literals.

use gosmith_codegen::{Body, CodeBuilder, Error, Node, Provenance, Result};

use super::{AnonymousFuncSignature, FuncSignature};

/// A method receiver: `(m *MyStruct)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncReceiver {
    name: String,
    ty: String,
    caller: Provenance,
}

impl FuncReceiver {
    #[track_caller]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            caller: Provenance::caller(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let missing = |field| Error::MissingField {
            node: "func receiver",
            field,
            caller: self.caller,
        };
        if self.name.is_empty() {
            return Err(missing("name"));
        }
        if self.ty.is_empty() {
            return Err(missing("type"));
        }
        Ok(format!("({} {})", self.name, self.ty))
    }
}

/// Arguments of an immediate call, appended after a function literal:
/// `func() { ... }(a, b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncInvocation {
    args: Vec<String>,
}

impl FuncInvocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn add_arguments<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.args.clone();
        next.extend(args.into_iter().map(Into::into));
        Self { args: next }
    }

    /// Replace the arguments.
    #[must_use]
    pub fn arguments<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(args)
    }

    pub fn render(&self) -> String {
        format!("({})", self.args.join(", "))
    }
}

/// A function or method declaration.
///
/// ```
/// use gosmith_go::{Func, FuncReceiver, FuncSignature, Node, ReturnStatement};
///
/// let func = Func::new(FuncSignature::new("Name").add_return_types(["string"]))
///     .receiver(FuncReceiver::new("p", "*Person"))
///     .add_statement(ReturnStatement::new(["p.name"]));
///
/// assert_eq!(
///     func.render(0).unwrap(),
///     "func (p *Person) Name() string {\n\treturn p.name\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Func {
    receiver: Option<FuncReceiver>,
    signature: Option<FuncSignature>,
    body: Body,
    caller: Provenance,
}

impl Func {
    /// Start a function. Passing `None` is allowed while building, but
    /// rendering without a signature fails.
    #[track_caller]
    pub fn new(signature: impl Into<Option<FuncSignature>>) -> Self {
        Self {
            receiver: None,
            signature: signature.into(),
            body: Body::new(),
            caller: Provenance::caller(),
        }
    }

    /// Make this a method on `receiver`.
    #[must_use]
    pub fn receiver(&self, receiver: FuncReceiver) -> Self {
        Self {
            receiver: Some(receiver),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn signature(&self, signature: FuncSignature) -> Self {
        Self {
            signature: Some(signature),
            ..self.clone()
        }
    }
}

body_mutators!(Func);

impl Node for Func {
    fn render(&self, indent_level: usize) -> Result<String> {
        let Some(signature) = &self.signature else {
            return Err(Error::MissingChild {
                node: "func",
                child: "signature",
                caller: self.caller,
            });
        };

        let mut header = String::from("func ");
        if let Some(receiver) = &self.receiver {
            header.push_str(&receiver.render()?);
            header.push(' ');
        }
        header.push_str(&signature.render()?);
        header.push_str(" {");

        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&header).push_indent();
        b.emit_body(&self.body)?;
        b.push_dedent().push_line("}");
        Ok(b.build())
    }
}

/// A function literal, optionally launched with `go` and optionally
/// invoked in place.
#[derive(Debug, Clone)]
pub struct AnonymousFunc {
    goroutine: bool,
    signature: Option<AnonymousFuncSignature>,
    invocation: Option<FuncInvocation>,
    body: Body,
    caller: Provenance,
}

impl AnonymousFunc {
    #[track_caller]
    pub fn new(signature: impl Into<Option<AnonymousFuncSignature>>) -> Self {
        Self {
            goroutine: false,
            signature: signature.into(),
            invocation: None,
            body: Body::new(),
            caller: Provenance::caller(),
        }
    }

    /// Prefix the literal with `go`.
    #[must_use]
    pub fn goroutine(&self, goroutine: bool) -> Self {
        Self {
            goroutine,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn signature(&self, signature: AnonymousFuncSignature) -> Self {
        Self {
            signature: Some(signature),
            ..self.clone()
        }
    }

    /// Call the literal immediately with `invocation`'s arguments.
    #[must_use]
    pub fn invocation(&self, invocation: FuncInvocation) -> Self {
        Self {
            invocation: Some(invocation),
            ..self.clone()
        }
    }
}

body_mutators!(AnonymousFunc);

impl Node for AnonymousFunc {
    fn render(&self, indent_level: usize) -> Result<String> {
        let Some(signature) = &self.signature else {
            return Err(Error::MissingChild {
                node: "anonymous func",
                child: "signature",
                caller: self.caller,
            });
        };

        let go = if self.goroutine { "go " } else { "" };
        let mut b = CodeBuilder::new(indent_level);
        b.push_line(&format!("{}func{} {{", go, signature.render()?))
            .push_indent();
        b.emit_body(&self.body)?;
        b.push_dedent();

        match &self.invocation {
            Some(invocation) => b.push_line(&format!("}}{}", invocation.render())),
            None => b.push_line("}"),
        };
        Ok(b.build())
    }
}
