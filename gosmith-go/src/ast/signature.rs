//! Parameter lists, return clauses and the two signature builders.
//!
//! Named and anonymous signatures share [`Signature`], which owns the
//! validation rules for parameters.

use gosmith_codegen::{Error, Provenance, Result};

/// A function parameter: a name and an optional type.
///
/// An empty type means the parameter shares the type of the parameter
/// that follows it, as in `func(a, b string)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    caller: Provenance,
}

impl Param {
    #[track_caller]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            caller: Provenance::caller(),
        }
    }

    /// Where this parameter was introduced into its list.
    pub fn caller(&self) -> Provenance {
        self.caller
    }

    fn render(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.ty)
        }
    }
}

/// Parameters and return types, without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Signature {
    params: Vec<Param>,
    returns: Vec<String>,
}

impl Signature {
    /// Append `params`, re-tagging them all with `caller`.
    fn with_params(&self, params: impl IntoIterator<Item = Param>, caller: Provenance) -> Self {
        let mut next = self.params.clone();
        next.extend(params.into_iter().map(|p| Param { caller, ..p }));
        Self {
            params: next,
            returns: self.returns.clone(),
        }
    }

    fn with_returns<I, S>(&self, returns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.returns.clone();
        next.extend(returns.into_iter().map(Into::into));
        Self {
            params: self.params.clone(),
            returns: next,
        }
    }

    fn cleared_params(&self) -> Self {
        Self {
            params: Vec::new(),
            returns: self.returns.clone(),
        }
    }

    fn cleared_returns(&self) -> Self {
        Self {
            params: self.params.clone(),
            returns: Vec::new(),
        }
    }

    /// `(a, b string) (int, error)`: the parameter list followed by the
    /// return clause, if any.
    pub(crate) fn render(&self) -> Result<String> {
        let mut out = render_params(&self.params)?;
        out.push_str(&render_returns(&self.returns));
        Ok(out)
    }
}

/// Render `(p1, p2 type)`.
///
/// Every parameter needs a name. Types may be left off earlier parameters
/// but the last one must carry a type, otherwise there is nothing for the
/// untyped names to share.
fn render_params(params: &[Param]) -> Result<String> {
    for param in params {
        if param.name.is_empty() {
            return Err(Error::MissingField {
                node: "func parameter",
                field: "name",
                caller: param.caller,
            });
        }
    }
    match params.last() {
        Some(last) if last.ty.is_empty() => {
            return Err(Error::ParameterTypeOrder {
                name: last.name.clone(),
                caller: last.caller,
            });
        }
        _ => {}
    }

    let list = params.iter().map(Param::render).collect::<Vec<_>>();
    Ok(format!("({})", list.join(", ")))
}

/// Render the return clause, including its leading space.
fn render_returns(returns: &[String]) -> String {
    match returns {
        [] => String::new(),
        [single] => format!(" {single}"),
        many => format!(" ({})", many.join(", ")),
    }
}

/// The signature of a named function or an interface method:
/// `Name(params) returns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncSignature {
    name: String,
    sig: Signature,
    caller: Provenance,
}

impl FuncSignature {
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sig: Signature::default(),
            caller: Provenance::caller(),
        }
    }

    /// Append parameters. All of them are tagged with this call's location.
    #[track_caller]
    #[must_use]
    pub fn add_parameters(&self, params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            sig: self.sig.with_params(params, Provenance::caller()),
            ..self.clone()
        }
    }

    #[track_caller]
    #[must_use]
    pub fn add_parameter(&self, param: Param) -> Self {
        self.add_parameters([param])
    }

    /// Replace the parameters.
    #[track_caller]
    #[must_use]
    pub fn parameters(&self, params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            sig: self.sig.cleared_params().with_params(params, Provenance::caller()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_return_types<I, S>(&self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sig: self.sig.with_returns(types),
            ..self.clone()
        }
    }

    /// Replace the return types.
    #[must_use]
    pub fn return_types<I, S>(&self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sig: self.sig.cleared_returns().with_returns(types),
            ..self.clone()
        }
    }

    pub fn render(&self) -> Result<String> {
        if self.name.is_empty() {
            return Err(Error::MissingField {
                node: "func signature",
                field: "name",
                caller: self.caller,
            });
        }
        Ok(format!("{}{}", self.name, self.sig.render()?))
    }
}

/// The signature of a function literal: `(params) returns`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousFuncSignature {
    sig: Signature,
}

impl AnonymousFuncSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append parameters. All of them are tagged with this call's location.
    #[track_caller]
    #[must_use]
    pub fn add_parameters(&self, params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            sig: self.sig.with_params(params, Provenance::caller()),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn add_parameter(&self, param: Param) -> Self {
        self.add_parameters([param])
    }

    /// Replace the parameters.
    #[track_caller]
    #[must_use]
    pub fn parameters(&self, params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            sig: self.sig.cleared_params().with_params(params, Provenance::caller()),
        }
    }

    #[must_use]
    pub fn add_return_types<I, S>(&self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sig: self.sig.with_returns(types),
        }
    }

    /// Replace the return types.
    #[must_use]
    pub fn return_types<I, S>(&self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sig: self.sig.cleared_returns().with_returns(types),
        }
    }

    pub fn render(&self) -> Result<String> {
        self.sig.render()
    }
}
