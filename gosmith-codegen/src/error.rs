use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Provenance;

/// Result type for rendering and formatting.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way building, rendering or formatting a document can fail.
///
/// Each validation rule has its own variant so callers can match on the
/// rule rather than on message text.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{node} {field} must not be empty (built at {caller})")]
    #[diagnostic(
        code(gosmith::missing_field),
        help("pass a non-empty {field} when constructing the {node}")
    )]
    MissingField {
        node: &'static str,
        field: &'static str,
        caller: Provenance,
    },

    #[error("{node} has no {child} (built at {caller})")]
    #[diagnostic(
        code(gosmith::missing_child),
        help("attach a {child} to the {node} before rendering it")
    )]
    MissingChild {
        node: &'static str,
        child: &'static str,
        caller: Provenance,
    },

    #[error("last parameter '{name}' has no type (added at {caller})")]
    #[diagnostic(
        code(gosmith::parameter_type_order),
        help("earlier parameters may share the type of a later one, but the final parameter must name it")
    )]
    ParameterTypeOrder { name: String, caller: Provenance },

    #[error("formatter '{command}' failed: {reason}{}", stderr_suffix(.stderr))]
    #[diagnostic(code(gosmith::formatter))]
    Formatter {
        /// The full command line, program followed by its arguments.
        command: String,
        reason: String,
        /// Everything the process wrote to its error stream.
        stderr: String,
    },

    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(gosmith::config_io))]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse formatter configuration")]
    #[diagnostic(code(gosmith::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Self {
        let span = source.span().map(SourceSpan::from);
        Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        }
    }

    /// The call site tag carried by validation errors.
    pub fn caller(&self) -> Option<Provenance> {
        match self {
            Error::MissingField { caller, .. }
            | Error::MissingChild { caller, .. }
            | Error::ParameterTypeOrder { caller, .. } => Some(*caller),
            _ => None,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}
