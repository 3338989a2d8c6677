//! Shared code generation utilities for gosmith.
//!
//! This crate provides the language-agnostic pieces that the Go builder
//! in `gosmith-go` is assembled from.
//!
//! # Module Organization
//!
//! - [`builder`] - Node contract, statement handles and the indented line buffer
//! - [`error`] - Tagged error catalog shared by every node and the formatter
//! - [`provenance`] - Call-site tags attached to builder values
//! - [`format`] - External formatter steps and the subprocess pipeline
//! - [`config`] - TOML-loadable formatter configuration
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod provenance;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{Body, CodeBuilder, Node, Stmt};
pub use config::FormatConfig;
pub use error::{Error, Result};
pub use format::{FormatterStep, apply_formatter, run_pipeline};
pub use provenance::Provenance;

/// Build a `Vec<Stmt>` from a list of nodes of any kind.
///
/// ```
/// use gosmith_codegen::{Node, Result, stmts};
///
/// #[derive(Debug)]
/// struct Line(&'static str);
///
/// impl Node for Line {
///     fn render(&self, _indent_level: usize) -> Result<String> {
///         Ok(format!("{}\n", self.0))
///     }
/// }
///
/// let body = stmts![Line("a"), Line("b")];
/// assert_eq!(body.len(), 2);
/// ```
#[macro_export]
macro_rules! stmts {
    () => {
        ::std::vec::Vec::<$crate::Stmt>::new()
    };
    ($($node:expr),+ $(,)?) => {
        ::std::vec![$($crate::Stmt::from($node)),+]
    };
}
