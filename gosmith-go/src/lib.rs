//! Immutable Go source builder.
//!
//! A document is a [`Root`] holding a list of statements. Every node is a
//! value: builder methods return a modified copy and leave the receiver
//! untouched. Rendering walks the tree, emits tab-indented Go text and
//! then optionally pipes it through `gofmt`, `goimports` or any other
//! stdin/stdout formatter.
//!
//! ```
//! use gosmith_go::{Comment, Func, FuncSignature, Newline, Package, Root, stmts};
//!
//! let root = Root::new().add_statements(stmts![
//!     Comment::new(" generated"),
//!     Package::new("main"),
//!     Newline,
//!     Func::new(FuncSignature::new("main")),
//! ]);
//!
//! assert_eq!(
//!     root.render(0).unwrap(),
//!     "// generated\npackage main\n\nfunc main() {\n}\n"
//! );
//! ```

/// Append/replace methods for composites that keep their children in a
/// `body: Body` field.
macro_rules! body_mutators {
    ($ty:ident) => {
        impl $ty {
            /// Append one statement to the body.
            #[must_use]
            pub fn add_statement(&self, stmt: impl Into<gosmith_codegen::Stmt>) -> Self {
                Self {
                    body: self.body.pushed(stmt),
                    ..self.clone()
                }
            }

            /// Append statements to the body.
            #[must_use]
            pub fn add_statements(
                &self,
                stmts: impl IntoIterator<Item = gosmith_codegen::Stmt>,
            ) -> Self {
                Self {
                    body: self.body.appended(stmts),
                    ..self.clone()
                }
            }

            /// Replace the body.
            #[must_use]
            pub fn statements(&self, stmts: impl IntoIterator<Item = gosmith_codegen::Stmt>) -> Self {
                Self {
                    body: stmts.into_iter().collect(),
                    ..self.clone()
                }
            }
        }
    };
}

pub mod ast;
mod presets;
mod root;

pub use ast::{
    AnonymousFunc, AnonymousFuncSignature, Case, CodeBlock, Comment, DefaultCase, Else, ElseIf,
    Field, For, Func, FuncInvocation, FuncReceiver, FuncSignature, If, Import, ImportSpec,
    Interface, Newline, Package, Param, RawStatement, ReturnStatement, Struct, Switch,
};
pub use presets::{gofmt, goimports, syntax_checker};
pub use root::Root;

pub use gosmith_codegen::{Error, FormatConfig, FormatterStep, Node, Provenance, Result, Stmt, stmts};
