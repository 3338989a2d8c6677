//! Code generation building blocks.
//!
//! - [`Node`] - The rendering contract every tree element implements
//! - [`Stmt`] - Shared handle to an immutable node of any kind
//! - [`Body`] - Ordered, copy-on-append sequence of statements
//! - [`CodeBuilder`] - Tab-indented line buffer used while rendering

mod body;
mod code_builder;
mod node;

pub use body::Body;
pub use code_builder::CodeBuilder;
pub use node::{Node, Stmt};
