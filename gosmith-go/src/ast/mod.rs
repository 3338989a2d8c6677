//! Go AST builders.
//!
//! Leaves ([`Comment`], [`Package`], [`Import`], [`Newline`],
//! [`RawStatement`], [`ReturnStatement`]) render a single statement.
//! Composites ([`CodeBlock`], [`Func`], [`AnonymousFunc`], [`If`], [`For`],
//! [`Switch`], [`Interface`], [`Struct`]) wrap their children in scope
//! delimiters and render them one level deeper.
//!
//! Every builder method takes `&self` and returns a new value, so a
//! partially built node can be used as the base of several diverging
//! variants.

mod block;
mod comment;
mod control;
mod fns;
mod imports;
mod interface;
mod raw;
mod signature;
mod structs;
mod switch;

pub use block::CodeBlock;
pub use comment::Comment;
pub use control::{Else, ElseIf, For, If};
pub use fns::{AnonymousFunc, Func, FuncInvocation, FuncReceiver};
pub use imports::{Import, ImportSpec, Package};
pub use interface::Interface;
pub use raw::{Newline, RawStatement, ReturnStatement};
pub use signature::{AnonymousFuncSignature, FuncSignature, Param};
pub use structs::{Field, Struct};
pub use switch::{Case, DefaultCase, Switch};
