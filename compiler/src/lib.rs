#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod compiler;
mod error;
mod split;
mod syntax;

pub use compiler::{compile, Compiler};
pub use error::{CompileError, CompileResult, Span};
pub use syntax::{Syntax, GROUP_CLOSE, GROUP_OPEN, REPEAT};
