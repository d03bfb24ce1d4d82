pub use ast::{Node, Operator};
pub use error::{EvalError, Malformed, ParseError};
pub use eval::{evaluate, Bindings};
pub use parser::parse;

mod ast;
mod error;
mod eval;
mod parser;
