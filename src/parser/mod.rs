//! e-lang parser module
//!
//! Builds expression trees from the token sequence produced by the lexer.

mod ast;
mod expr_parser;

pub use ast::{Node, NodeKind};
pub use expr_parser::{parse, Parser, MAX_NESTING_DEPTH};
