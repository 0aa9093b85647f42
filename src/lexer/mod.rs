//! Lexical analysis for e-lang
//!
//! Converts source text into a token sequence and exposes the forward-only
//! cursor the parser reads it through.

mod cursor;
mod operator;
mod scanner;
mod token;

pub use cursor::TokenCursor;
pub use operator::{is_operator, keyword, Operator, KEYWORDS, OPERATORS};
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
