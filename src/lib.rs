//! # e-lang - A Tiny Prefix-Notation Interpreter
//!
//! e-lang is a minimal Lisp-like scripting language with two scalar types
//! (numbers and strings), a single flat variable namespace, and a fixed set of
//! built-in operators written in prefix form.
//!
//! ## Quick Start
//!
//! Execute e-lang code from a string:
//!
//! ```rust
//! use elang::{Evaluator, Parser, Scanner, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = "(+ (* 2 3) (- 10 4))";
//!
//! // Tokenize (scan)
//! let mut scanner = Scanner::new(code);
//! let tokens = scanner.scan_tokens()?;
//!
//! // Parse into an expression tree
//! let mut parser = Parser::new(tokens);
//! let tree = parser.parse()?;
//!
//! // Evaluate
//! let mut evaluator = Evaluator::new();
//! let result = evaluator.eval(&tree)?;
//!
//! assert_eq!(result, Value::Numeric(12.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### Sessions
//!
//! A [`Session`] keeps one evaluator alive across cycles, the way the
//! interactive loop does:
//!
//! ```rust
//! use elang::{Session, Value};
//!
//! # fn main() -> elang::Result<()> {
//! let mut session = Session::new();
//! session.run_source("(assign greeting (+ \"hello, \" \"world\"))")?;
//!
//! let value = session.run_source("greeting")?;
//! assert_eq!(value, Some(Value::from("hello, world")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! ### Literals and Variables
//!
//! ```text
//! 42              # number
//! (3.5)           # parenthesized literal, same thing
//! "text\n"        # string with escapes
//! null            # no value
//! (assign x 5)    # bind a variable
//! x               # read it back
//! ```
//!
//! ### Operators
//!
//! - **Sequencing**: `program`
//! - **Conversion**: `to_numeric`, `to_string`
//! - **I/O**: `print`, `input`
//! - **Arithmetic**: `+` (also string concatenation), `-`, `*`, `/`, `%`, `^`
//! - **Trigonometry**: `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `to_rad`, `to_deg`
//! - **Logarithms**: `ln`, `exp`, `log10`
//!
//! `#` starts a comment that runs to the end of the line.
//!
//! ## Error Handling
//!
//! Every stage reports through [`Error`]; its message names the stage:
//!
//! ```rust
//! use elang::{Session, error::Stage};
//!
//! let mut session = Session::new();
//! let err = session.run_source("(- \"a\" \"b\")").unwrap_err();
//!
//! assert_eq!(err.stage(), Stage::Runtime);
//! assert_eq!(err.to_string(), "Runtime error: cannot apply sub operator on strings");
//! ```

/// Version of the e-lang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod session;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{tokenize, Operator, Scanner, Token, TokenCursor, TokenKind};
pub use parser::{parse, Node, NodeKind, Parser};
pub use runtime::{Environment, Evaluator, Value, ValueKind};
pub use session::{load_source, run_file, LineOutcome, Session, HELP_TEXT};
