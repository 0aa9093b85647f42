//! Error types for the e-lang interpreter

use thiserror::Error;

/// Pipeline stage that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tokenizer / token cursor
    Lexer,
    /// Recursive-descent parser
    Parser,
    /// Tree-walking evaluator
    Runtime,
}

/// e-lang interpreter errors
///
/// Every message carries the tag of the stage that produced it, so the driver
/// can report it verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexer errors
    /// Malformed token sequencing or cursor misuse
    ///
    /// **Triggered by:** advancing the token cursor past the last token
    #[error("Lexer error: {message}")]
    LexError {
        /// Error description
        message: String,
    },

    // Parse errors
    /// A token that cannot start an expression
    ///
    /// **Example:** `)` at the start of the input
    #[error("Parser error: unexpected token \"{token}\"")]
    UnexpectedToken {
        /// Literal text of the offending token
        token: String,
    },

    /// A `match` primitive failed against the lookahead token
    ///
    /// **Example:** `(5 6)` (right parenthesis expected after the atom)
    #[error("Parser error: expected {expected}, got \"{got}\"")]
    Expected {
        /// Expected token kind or text
        expected: String,
        /// Literal text of the lookahead token
        got: String,
    },

    /// Token stream ran out mid-expression
    ///
    /// **Example:** `(+ 1 2`
    #[error("Parser error: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for
        expected: String,
    },

    /// Numeric token text that is not a valid number
    ///
    /// **Example:** `1.2.3`
    #[error("Parser error: invalid numeric literal \"{literal}\"")]
    InvalidNumericLiteral {
        /// The numeric token text
        literal: String,
    },

    /// Tokens left over after the root expression
    ///
    /// **Example:** `(+ 1 2) 3`
    #[error("Parser error: unexpected trailing token \"{token}\"")]
    TrailingTokens {
        /// First token after the root expression
        token: String,
    },

    /// Parenthesized expressions nested past the parser's limit
    ///
    /// **Example:** `(+ (+ (+ ...)))` more than 256 levels deep
    #[error("Parser error: expressions nested deeper than {limit} levels")]
    NestingTooDeep {
        /// Maximum nesting depth
        limit: usize,
    },

    // Runtime errors
    /// Reference to an identifier that was never assigned
    ///
    /// **Prevention:** bind it first with `(assign name value)`
    #[error("Runtime error: unassigned identifier {name}")]
    UnassignedIdentifier {
        /// Identifier name
        name: String,
    },

    /// Operator application with no arguments
    #[error("Runtime error: {operator} operator applied without arguments")]
    EmptyExpression {
        /// Operator name
        operator: String,
    },

    /// Wrong number or kind of arguments for an operator
    ///
    /// **Example:** `(sin (1) (2))`
    #[error("Runtime error: {operator} operator {reason}")]
    InvalidArguments {
        /// Operator name
        operator: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Operand evaluated to a value carrying no type
    ///
    /// **Example:** `(+ (print "x") (1))`
    #[error("Runtime error: cannot apply {operator} operator on non-typed values")]
    NonTypedOperand {
        /// Operator name
        operator: String,
    },

    /// String operand given to a numeric-only operator
    ///
    /// **Example:** `(- "a" "b")`
    #[error("Runtime error: cannot apply {operator} operator on strings")]
    StringOperand {
        /// Operator name
        operator: String,
    },

    /// Operands of different types in one operator application
    ///
    /// **Example:** `(+ (5) ("a"))`
    #[error("Runtime error: cannot apply {operator} operator on different types")]
    MixedOperands {
        /// Operator name
        operator: String,
    },

    /// String that does not parse as a number
    ///
    /// **Example:** `(to_numeric "abc")`
    #[error("Runtime error: cannot convert \"{text}\" to numeric")]
    InvalidConversion {
        /// The unparseable text
        text: String,
    },

    /// Expression node carrying the `none` operator sentinel
    #[error("Runtime error: unknown operator")]
    UnknownOperator,

    /// Output or input stream failure
    #[error("Runtime error: {message}")]
    Io {
        /// Error description
        message: String,
    },
}

impl Error {
    /// Create a lexer error with a message
    pub fn lexer(msg: impl Into<String>) -> Self {
        Error::LexError {
            message: msg.into(),
        }
    }

    /// Create an invalid-arguments error for an operator
    pub fn invalid_arguments(operator: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArguments {
            operator: operator.into(),
            reason: reason.into(),
        }
    }

    /// Classify the stage that raised this error
    pub fn stage(&self) -> Stage {
        match self {
            Error::LexError { .. } => Stage::Lexer,

            Error::UnexpectedToken { .. }
            | Error::Expected { .. }
            | Error::UnexpectedEof { .. }
            | Error::InvalidNumericLiteral { .. }
            | Error::TrailingTokens { .. }
            | Error::NestingTooDeep { .. } => Stage::Parser,

            _ => Stage::Runtime,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for e-lang operations
pub type Result<T> = std::result::Result<T, Error>;
