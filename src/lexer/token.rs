use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Literal text of the token (string tokens hold the unescaped contents)
    pub text: String,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

/// All possible token types in e-lang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Numeric literal (digits and dots)
    Numeric,
    /// Plain identifier
    Identifier,
    /// `null` keyword
    Null,
    /// Built-in operator spelling
    Operator,
    /// Double-quoted string literal
    String,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Token not yet classified
    None,
}

impl TokenKind {
    /// Returns true for kinds that form a complete expression on their own
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::Numeric | TokenKind::String | TokenKind::Identifier | TokenKind::Null
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::Numeric => "numeric",
            TokenKind::Identifier => "identifier",
            TokenKind::Null => "null",
            TokenKind::Operator => "operator",
            TokenKind::String => "string",
            TokenKind::LeftParen => "left parenthesis",
            TokenKind::RightParen => "right parenthesis",
            TokenKind::None => "none",
        };
        write!(f, "{}", name)
    }
}
