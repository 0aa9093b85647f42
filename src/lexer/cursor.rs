use super::token::Token;
use crate::error::{Error, Result};

/// Forward-only cursor over a scanned token sequence
///
/// The position only ever moves forward; once a token is consumed it cannot
/// be looked at again.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    /// Creates a cursor positioned on the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// Returns the lookahead token, or `None` once the sequence is exhausted
    pub fn look(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Moves past the lookahead token
    pub fn advance(&mut self) -> Result<()> {
        if self.position < self.tokens.len() {
            self.position += 1;
            Ok(())
        } else {
            Err(Error::lexer("token list is empty"))
        }
    }

    /// Returns true when every token has been consumed
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use crate::lexer::TokenKind;

    #[test]
    fn test_look_and_advance() {
        let mut cursor = TokenCursor::new(vec![
            Token::new(TokenKind::Numeric, "1"),
            Token::new(TokenKind::Identifier, "x"),
        ]);

        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.look().map(|t| t.text.as_str()), Some("1"));
        cursor.advance().unwrap();
        assert_eq!(cursor.look().map(|t| t.text.as_str()), Some("x"));
        cursor.advance().unwrap();
        assert!(cursor.is_empty());
        assert_eq!(cursor.look(), None);
    }

    #[test]
    fn test_advance_past_end_is_lexer_error() {
        let mut cursor = TokenCursor::new(Vec::new());
        assert!(cursor.is_empty());

        let err = cursor.advance().unwrap_err();
        assert_eq!(err.stage(), Stage::Lexer);
        assert_eq!(err.to_string(), "Lexer error: token list is empty");
    }
}
