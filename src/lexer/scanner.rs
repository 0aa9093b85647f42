use super::operator::{is_operator, keyword};
use super::token::{Token, TokenKind};
use crate::error::Result;

/// Characters that separate tokens
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

fn is_paren(c: char) -> bool {
    c == '(' || c == ')'
}

/// Character-level scanner for e-lang source text
///
/// Runs a single left-to-right pass keeping one in-progress token. A numeric
/// or identifier token ends at whitespace or a parenthesis; a numeric token
/// also ends at any character other than a digit or a dot. In both cases the
/// terminating character is scanned again as the start of the next token.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Token being built
    current: Token,
    /// Scan mode of the token being built
    mode: Mode,
    /// Next backslash-escaped character is pending
    escaped: bool,
}

/// What kind of token is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Numeric,
    Identifier,
    String,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            current: Token::new(TokenKind::None, String::new()),
            mode: Mode::Idle,
            escaped: false,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut i = 0;

        while i < self.source.len() {
            let mut c = self.source[i];

            // Comments run up to, not including, the newline
            if c == '#' && self.mode != Mode::String {
                while i < self.source.len() && self.source[i] != '\n' {
                    i += 1;
                }
                if i >= self.source.len() {
                    break;
                }
                c = self.source[i];
            }

            let rescan = self.scan_char(c);
            if !rescan {
                i += 1;
            }
        }

        if !self.current.text.is_empty() {
            self.complete_token();
        }

        tracing::debug!(count = self.tokens.len(), "tokenized source");
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Feeds one character; returns true when the character must be scanned again
    fn scan_char(&mut self, c: char) -> bool {
        match self.mode {
            Mode::Idle => {
                self.start_token(c);
                false
            }
            Mode::String => {
                self.scan_string_char(c);
                false
            }
            Mode::Numeric | Mode::Identifier => {
                if is_whitespace(c) {
                    self.complete_token();
                    false
                } else if is_paren(c) {
                    self.complete_token();
                    true
                } else if self.mode == Mode::Numeric && !c.is_ascii_digit() && c != '.' {
                    self.complete_token();
                    true
                } else {
                    self.current.text.push(c);
                    false
                }
            }
        }
    }

    fn start_token(&mut self, c: char) {
        match c {
            c if c.is_ascii_digit() => {
                self.mode = Mode::Numeric;
                self.current = Token::new(TokenKind::Numeric, c.to_string());
            }
            c if is_whitespace(c) => {}
            '(' => {
                self.current = Token::new(TokenKind::LeftParen, "(");
                self.complete_token();
            }
            ')' => {
                self.current = Token::new(TokenKind::RightParen, ")");
                self.complete_token();
            }
            '"' => {
                self.mode = Mode::String;
                self.current = Token::new(TokenKind::String, String::new());
            }
            c => {
                self.mode = Mode::Identifier;
                self.current = Token::new(TokenKind::Identifier, c.to_string());
            }
        }
    }

    fn scan_string_char(&mut self, c: char) {
        if self.escaped {
            let translated = match c {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                'f' => '\x0C',
                'v' => '\x0B',
                other => other,
            };
            self.current.text.push(translated);
            self.escaped = false;
        } else if c == '\\' {
            self.escaped = true;
        } else if c == '"' {
            self.complete_token();
        } else {
            self.current.text.push(c);
        }
    }

    /// Classifies and pushes the in-progress token, then resets scan state
    fn complete_token(&mut self) {
        let mut token = std::mem::replace(
            &mut self.current,
            Token::new(TokenKind::None, String::new()),
        );

        // String contents are kept verbatim
        if token.kind != TokenKind::String {
            token.text = token.text.trim().to_string();
        }

        if token.kind == TokenKind::Identifier && is_operator(&token.text) {
            token.kind = TokenKind::Operator;
        }

        if token.kind == TokenKind::Identifier {
            if let Some(kind) = keyword(&token.text) {
                token.kind = kind;
            }
        }

        if !token.text.is_empty() {
            tracing::trace!(kind = %token.kind, text = %token.text, "token");
            self.tokens.push(token);
        }

        self.mode = Mode::Idle;
        self.escaped = false;
    }
}

/// Tokenizes a whole source string
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_simple_expression() {
        let tokens = tokenize("(+ 1 2)").unwrap();

        assert_eq!(tokens.len(), 5); // ( + 1 2 )
        assert_eq!(tokens[0], Token::new(TokenKind::LeftParen, "("));
        assert_eq!(tokens[1], Token::new(TokenKind::Operator, "+"));
        assert_eq!(tokens[2], Token::new(TokenKind::Numeric, "1"));
        assert_eq!(tokens[3], Token::new(TokenKind::Numeric, "2"));
        assert_eq!(tokens[4], Token::new(TokenKind::RightParen, ")"));
    }

    #[test]
    fn test_parens_delimit_without_spaces() {
        assert_eq!(
            texts("(assign x(+(2)(3.5)))"),
            vec!["(", "assign", "x", "(", "+", "(", "2", ")", "(", "3.5", ")", ")", ")"]
        );
    }

    #[test]
    fn test_numeric_ends_at_non_digit() {
        let tokens = tokenize("12ab").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Numeric, "12"));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "ab"));

        let tokens = tokenize("3\"s\"").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Numeric, "3"));
        assert_eq!(tokens[1], Token::new(TokenKind::String, "s"));
    }

    #[test]
    fn test_identifier_absorbs_digits_and_symbols() {
        assert_eq!(
            tokenize("x1_y!").unwrap(),
            vec![Token::new(TokenKind::Identifier, "x1_y!")]
        );
    }

    #[test]
    fn test_operator_and_keyword_reclassification() {
        assert_eq!(
            kinds("sin sine null nullable to_deg"),
            vec![
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Null,
                TokenKind::Identifier,
                TokenKind::Operator,
            ]
        );
    }

    #[test]
    fn test_comment() {
        assert_eq!(tokenize("5 # comment\n").unwrap(), tokenize("5").unwrap());
        assert_eq!(
            kinds("# header\n(print x) # trailing"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_comment_ends_token_in_progress() {
        assert_eq!(texts("42# note\n7"), vec!["42", "7"]);
    }

    #[test]
    fn test_hash_inside_string_is_literal() {
        assert_eq!(texts("\"a # b\""), vec!["a # b"]);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokenize(r#""a\nb""#).unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "a\nb")]);

        let tokens = tokenize(r#""q\"t\tr\rf\fv\vz\\""#).unwrap();
        assert_eq!(tokens[0].text, "q\"t\tr\rf\x0Cv\x0Bz\\");
    }

    #[test]
    fn test_string_is_not_trimmed() {
        assert_eq!(texts("\"  padded \""), vec!["  padded "]);
    }

    #[test]
    fn test_empty_string_is_discarded() {
        assert_eq!(kinds("(print \"\")"), kinds("(print )"));
    }

    #[test]
    fn test_trailing_token_flushed() {
        assert_eq!(texts("(print abc"), vec!["(", "print", "abc"]);
        assert_eq!(texts("\"open"), vec!["open"]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize(" \t\r\n\x0C ").unwrap().is_empty());
        assert!(tokenize("# only a comment").unwrap().is_empty());
    }
}
