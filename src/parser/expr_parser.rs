use super::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::{Operator, Token, TokenCursor, TokenKind};
use crate::runtime::convert::parse_float;

/// Deepest parenthesized nesting the parser accepts
///
/// Also bounds the recursion depth of evaluating and dropping a parsed tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser for e-lang prefix expressions
///
/// Grammar, with one token of lookahead:
///
/// ```text
/// expression := '(' inner ')' | NUMERIC | STRING | IDENTIFIER | NULL
/// inner      := NUMERIC | STRING | IDENTIFIER | NULL | OPERATOR expression*
/// ```
pub struct Parser {
    cursor: TokenCursor,
    /// Current parenthesized nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new parser over a scanned token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            depth: 0,
        }
    }

    /// Parses the token sequence into a single expression tree
    ///
    /// The whole sequence must form exactly one expression.
    pub fn parse(&mut self) -> Result<Node> {
        let root = self.parse_expression()?;

        if let Some(extra) = self.cursor.look() {
            return Err(Error::TrailingTokens {
                token: extra.text.clone(),
            });
        }

        tracing::debug!(nodes = root.size(), depth = root.depth(), "parsed expression tree");
        Ok(root)
    }

    /// expression := '(' inner ')' | atom
    fn parse_expression(&mut self) -> Result<Node> {
        let kind = self.peek("expression")?.kind;

        match kind {
            TokenKind::LeftParen => self.parse_parenthesized(),
            kind if kind.is_atom() => self.parse_atom(),
            _ => Err(Error::UnexpectedToken {
                token: self.peek("expression")?.text.clone(),
            }),
        }
    }

    /// Parses `( atom )` or `( OPERATOR expression* )`
    fn parse_parenthesized(&mut self) -> Result<Node> {
        self.match_kind(TokenKind::LeftParen)?;

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }

        self.depth += 1;
        let node = self.parse_parenthesized_inner();
        self.depth -= 1;
        node
    }

    fn parse_parenthesized_inner(&mut self) -> Result<Node> {
        if self.peek("operator or literal")?.kind.is_atom() {
            let node = self.parse_atom()?;
            self.match_kind(TokenKind::RightParen)?;
            return Ok(node);
        }

        let operator = self.parse_operator()?;
        let children = self.parse_expression_list()?;
        self.match_text(")")?;

        tracing::trace!(operator = %operator, arity = children.len(), "operator application");
        Ok(Node::expression(operator, children))
    }

    /// Parses a bare literal or identifier
    fn parse_atom(&mut self) -> Result<Node> {
        let kind = self.peek("literal")?.kind;

        match kind {
            TokenKind::Numeric => {
                let token = self.match_kind(TokenKind::Numeric)?;
                parse_float(&token.text)
                    .map(Node::numeric)
                    .ok_or(Error::InvalidNumericLiteral {
                        literal: token.text,
                    })
            }
            TokenKind::String => {
                let token = self.match_kind(TokenKind::String)?;
                Ok(Node::string(token.text))
            }
            TokenKind::Identifier => {
                let token = self.match_kind(TokenKind::Identifier)?;
                Ok(Node::identifier(token.text))
            }
            TokenKind::Null => {
                self.match_kind(TokenKind::Null)?;
                Ok(Node::null())
            }
            _ => Err(self.expected_error("literal")),
        }
    }

    fn parse_operator(&mut self) -> Result<Operator> {
        let token = self.match_kind(TokenKind::Operator)?;
        Ok(Operator::from_spelling(&token.text).unwrap_or(Operator::None))
    }

    /// Collects sub-expressions up to the closing parenthesis or end of input
    fn parse_expression_list(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(token) = self.cursor.look() {
            if token.kind == TokenKind::RightParen {
                break;
            }
            nodes.push(self.parse_expression()?);
        }

        Ok(nodes)
    }

    // =========================================================================
    // Token matching
    // =========================================================================

    fn peek(&self, expected: &str) -> Result<&Token> {
        self.cursor.look().ok_or_else(|| Error::UnexpectedEof {
            expected: expected.to_string(),
        })
    }

    /// Consumes the lookahead token if it has the given kind
    fn match_kind(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.peek(&kind.to_string())?.clone();

        if token.kind != kind {
            return Err(self.expected_error(&kind.to_string()));
        }

        self.cursor.advance()?;
        Ok(token)
    }

    /// Consumes the lookahead token if its text is exactly `text`
    fn match_text(&mut self, text: &str) -> Result<Token> {
        let token = self.peek(text)?.clone();

        if token.text != text {
            return Err(self.expected_error(text));
        }

        self.cursor.advance()?;
        Ok(token)
    }

    fn expected_error(&self, expected: &str) -> Error {
        match self.cursor.look() {
            Some(token) => Error::Expected {
                expected: expected.to_string(),
                got: token.text.clone(),
            },
            None => Error::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }
}

/// Parses a token sequence into an expression tree
pub fn parse(tokens: Vec<Token>) -> Result<Node> {
    Parser::new(tokens).parse()
}
