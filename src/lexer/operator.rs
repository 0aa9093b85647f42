//! Built-in operators and the static spelling tables shared by the
//! tokenizer and the parser.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::token::TokenKind;

/// Built-in operation identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Special operators
    /// `program` - evaluate every child in order
    Program,
    /// `assign` - bind a value to an identifier
    Assign,
    /// `to_numeric` - string to number conversion
    ToNumeric,
    /// `to_string` - number to string conversion
    ToString,
    /// `print` - write values to the output stream
    Print,
    /// `input` - prompt, then read one word
    Input,

    // Math operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// `to_rad`
    ToRad,
    /// `to_deg`
    ToDeg,
    /// `ln`
    Ln,
    /// `exp`
    Exp,
    /// `log10`
    Log10,

    /// Sentinel for an unrecognised spelling
    None,
}

/// Source spelling of every operator, in table order
const SPELLINGS: [(&str, Operator); 23] = [
    ("program", Operator::Program),
    ("assign", Operator::Assign),
    ("to_numeric", Operator::ToNumeric),
    ("to_string", Operator::ToString),
    ("print", Operator::Print),
    ("input", Operator::Input),
    ("+", Operator::Add),
    ("-", Operator::Sub),
    ("*", Operator::Mul),
    ("/", Operator::Div),
    ("%", Operator::Mod),
    ("^", Operator::Pow),
    ("sin", Operator::Sin),
    ("cos", Operator::Cos),
    ("tan", Operator::Tan),
    ("asin", Operator::Asin),
    ("acos", Operator::Acos),
    ("atan", Operator::Atan),
    ("to_rad", Operator::ToRad),
    ("to_deg", Operator::ToDeg),
    ("ln", Operator::Ln),
    ("exp", Operator::Exp),
    ("log10", Operator::Log10),
];

lazy_static! {
    /// Operator table: source spelling -> operator
    pub static ref OPERATORS: HashMap<&'static str, Operator> = SPELLINGS.iter().copied().collect();

    /// Keyword table: reserved non-operator words -> token kind
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut table = HashMap::new();
        table.insert("null", TokenKind::Null);
        table
    };
}

impl Operator {
    /// Looks up an operator by its source spelling
    pub fn from_spelling(word: &str) -> Option<Operator> {
        OPERATORS.get(word).copied()
    }

    /// Returns the source spelling (`"none"` for the sentinel)
    pub fn spelling(&self) -> &'static str {
        SPELLINGS
            .iter()
            .find(|(_, op)| op == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or("none")
    }

    /// Name used for this operator in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Mod => "mod",
            Operator::Pow => "pow",
            other => other.spelling(),
        }
    }

    /// Returns true for the non-math operators
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            Operator::Program
                | Operator::Assign
                | Operator::ToNumeric
                | Operator::ToString
                | Operator::Print
                | Operator::Input
        )
    }
}

/// Returns true if the word is an operator spelling
pub fn is_operator(word: &str) -> bool {
    OPERATORS.contains_key(word)
}

/// Returns the token kind of a keyword, if the word is one
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
