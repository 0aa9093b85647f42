use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::Operator;
use crate::runtime::{Value, ValueKind};

/// Node of the expression tree
///
/// An expression node owns its children outright; the tree has no sharing,
/// so dropping the root releases the whole program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Reference to a variable
    Identifier(String),

    /// Literal value (numeric, string, or `null`)
    ConstValue(Value),

    /// Operator application: `(op child...)`
    Expression {
        /// Operator to apply
        operator: Operator,
        /// Arguments, in source order
        children: Vec<Node>,
    },
}

/// Type tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Variable reference
    Identifier,
    /// Literal
    ConstValue,
    /// Operator application
    Expression,
}

impl Node {
    /// Creates a variable reference node
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    /// Creates a numeric literal node
    pub fn numeric(value: f64) -> Self {
        Node::ConstValue(Value::Numeric(value))
    }

    /// Creates a string literal node
    pub fn string(text: impl Into<String>) -> Self {
        Node::ConstValue(Value::String(text.into()))
    }

    /// Creates the `null` literal node
    pub fn null() -> Self {
        Node::ConstValue(Value::None)
    }

    /// Creates an operator application node
    pub fn expression(operator: Operator, children: Vec<Node>) -> Self {
        Node::Expression { operator, children }
    }

    /// Returns the type tag of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Identifier(_) => NodeKind::Identifier,
            Node::ConstValue(_) => NodeKind::ConstValue,
            Node::Expression { .. } => NodeKind::Expression,
        }
    }

    /// Returns the children of an expression node (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Expression { children, .. } => children,
            _ => &[],
        }
    }

    /// Counts this node and all of its descendants
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }

    /// Height of the tree rooted at this node (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

/// Renders the node back into parenthesized source form
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Identifier(name) => write!(f, "{}", name),
            Node::ConstValue(value) => match value.kind() {
                ValueKind::None => write!(f, "null"),
                ValueKind::Numeric => write!(f, "{}", value),
                ValueKind::String => write!(f, "{:?}", value.as_str().unwrap_or_default()),
            },
            Node::Expression { operator, children } => {
                write!(f, "({}", operator)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_kinds() {
        assert_eq!(Node::identifier("x").kind(), NodeKind::Identifier);
        assert_eq!(Node::numeric(1.0).kind(), NodeKind::ConstValue);
        assert_eq!(Node::null(), Node::ConstValue(Value::None));
        assert_eq!(
            Node::expression(Operator::Add, vec![Node::numeric(1.0)]).kind(),
            NodeKind::Expression
        );
    }

    #[test]
    fn test_size_and_depth() {
        let tree = Node::expression(
            Operator::Program,
            vec![
                Node::expression(
                    Operator::Assign,
                    vec![Node::identifier("x"), Node::numeric(2.0)],
                ),
                Node::expression(Operator::Print, vec![Node::identifier("x")]),
            ],
        );

        assert_eq!(tree.size(), 6);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Node::string("leaf").depth(), 1);
        assert!(Node::string("leaf").children().is_empty());
    }

    #[test]
    fn test_display() {
        let tree = Node::expression(
            Operator::Add,
            vec![Node::numeric(2.0), Node::string("a\"b"), Node::null()],
        );
        assert_eq!(tree.to_string(), r#"(+ 2 "a\"b" null)"#);
    }
}
