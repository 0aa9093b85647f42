use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};
use crate::lexer::Operator;
use crate::parser::{Node, NodeKind};
use crate::runtime::convert::{format_float, parse_float};
use crate::runtime::io::{write_flushed, InputSource};
use crate::runtime::{Environment, Value};

/// Tree-walking evaluator for e-lang expression trees
///
/// Holds the variable environment across calls to [`Evaluator::eval`], so a
/// driver can evaluate line after line against the same bindings:
///
/// - `(program e...)` - evaluate each child in order
/// - `(assign name value)` - bind a value
/// - `(to_numeric v)` / `(to_string v)` - conversions
/// - `(print v...)` / `(input prompt...)` - stream I/O
/// - `+ - * / % ^` and the single-argument math functions
pub struct Evaluator {
    /// Variable environment
    env: Environment,
    /// Sink for `print` and `input` prompts
    output: Box<dyn Write>,
    /// Source for `input`
    input: InputSource,
}

impl Evaluator {
    /// Creates an evaluator bound to stdout and stdin
    pub fn new() -> Self {
        Evaluator {
            env: Environment::new(),
            output: Box::new(io::stdout()),
            input: InputSource::Stdin,
        }
    }

    /// Creates an evaluator bound to the given streams
    pub fn with_io(output: impl Write + 'static, input: impl BufRead + 'static) -> Self {
        Evaluator {
            env: Environment::new(),
            output: Box::new(output),
            input: InputSource::Reader(Box::new(input)),
        }
    }

    /// Variable environment
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Mutable variable environment
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Removes every variable binding
    pub fn clear(&mut self) {
        tracing::debug!(bindings = self.env.len(), "clearing environment");
        self.env.clear();
    }

    /// Evaluates an expression tree
    pub fn eval(&mut self, node: &Node) -> Result<Value> {
        match node {
            Node::Identifier(name) => self.env.get(name).cloned().ok_or_else(|| {
                Error::UnassignedIdentifier {
                    name: name.clone(),
                }
            }),

            Node::ConstValue(value) => Ok(value.clone()),

            Node::Expression { operator, children } => {
                if children.is_empty() {
                    return Err(Error::EmptyExpression {
                        operator: operator.name().to_string(),
                    });
                }

                tracing::trace!(operator = %operator, arity = children.len(), "eval");
                self.apply(*operator, children)
            }
        }
    }

    /// Dispatches an operator application to its evaluation routine
    fn apply(&mut self, operator: Operator, children: &[Node]) -> Result<Value> {
        match operator {
            Operator::None => Err(Error::UnknownOperator),
            special if special.is_special() => self.eval_special(special, children),
            math => self.eval_math(math, children),
        }
    }

    // =========================================================================
    // SPECIAL OPERATORS
    // =========================================================================

    fn eval_special(&mut self, operator: Operator, children: &[Node]) -> Result<Value> {
        match operator {
            Operator::Program => self.eval_program(children),
            Operator::Assign => self.eval_assign(children),
            Operator::ToNumeric => self.eval_to_numeric(children),
            Operator::ToString => self.eval_to_string(children),
            Operator::Print => self.eval_print(children),
            Operator::Input => self.eval_input(children),
            _ => Err(Error::UnknownOperator),
        }
    }

    /// (program e1 e2 ...) - evaluate for side effects, yield nothing
    fn eval_program(&mut self, children: &[Node]) -> Result<Value> {
        for child in children {
            self.eval(child)?;
        }
        Ok(Value::None)
    }

    /// (assign name value) - bind, overwriting any previous value
    fn eval_assign(&mut self, children: &[Node]) -> Result<Value> {
        let [target, source] = children else {
            return Err(Error::invalid_arguments(
                "assign",
                "takes exactly two arguments",
            ));
        };

        let Node::Identifier(name) = target else {
            return Err(Error::invalid_arguments(
                "assign",
                "first argument must be an identifier",
            ));
        };

        if !matches!(source.kind(), NodeKind::ConstValue | NodeKind::Expression) {
            return Err(Error::invalid_arguments(
                "assign",
                "second argument must be a constant value or an expression",
            ));
        }

        // Evaluate fully before touching the environment
        let value = self.eval(source)?;
        tracing::debug!(name = %name, kind = value.type_name(), "assign");
        self.env.set(name.clone(), value);

        Ok(Value::None)
    }

    /// (to_numeric v) - parse a string as a number; numbers pass through
    fn eval_to_numeric(&mut self, children: &[Node]) -> Result<Value> {
        let value = self.eval_single(Operator::ToNumeric, children)?;

        match value {
            Value::Numeric(_) => Ok(value),
            Value::String(text) => parse_float(&text)
                .map(Value::Numeric)
                .ok_or(Error::InvalidConversion { text }),
            Value::None => Err(Error::NonTypedOperand {
                operator: Operator::ToNumeric.name().to_string(),
            }),
        }
    }

    /// (to_string v) - format a number as text; strings pass through
    fn eval_to_string(&mut self, children: &[Node]) -> Result<Value> {
        let value = self.eval_single(Operator::ToString, children)?;

        match value {
            Value::String(_) => Ok(value),
            Value::Numeric(n) => Ok(Value::String(format_float(n))),
            Value::None => Err(Error::NonTypedOperand {
                operator: Operator::ToString.name().to_string(),
            }),
        }
    }

    /// (print v...) - write each value with no separators
    fn eval_print(&mut self, children: &[Node]) -> Result<Value> {
        for child in children {
            let value = self.eval(child)?;
            write_flushed(self.output.as_mut(), &value.to_string())?;
        }
        Ok(Value::None)
    }

    /// (input prompt...) - print the prompt, then read one word
    fn eval_input(&mut self, children: &[Node]) -> Result<Value> {
        self.eval_print(children)?;

        match self.input.read_word()? {
            Some(word) => Ok(Value::String(word)),
            None => Err(Error::Io {
                message: "input stream is exhausted".to_string(),
            }),
        }
    }

    /// Checks for exactly one child and evaluates it
    fn eval_single(&mut self, operator: Operator, children: &[Node]) -> Result<Value> {
        match children {
            [only] => self.eval(only),
            _ => Err(Error::invalid_arguments(
                operator.name(),
                "only takes one argument",
            )),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
