//! Arithmetic, trigonometric and logarithmic operators

use std::f64::consts::TAU;

use crate::error::{Error, Result};
use crate::lexer::Operator;
use crate::parser::Node;
use crate::runtime::{Evaluator, Value};

/// Degrees in a full circle
const FULL_CIRCLE_DEGREES: f64 = 360.0;

impl Evaluator {
    /// Evaluates one of the math-group operators
    pub(super) fn eval_math(&mut self, operator: Operator, children: &[Node]) -> Result<Value> {
        match operator {
            Operator::Add => self.eval_add(children),
            Operator::Sub => self.fold_numeric(operator, children, |a, b| a - b),
            Operator::Mul => self.fold_numeric(operator, children, |a, b| a * b),
            Operator::Div => self.fold_numeric(operator, children, |a, b| a / b),
            Operator::Mod => self.fold_numeric(operator, children, |a, b| a % b),
            Operator::Pow => self.fold_numeric(operator, children, f64::powf),
            Operator::Sin => self.eval_unary(operator, children, f64::sin),
            Operator::Cos => self.eval_unary(operator, children, f64::cos),
            Operator::Tan => self.eval_unary(operator, children, f64::tan),
            Operator::Asin => self.eval_unary(operator, children, f64::asin),
            Operator::Acos => self.eval_unary(operator, children, f64::acos),
            Operator::Atan => self.eval_unary(operator, children, f64::atan),
            Operator::ToRad => {
                self.eval_unary(operator, children, |x| x * TAU / FULL_CIRCLE_DEGREES)
            }
            Operator::ToDeg => {
                self.eval_unary(operator, children, |x| x * FULL_CIRCLE_DEGREES / TAU)
            }
            Operator::Ln => self.eval_unary(operator, children, f64::ln),
            Operator::Exp => self.eval_unary(operator, children, f64::exp),
            Operator::Log10 => self.eval_unary(operator, children, f64::log10),
            _ => Err(Error::UnknownOperator),
        }
    }

    /// (+ a b ...) - numeric sum or string concatenation
    fn eval_add(&mut self, children: &[Node]) -> Result<Value> {
        let (first, rest) = split_first(Operator::Add, children)?;

        let mut acc = self.eval(first)?;
        if acc.is_none() {
            return Err(non_typed(Operator::Add));
        }

        for child in rest {
            let value = self.eval(child)?;
            acc = match (acc, value) {
                (Value::Numeric(a), Value::Numeric(b)) => Value::Numeric(a + b),
                (Value::String(mut a), Value::String(b)) => {
                    a.push_str(&b);
                    Value::String(a)
                }
                _ => return Err(mixed(Operator::Add)),
            };
        }

        Ok(acc)
    }

    /// Left fold over numeric children; strings are rejected outright
    fn fold_numeric(
        &mut self,
        operator: Operator,
        children: &[Node],
        combine: impl Fn(f64, f64) -> f64,
    ) -> Result<Value> {
        let (first, rest) = split_first(operator, children)?;

        let mut acc = self.numeric_operand(operator, first)?;

        for child in rest {
            match self.eval(child)? {
                Value::Numeric(n) => acc = combine(acc, n),
                _ => return Err(mixed(operator)),
            }
        }

        Ok(Value::Numeric(acc))
    }

    /// Single-argument numeric function
    fn eval_unary(
        &mut self,
        operator: Operator,
        children: &[Node],
        function: impl Fn(f64) -> f64,
    ) -> Result<Value> {
        let [only] = children else {
            return Err(Error::invalid_arguments(
                operator.name(),
                "only takes one argument",
            ));
        };

        let x = self.numeric_operand(operator, only)?;
        Ok(Value::Numeric(function(x)))
    }

    /// Evaluates the operand that fixes the result type of a numeric operator
    fn numeric_operand(&mut self, operator: Operator, node: &Node) -> Result<f64> {
        match self.eval(node)? {
            Value::Numeric(n) => Ok(n),
            Value::String(_) => Err(Error::StringOperand {
                operator: operator.name().to_string(),
            }),
            Value::None => Err(non_typed(operator)),
        }
    }
}

fn split_first(operator: Operator, children: &[Node]) -> Result<(&Node, &[Node])> {
    children.split_first().ok_or_else(|| Error::EmptyExpression {
        operator: operator.name().to_string(),
    })
}

fn non_typed(operator: Operator) -> Error {
    Error::NonTypedOperand {
        operator: operator.name().to_string(),
    }
}

fn mixed(operator: Operator) -> Error {
    Error::MixedOperands {
        operator: operator.name().to_string(),
    }
}
