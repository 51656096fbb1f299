//! Runtime values.

use std::fmt;

use paren_ir::NUMBER_PRECISION;

use crate::EvalError;

/// Reduction function behind an operator: combines already-evaluated
/// operands into one number.
pub type ReduceFn = fn(&[f64]) -> Result<f64, EvalError>;

/// A named reduction, as stored in an [`OperatorRegistry`](crate::OperatorRegistry).
///
/// Operators compare equal by name.
#[derive(Clone, Copy)]
pub struct Operator {
    name: &'static str,
    reduce: ReduceFn,
}

impl Operator {
    pub const fn new(name: &'static str, reduce: ReduceFn) -> Self {
        Operator { name, reduce }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Combine `operands` with this operator's reduction.
    #[inline]
    pub fn apply(&self, operands: &[f64]) -> Result<f64, EvalError> {
        (self.reduce)(operands)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Operator {}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self.name)
    }
}

/// Result of evaluating a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    /// What a bare operator symbol such as `+` evaluates to.
    Operator(Operator),
    /// The result of evaluating `()`.
    Nil,
}

impl Value {
    /// Short name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Operator(_) => "operator",
            Value::Nil => "nil",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Operator(_) | Value::Nil => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:.*}", NUMBER_PRECISION, n),
            Value::Operator(op) => f.write_str(op.name()),
            Value::Nil => f.write_str("()"),
        }
    }
}
