//! Built-in arithmetic operators.
//!
//! Each reduction folds left over operands that have already been evaluated
//! to numbers. `+` and `*` have identities and accept zero operands; `-` and
//! `/` start the fold from their first operand and so need at least one.
//!
//! With a single operand, `-` and `/` return it unchanged. `(- 7)` is `7`,
//! not `-7`.

use crate::errors::{arity_error, division_by_zero};
use crate::{EvalError, Operator, OperatorRegistry};

pub const ADD: Operator = Operator::new("+", add);
pub const SUBTRACT: Operator = Operator::new("-", subtract);
pub const MULTIPLY: Operator = Operator::new("*", multiply);
pub const DIVIDE: Operator = Operator::new("/", divide);

/// Register `+ - * /` in `registry`.
pub fn register_builtins(registry: &mut OperatorRegistry) {
    for op in [ADD, SUBTRACT, MULTIPLY, DIVIDE] {
        registry.register(op);
    }
}

// `Iterator::sum` on floats starts from -0.0, which would render an empty
// sum as `-0.000000`. Fold from the identities explicitly.

fn add(operands: &[f64]) -> Result<f64, EvalError> {
    Ok(operands.iter().fold(0.0, |acc, x| acc + x))
}

fn multiply(operands: &[f64]) -> Result<f64, EvalError> {
    Ok(operands.iter().fold(1.0, |acc, x| acc * x))
}

fn subtract(operands: &[f64]) -> Result<f64, EvalError> {
    let Some((&first, rest)) = operands.split_first() else {
        return Err(arity_error("-", 1, 0));
    };
    Ok(rest.iter().fold(first, |acc, x| acc - x))
}

fn divide(operands: &[f64]) -> Result<f64, EvalError> {
    let Some((&first, rest)) = operands.split_first() else {
        return Err(arity_error("/", 1, 0));
    };
    rest.iter().try_fold(first, |acc, &divisor| {
        if divisor == 0.0 {
            Err(division_by_zero())
        } else {
            Ok(acc / divisor)
        }
    })
}
