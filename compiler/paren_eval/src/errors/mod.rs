//! Evaluation errors.
//!
//! Every error is fatal to the current evaluation and surfaces unchanged to
//! the caller of [`evaluate`](crate::evaluate). Construct errors through the
//! factory functions below; they are `#[cold]` so the happy path stays tight.

use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Why an evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A symbol in value position has no registry entry.
    #[error("unbound symbol `{name}`")]
    UnboundSymbol { name: String },

    /// The head of a form is not a registered operator name.
    #[error("unknown operator `{name}`")]
    UnknownOperator { name: String },

    /// An operand evaluated to something other than a number.
    #[error("type mismatch in `{operator}`: expected number, got {got}")]
    TypeMismatch {
        operator: &'static str,
        got: &'static str,
    },

    /// An operator received fewer operands than its reduction needs.
    #[error("`{operator}` expects at least {min} operand(s), got {got}")]
    ArityError {
        operator: &'static str,
        min: usize,
        got: usize,
    },

    /// A `/` step divided by exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Stable error code, used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UnboundSymbol { .. } => "E2001",
            EvalError::UnknownOperator { .. } => "E2002",
            EvalError::TypeMismatch { .. } => "E2003",
            EvalError::ArityError { .. } => "E2004",
            EvalError::DivisionByZero => "E2005",
        }
    }
}

#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_owned(),
    }
}

#[cold]
pub fn unknown_operator(name: &str) -> EvalError {
    EvalError::UnknownOperator {
        name: name.to_owned(),
    }
}

#[cold]
pub fn type_mismatch(operator: &'static str, got: &'static str) -> EvalError {
    EvalError::TypeMismatch { operator, got }
}

#[cold]
pub fn arity_error(operator: &'static str, min: usize, got: usize) -> EvalError {
    EvalError::ArityError { operator, min, got }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}
