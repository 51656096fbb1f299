//! Shared helpers for phase tests.

use paren_eval::Value;
use parenc::{run_source, RunError};

/// Evaluate `source`, panicking unless it produces a number.
pub fn eval_number(source: &str) -> f64 {
    match run_source(source) {
        Ok(Value::Number(n)) => n,
        other => panic!("expected a number from {source:?}, got {other:?}"),
    }
}

/// Evaluate `source`, panicking unless it fails.
pub fn eval_error(source: &str) -> RunError {
    match run_source(source) {
        Err(err) => err,
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
    }
}
