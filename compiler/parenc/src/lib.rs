//! Paren driver - read, evaluate, report.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! paren_reader::parse ──► Node
//!     │
//!     ▼
//! paren_eval::evaluate ──► Value
//! ```
//!
//! Either step can fail; both failures are folded into [`RunError`] and
//! rendered by [`reporting`].

pub mod commands;
pub mod reporting;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use paren_eval::{evaluate, EvalError, Value};
use paren_ir::Node;
use paren_reader::{parse, ParseError};
use thiserror::Error;
use tracing::debug;

/// Expression evaluated when `paren` is run without arguments.
pub const DEMO_INPUT: &str = "(+ 1 2 (* 3 4))";

/// Failure from either pipeline step.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    pub fn code(&self) -> &'static str {
        match self {
            RunError::Parse(err) => err.code(),
            RunError::Eval(err) => err.code(),
        }
    }
}

/// Read the single expression in `source` without evaluating it.
pub fn read_source(source: &str) -> Result<Node, RunError> {
    let tree = parse(source)?;
    debug!(%tree, "parsed");
    Ok(tree)
}

/// Read and evaluate the single expression in `source`.
pub fn run_source(source: &str) -> Result<Value, RunError> {
    let tree = read_source(source)?;
    let value = evaluate(&tree)?;
    debug!(%value, "evaluated");
    Ok(value)
}
