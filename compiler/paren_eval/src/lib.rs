//! Paren Eval - tree-walking evaluator for Paren expressions.
//!
//! # Architecture
//!
//! - [`Evaluator`]: walks a [`Node`](paren_ir::Node) tree and reduces it to a [`Value`]
//! - [`OperatorRegistry`]: maps operator names to reduction functions
//! - [`global_registry`]: the process-wide registry holding `+ - * /`
//! - `errors`: [`EvalError`] and its factory functions
//!
//! Evaluation is pure: the registry is read-only once built and trees are
//! never mutated, so any number of threads may evaluate at once.

pub mod errors;
mod evaluator;
mod operators;
mod registry;
mod value;

pub use errors::{EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
pub use operators::{register_builtins, ADD, DIVIDE, MULTIPLY, SUBTRACT};
pub use registry::{global_registry, OperatorRegistry};
pub use value::{Operator, ReduceFn, Value};
