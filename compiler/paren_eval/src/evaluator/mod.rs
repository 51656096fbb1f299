//! Tree-walking evaluator.
//!
//! # Rules
//!
//! - A number evaluates to itself.
//! - A symbol evaluates to the operator registered under its name.
//! - `()` evaluates to [`Value::Nil`].
//! - `(op a b ...)` requires `op` to be a symbol naming a registered
//!   operator. The operands are evaluated left to right, all before the
//!   operator runs, and each must produce a number.

use paren_ir::Node;
use paren_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::{type_mismatch, unbound_symbol, unknown_operator};
use crate::{global_registry, EvalError, EvalResult, Operator, OperatorRegistry, Value};

/// Evaluate `node` against the process-wide registry.
pub fn evaluate(node: &Node) -> EvalResult {
    Evaluator::new(global_registry()).eval(node)
}

/// Evaluator bound to an operator registry.
///
/// Holds no state beyond the registry reference, so one evaluator can be
/// reused for any number of trees.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'r> {
    registry: &'r OperatorRegistry,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r OperatorRegistry) -> Self {
        Evaluator { registry }
    }

    /// Reduce `node` to a value.
    pub fn eval(&self, node: &Node) -> EvalResult {
        match node {
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::Symbol(name) => self
                .registry
                .get(name)
                .map(Value::Operator)
                .ok_or_else(|| unbound_symbol(name)),
            Node::List(items) => match items.split_first() {
                None => Ok(Value::Nil),
                Some((head, operands)) => {
                    ensure_sufficient_stack(|| self.eval_form(head, operands))
                }
            },
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(head = %head))]
    fn eval_form(&self, head: &Node, operands: &[Node]) -> EvalResult {
        let op = self.operator_for(head)?;
        let values = operands
            .iter()
            .map(|operand| self.eval_operand(op, operand))
            .collect::<Result<Vec<f64>, EvalError>>()?;

        debug!(op = op.name(), operands = values.len(), "apply");
        op.apply(&values).map(Value::Number)
    }

    /// Resolve the head of a form. Only a symbol can name an operator; any
    /// other head is reported by its rendering.
    fn operator_for(&self, head: &Node) -> Result<Operator, EvalError> {
        match head.as_symbol() {
            Some(name) => self
                .registry
                .get(name)
                .ok_or_else(|| unknown_operator(name)),
            None => Err(unknown_operator(&head.to_string())),
        }
    }

    fn eval_operand(&self, op: Operator, operand: &Node) -> Result<f64, EvalError> {
        let value = self.eval(operand)?;
        value
            .as_number()
            .ok_or_else(|| type_mismatch(op.name(), value.type_name()))
    }
}
