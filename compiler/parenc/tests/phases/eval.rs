//! Evaluation phase, driven from source text.

use crate::common::{eval_error, eval_number};
use paren_eval::{EvalError, Value};
use parenc::{run_source, RunError, DEMO_INPUT};
use pretty_assertions::assert_eq;

#[test]
fn demo_input_is_fourteen() {
    assert_eq!(eval_number(DEMO_INPUT), 14.0);
    assert_eq!(run_source(DEMO_INPUT).unwrap().to_string(), "14.000000");
}

#[test]
fn subtraction_folds_left() {
    assert_eq!(eval_number("(- 10 3 2)"), 5.0);
}

#[test]
fn single_operand_minus_is_not_negation() {
    assert_eq!(eval_number("(- 7)"), 7.0);
}

#[test]
fn empty_operand_identities() {
    assert_eq!(eval_number("(+)"), 0.0);
    assert_eq!(eval_number("(*)"), 1.0);
}

#[test]
fn empty_form_is_nil() {
    let value = run_source("()").unwrap();
    assert_eq!(value, Value::Nil);
    assert_eq!(value.to_string(), "()");
}

#[test]
fn fractional_arithmetic() {
    assert_eq!(eval_number("(/ (+ 0.5 0.25) 3)"), 0.25);
    assert_eq!(eval_number("(* -2 1.5)"), -3.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(
        eval_error("(/ 8 0)"),
        RunError::Eval(EvalError::DivisionByZero)
    );
}

#[test]
fn unknown_operator_is_named() {
    assert_eq!(
        eval_error("(foo 1 2)"),
        RunError::Eval(EvalError::UnknownOperator {
            name: "foo".to_string()
        })
    );
}

#[test]
fn empty_minus_and_divide_are_arity_errors() {
    for source in ["(-)", "(/)"] {
        assert!(
            matches!(
                eval_error(source),
                RunError::Eval(EvalError::ArityError { .. })
            ),
            "{source}"
        );
    }
}
