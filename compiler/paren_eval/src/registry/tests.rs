use super::{global_registry, OperatorRegistry};
use crate::{EvalError, Operator, ADD};
use pretty_assertions::assert_eq;

fn max(operands: &[f64]) -> Result<f64, EvalError> {
    Ok(operands.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

#[test]
fn new_registry_is_empty() {
    let registry = OperatorRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.get("+"), None);
}

#[test]
fn builtins_hold_exactly_four_operators() {
    let registry = OperatorRegistry::with_builtins();
    let mut names: Vec<_> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["*", "+", "-", "/"]);
    assert_eq!(registry.len(), 4);
}

#[test]
fn lookup_returns_the_registered_operator() {
    let registry = OperatorRegistry::with_builtins();
    assert_eq!(registry.get("+"), Some(ADD));
    assert!(registry.contains("/"));
    assert!(!registry.contains("foo"));
}

#[test]
fn registering_is_a_pure_addition() {
    let mut registry = OperatorRegistry::with_builtins();
    registry.register(Operator::new("max", max));

    assert_eq!(registry.len(), 5);
    let op = registry.get("max").unwrap();
    assert_eq!(op.apply(&[1.0, 9.0, 3.0]).unwrap(), 9.0);
}

#[test]
fn re_registering_replaces() {
    let mut registry = OperatorRegistry::new();
    registry.register(Operator::new("+", max));
    registry.register(ADD);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("+").unwrap().apply(&[1.0, 2.0]).unwrap(), 3.0);
}

#[test]
fn global_registry_is_shared() {
    let a = global_registry();
    let b = global_registry();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), 4);
}
