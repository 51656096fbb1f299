//! Operator registry.
//!
//! Maps an operator name straight to its [`Operator`]. The registry holds
//! nothing else: no placeholder entries, no user data. Adding an operator
//! means writing one reduction and registering it.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::operators::register_builtins;
use crate::Operator;

/// Process-wide registry, built on first use.
static GLOBAL_REGISTRY: OnceLock<OperatorRegistry> = OnceLock::new();

/// Name to operator mapping.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    operators: FxHashMap<&'static str, Operator>,
}

impl OperatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        OperatorRegistry {
            operators: FxHashMap::default(),
        }
    }

    /// Create a registry holding `+ - * /`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register `op` under its name, replacing any operator of that name.
    pub fn register(&mut self, op: Operator) {
        self.operators.insert(op.name(), op);
    }

    pub fn get(&self, name: &str) -> Option<Operator> {
        self.operators.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered operator names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// The process-wide registry with the built-in operators.
///
/// Read-only once initialized, so it can be shared across threads.
pub fn global_registry() -> &'static OperatorRegistry {
    GLOBAL_REGISTRY.get_or_init(OperatorRegistry::with_builtins)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
