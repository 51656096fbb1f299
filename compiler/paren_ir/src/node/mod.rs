//! Expression nodes.
//!
//! `Node` is a closed sum type. Every consumer matches on it exhaustively,
//! so a new variant is a compile error at each site rather than a runtime
//! surprise.
//!
//! The reader grows the stack to build arbitrarily deep trees, so every
//! walk over a tree must survive the same depth. `Drop` is iterative;
//! `Clone`, `PartialEq` and `Display` grow the stack per level.

use std::fmt;

use paren_stack::ensure_sufficient_stack;

/// Number of fractional digits used when rendering a number.
///
/// Six digits reproduce the classic `printf("%f")` output, so `14` renders
/// as `14.000000`.
pub const NUMBER_PRECISION: usize = 6;

/// One parsed unit of input.
#[derive(Debug)]
pub enum Node {
    /// A floating-point literal such as `3`, `-2.5` or `10.`.
    Number(f64),
    /// A bare word: any run of characters without blanks or parentheses
    /// that does not start like a number. Never empty.
    Symbol(String),
    /// A parenthesized form. May be empty.
    List(Vec<Node>),
}

impl Node {
    #[inline]
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    #[inline]
    pub fn list(children: Vec<Node>) -> Self {
        Node::List(children)
    }

    fn has_children(&self) -> bool {
        matches!(self, Node::List(children) if !children.is_empty())
    }

    /// Returns the symbol name if this node is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Node::Symbol(name) => Some(name),
            Node::Number(_) | Node::List(_) => None,
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let Node::List(children) = self else {
            return;
        };
        if !children.iter().any(Node::has_children) {
            return;
        }
        // Detach grandchildren before each child is dropped so that no
        // drop ever recurses more than one level.
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::List(grandchildren) = &mut node {
                pending.append(grandchildren);
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        match self {
            Node::Number(value) => Node::Number(*value),
            Node::Symbol(name) => Node::Symbol(name.clone()),
            Node::List(children) => ensure_sufficient_stack(|| Node::List(children.clone())),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Symbol(a), Node::Symbol(b)) => a == b,
            (Node::List(a), Node::List(b)) => ensure_sufficient_stack(|| a == b),
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{:.*}", NUMBER_PRECISION, value),
            Node::Symbol(name) => f.write_str(name),
            Node::List(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    ensure_sufficient_stack(|| write!(f, "{child}"))?;
                }
                f.write_str(")")
            }
        }
    }
}
