//! Paren IR - expression tree types shared by the reader and evaluator.
//!
//! # Types
//!
//! - [`Node`]: one parsed unit of input (number, symbol, or list)
//! - [`Span`]: half-open byte range into the source buffer
//!
//! Nodes own their children directly. A tree is built once by the reader
//! and never mutated afterwards, so it can be shared freely by reference
//! across threads.

mod node;
mod span;

pub use node::{Node, NUMBER_PRECISION};
pub use span::Span;
