//! Paren Reader - turns source text into an expression tree.
//!
//! The reader works directly on the bytes of the source buffer; there is no
//! separate token stream. One call reads exactly one expression and leaves
//! the cursor one past the last byte it consumed.
//!
//! # Grammar
//!
//! ```text
//! expr   = list | number | symbol
//! list   = "(" blank* (expr blank*)* ")"
//! number = "-"? digit (digit | ".")*
//! symbol = (any byte except blank, "(" and ")")+
//! ```
//!
//! A `-` is only the start of a number when a digit follows it directly, so
//! `-` and `-x` read as symbols.
//!
//! # Entry points
//!
//! - [`parse`]: read one expression and reject trailing input
//! - [`parse_expression`]: read one expression starting at an explicit cursor
//! - [`Reader`]: the stateful form both of the above wrap

mod error;
mod reader;

pub use error::{ParseError, ParseErrorKind};
pub use reader::Reader;

use paren_ir::Node;

/// Read the single expression in `source`.
///
/// Blanks around the expression are allowed; anything else after it fails
/// with [`ParseErrorKind::TrailingInput`].
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let mut reader = Reader::new(source);
    let node = reader.read_expression()?;
    reader.expect_end()?;
    Ok(node)
}

/// Read one expression from `buffer` starting at byte offset `*cursor`.
///
/// On success `*cursor` is advanced one past the consumed expression. On
/// failure `*cursor` is left where it was.
///
/// A cursor past the end reads as end of input. A cursor inside a
/// multi-byte character starts from the beginning of that character.
pub fn parse_expression(buffer: &str, cursor: &mut usize) -> Result<Node, ParseError> {
    let mut reader = Reader::at(buffer, *cursor);
    let node = reader.read_expression()?;
    *cursor = reader.position();
    Ok(node)
}
