//! Byte-level reader over a source buffer.

use paren_ir::{Node, Span};
use paren_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::ParseError;
use crate::ParseErrorKind;

/// Blank bytes: the ASCII characters C's `isspace` accepts.
#[inline]
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn is_symbol_byte(byte: u8) -> bool {
    !is_blank(byte) && byte != b'(' && byte != b')'
}

#[inline]
fn is_number_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.'
}

/// Reads expressions from a source buffer, one per call.
///
/// The reader only stops on ASCII bytes, so its position always lands on a
/// character boundary as long as it started on one.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Reader { source, pos: 0 }
    }

    /// Create a reader at byte offset `pos`. Offsets past the end are
    /// clamped to the end, and an offset inside a multi-byte character is
    /// moved back to the start of that character.
    pub fn at(source: &'a str, pos: usize) -> Self {
        let mut pos = pos.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        Reader { source, pos }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn skip_blanks(&mut self) {
        while self.current().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Read one expression, skipping any blanks in front of it.
    pub fn read_expression(&mut self) -> Result<Node, ParseError> {
        self.skip_blanks();
        let Some(byte) = self.current() else {
            return Err(ParseError::unexpected_end(self.pos));
        };

        match byte {
            b'(' => ensure_sufficient_stack(|| self.read_list()),
            b')' => Err(ParseError::new(
                ParseErrorKind::UnexpectedCloseParen,
                Span::from_range(self.pos..self.pos + 1),
            )),
            b'0'..=b'9' => self.read_number(),
            b'-' if self.peek().is_some_and(|b| b.is_ascii_digit()) => self.read_number(),
            _ => Ok(self.read_symbol()),
        }
    }

    /// Fail with [`ParseErrorKind::TrailingInput`] unless only blanks remain.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        self.skip_blanks();
        if self.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::TrailingInput,
                Span::from_range(self.pos..self.source.len()),
            ))
        }
    }

    fn read_list(&mut self) -> Result<Node, ParseError> {
        let open = self.pos;
        self.pos += 1;
        trace!(open, "list");

        let mut children = Vec::new();
        loop {
            self.skip_blanks();
            match self.current() {
                Some(b')') => {
                    self.pos += 1;
                    return Ok(Node::List(children));
                }
                Some(_) => children.push(self.read_expression()?),
                None => return Err(ParseError::unclosed_list(self.pos, open)),
            }
        }
    }

    fn read_number(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        if self.current() == Some(b'-') {
            self.pos += 1;
        }
        self.advance_while(is_number_byte);

        let lexeme = &self.source[start..self.pos];
        trace!(lexeme, "number");
        lexeme.parse::<f64>().map(Node::Number).map_err(|source| {
            ParseError::malformed_number(lexeme, source, Span::from_range(start..self.pos))
        })
    }

    fn read_symbol(&mut self) -> Node {
        let start = self.pos;
        self.advance_while(is_symbol_byte);

        let name = &self.source[start..self.pos];
        debug_assert!(!name.is_empty(), "symbol run must be non-empty");
        trace!(name, "symbol");
        Node::Symbol(name.to_owned())
    }
}
