//! Reader error types.
//!
//! Every reader failure is fatal to the current read. The error records
//! what went wrong, where, and for unterminated lists, where the unmatched
//! `(` was.

use std::num::ParseFloatError;

use paren_ir::Span;
use thiserror::Error;

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The buffer ran out where an expression or a closing `)` was expected.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A digit-led lexeme that is not a valid float, such as `1.2.3`.
    #[error("malformed number `{lexeme}`: {source}")]
    MalformedNumber {
        lexeme: String,
        source: ParseFloatError,
    },

    /// A `)` appeared where an expression was expected.
    #[error("unexpected `)`")]
    UnexpectedCloseParen,

    /// Non-blank input followed a complete expression.
    #[error("unexpected input after expression")]
    TrailingInput,
}

impl ParseErrorKind {
    /// Stable error code, used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedEndOfInput => "E0001",
            ParseErrorKind::MalformedNumber { .. } => "E0002",
            ParseErrorKind::UnexpectedCloseParen => "E0003",
            ParseErrorKind::TrailingInput => "E0004",
        }
    }
}

/// A reader failure with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Where the failure was detected. Zero-length at end of input.
    pub span: Span,
    /// The `(` left open when input ran out inside a list.
    pub open_paren: Option<Span>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            open_paren: None,
        }
    }

    #[cold]
    pub(crate) fn unexpected_end(pos: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEndOfInput,
            Span::from_range(pos..pos),
        )
    }

    #[cold]
    pub(crate) fn unclosed_list(pos: usize, open: usize) -> Self {
        ParseError {
            open_paren: Some(Span::from_range(open..open + 1)),
            ..Self::unexpected_end(pos)
        }
    }

    #[cold]
    pub(crate) fn malformed_number(lexeme: &str, source: ParseFloatError, span: Span) -> Self {
        Self::new(
            ParseErrorKind::MalformedNumber {
                lexeme: lexeme.to_owned(),
                source,
            },
            span,
        )
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}
