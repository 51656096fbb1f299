//! Terminal rendering of reader and evaluator errors.
//!
//! Reader errors carry a span and are rendered as a labelled source
//! snippet. Evaluator errors have no span; they label the whole expression.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use paren_reader::ParseErrorKind;

use crate::RunError;

/// Rendering options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Emit ANSI colors.
    pub color: bool,
}

/// Render `error` against `source` into `out`.
pub fn render_error(
    error: &RunError,
    source: &str,
    options: RenderOptions,
    mut out: impl Write,
) -> io::Result<()> {
    let report = build_report(error, source, options);
    report.write(Source::from(source), &mut out)
}

/// Render `error` to stderr, with colors when stderr is a terminal.
pub fn eprint_error(error: &RunError, source: &str) {
    let options = RenderOptions {
        color: io::IsTerminal::is_terminal(&io::stderr()),
    };
    if render_error(error, source, options, io::stderr().lock()).is_err() {
        // The report could not be written; fall back to a bare line.
        eprintln!("Error: {error}");
    }
}

fn build_report(
    error: &RunError,
    source: &str,
    options: RenderOptions,
) -> Report<'static, Range<usize>> {
    // Spans are byte offsets.
    let config = Config::default()
        .with_color(options.color)
        .with_index_type(IndexType::Byte);

    match error {
        RunError::Parse(err) => {
            let primary = visible_range(err.span.to_range(), source);
            let mut builder = Report::build(ReportKind::Error, (), primary.start)
                .with_config(config)
                .with_code(err.code())
                .with_message(err.to_string())
                .with_label(
                    Label::new(primary)
                        .with_message(parse_label(&err.kind))
                        .with_color(Color::Red),
                );
            if let Some(open) = err.open_paren {
                builder = builder.with_label(
                    Label::new(open.to_range())
                        .with_message("this `(` is never closed")
                        .with_color(Color::Yellow),
                );
            }
            builder.finish()
        }
        RunError::Eval(err) => {
            let whole = expression_range(source);
            Report::build(ReportKind::Error, (), whole.start)
                .with_config(config)
                .with_code(err.code())
                .with_message(err.to_string())
                .with_label(
                    Label::new(whole)
                        .with_message("while evaluating this expression")
                        .with_color(Color::Red),
                )
                .finish()
        }
    }
}

fn parse_label(kind: &ParseErrorKind) -> &'static str {
    match kind {
        ParseErrorKind::UnexpectedEndOfInput => "input ends here",
        ParseErrorKind::MalformedNumber { .. } => "not a valid number",
        ParseErrorKind::UnexpectedCloseParen => "no matching `(`",
        ParseErrorKind::TrailingInput => "expected nothing after the expression",
    }
}

/// Zero-length spans at end of input have nothing to underline; point at
/// the last character instead.
fn visible_range(range: Range<usize>, source: &str) -> Range<usize> {
    if !range.is_empty() || range.start == 0 {
        return range;
    }
    let start = source[..range.start]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i);
    start..range.start
}

/// Byte range of `source` with surrounding blanks trimmed.
fn expression_range(source: &str) -> Range<usize> {
    let start = source.len() - source.trim_start().len();
    let end = source.trim_end().len().max(start);
    start..end
}
