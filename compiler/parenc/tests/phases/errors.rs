//! Errors end to end: kinds, codes, explanations, rendering.

use crate::common::eval_error;
use paren_reader::ParseErrorKind;
use parenc::commands::explanation;
use parenc::reporting::{render_error, RenderOptions};
use parenc::RunError;
use pretty_assertions::assert_eq;

#[test]
fn missing_close_paren_is_end_of_input() {
    let RunError::Parse(err) = eval_error("(+ 1 2") else {
        panic!("expected a parse error");
    };
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn every_failure_code_has_an_explanation() {
    let failing = [
        "(+ 1 2",
        "(+ 1.2.3)",
        ")",
        "(+ 1) 2",
        "foo",
        "(foo 1)",
        "(+ 1 ())",
        "(/)",
        "(/ 1 0)",
    ];
    let mut codes: Vec<_> = failing.iter().map(|s| eval_error(s).code()).collect();
    for code in &codes {
        assert!(explanation(code).is_some(), "{code} is not explained");
    }
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), failing.len(), "each case should hit a distinct code");
}

#[test]
fn rendered_report_reads_like_the_classic_driver() {
    let source = "(* 2 (/ 8 0))";
    let err = eval_error(source);
    let mut out = Vec::new();
    render_error(&err, source, RenderOptions { color: false }, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error"), "{text}");
    assert!(text.contains("division by zero"), "{text}");
}
