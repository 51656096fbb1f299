//! The `explain` command: describe an error code.

use std::process::ExitCode;

use super::USAGE_ERROR;

/// Long-form description of an error code, if it is known.
pub fn explanation(code: &str) -> Option<&'static str> {
    let text = match code.to_ascii_uppercase().as_str() {
        "E0001" => {
            "E0001: unexpected end of input\n\n\
             The input ended where an expression or a closing `)` was expected.\n\
             Usually a list is missing its `)`:\n\n    (+ 1 2      -> (+ 1 2)"
        }
        "E0002" => {
            "E0002: malformed number\n\n\
             A token that starts with a digit (or `-` and a digit) is read as a\n\
             number and must be a valid decimal, e.g. `3`, `-2.5`, `10.`.\n\
             `1.2.3` has too many decimal points."
        }
        "E0003" => {
            "E0003: unexpected `)`\n\n\
             A `)` appeared where an expression was expected, with no `(` to close."
        }
        "E0004" => {
            "E0004: unexpected input after expression\n\n\
             Only one expression is read. Wrap several in a form instead:\n\n    \
             (+ 1 2) 3   -> (+ (+ 1 2) 3)"
        }
        "E2001" => {
            "E2001: unbound symbol\n\n\
             A bare symbol is evaluated by looking it up among the operators.\n\
             Only `+`, `-`, `*` and `/` are defined."
        }
        "E2002" => {
            "E2002: unknown operator\n\n\
             The first element of a form must name an operator: `+`, `-`, `*` or `/`.\n\n    \
             (foo 1 2)   -> (+ 1 2)"
        }
        "E2003" => {
            "E2003: type mismatch\n\n\
             Every operand must evaluate to a number. `()` evaluates to nothing\n\
             and a bare operator evaluates to the operator itself."
        }
        "E2004" => {
            "E2004: wrong number of operands\n\n\
             `-` and `/` need at least one operand. `+` and `*` accept none:\n\
             `(+)` is 0 and `(*)` is 1. With one operand, `-` and `/` return it\n\
             unchanged: `(- 7)` is 7."
        }
        "E2005" => {
            "E2005: division by zero\n\n\
             A divisor after the first operand of `/` evaluated to exactly 0."
        }
        _ => return None,
    };
    Some(text)
}

pub fn explain_error(code: &str) -> ExitCode {
    if let Some(text) = explanation(code) {
        println!("{text}");
        ExitCode::SUCCESS
    } else {
        eprintln!("error: unknown error code '{code}'");
        ExitCode::from(USAGE_ERROR)
    }
}
