//! Command handlers for the `paren` CLI.
//!
//! Each handler prints its own output and returns the process exit code:
//! 0 on success, 1 when the expression fails, 2 for usage errors.

use std::process::ExitCode;

use crate::reporting::eprint_error;
use crate::{read_source, run_source};

mod explain;

pub use explain::{explain_error, explanation};

/// Exit code for a failed read or evaluation.
const FAILURE: u8 = 1;

/// Exit code for bad command-line usage.
pub const USAGE_ERROR: u8 = 2;

/// Evaluate `source` and print `Result: <value>`.
pub fn eval_source(source: &str) -> ExitCode {
    match run_source(source) {
        Ok(value) => {
            println!("Result: {value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint_error(&err, source);
            ExitCode::from(FAILURE)
        }
    }
}

/// Evaluate the expression stored in the file at `path`.
pub fn run_file(path: &str) -> ExitCode {
    match std::fs::read_to_string(path) {
        Ok(source) => eval_source(&source),
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            ExitCode::from(FAILURE)
        }
    }
}

/// Print the tree the reader builds for `source`, without evaluating it.
pub fn parse_source(source: &str) -> ExitCode {
    match read_source(source) {
        Ok(tree) => {
            println!("{tree}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint_error(&err, source);
            ExitCode::from(FAILURE)
        }
    }
}
