//! Paren CLI
//!
//! Reads one parenthesized arithmetic expression and prints its value.

use std::process::ExitCode;

use parenc::commands::{eval_source, explain_error, parse_source, run_file, USAGE_ERROR};
use parenc::{init_tracing, DEMO_INPUT};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // No arguments: evaluate the demonstration expression.
    let Some(command) = args.get(1) else {
        return eval_source(DEMO_INPUT);
    };

    match command.as_str() {
        "eval" => match args.get(2) {
            Some(expr) => eval_source(expr),
            None => usage_error("Usage: paren eval <expression>"),
        },
        "run" => match args.get(2) {
            Some(path) => run_file(path),
            None => usage_error("Usage: paren run <file>"),
        },
        "parse" => match args.get(2) {
            Some(expr) => parse_source(expr),
            None => usage_error("Usage: paren parse <expression>"),
        },
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_error(code),
            None => usage_error("Usage: paren explain <code>"),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("paren {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("{usage}");
    ExitCode::from(USAGE_ERROR)
}

fn print_usage() {
    println!("Paren - parenthesized arithmetic evaluator");
    println!();
    println!("Usage: paren [command] [argument]");
    println!();
    println!("Commands:");
    println!("  (none)               Evaluate the demo expression {DEMO_INPUT}");
    println!("  eval <expression>    Evaluate an expression, e.g. paren eval \"(- 10 3 2)\"");
    println!("  run <file>           Evaluate the expression stored in a file");
    println!("  parse <expression>   Print the tree the reader builds, without evaluating");
    println!("  explain <code>       Explain an error code (e.g., E2005)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=paren_eval=trace");
}
