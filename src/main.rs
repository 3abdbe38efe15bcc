use std::{fs, process::ExitCode};

use clap::Parser;
use shunt::{
    convert_infix_to_postfix, evaluate_infix, repl,
    util::logger::{self, LogLevel},
};

/// shunt evaluates infix arithmetic expressions by converting them to postfix
/// form with the shunting-yard algorithm.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a file holding one expression per line.
    /// Lines ending in '\' continue onto the next line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the postfix form of each expression instead of its value.
    #[arg(short, long)]
    postfix: bool,

    /// Verbosity of diagnostics written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// The expression to evaluate. Starts the interactive calculator when
    /// omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_with_level(args.log_level);

    let Some(contents) = args.contents else {
        return match repl::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Interactive session failed: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let expressions = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => repl::logical_lines(&script),
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![contents]
    };

    let mut status = ExitCode::SUCCESS;
    for expression in &expressions {
        let outcome = if args.postfix {
            convert_infix_to_postfix(expression)
        } else {
            evaluate_infix(expression).map(|value| value.to_string())
        };
        match outcome {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::debug!(cause = ?e.cause(), "expression failed");
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}
