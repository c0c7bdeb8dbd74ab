use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use boolrec::{lexer::lexer::tokenize, parser::parser::parse, render_source_context};
use clap::Parser;

/// Checks whether a file is a well-formed program of assignments and
/// `print` statements over boolean expressions.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Program to check
    #[arg(default_value = "input_boolean.txt")]
    input: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Show the offending source line under an error message
    #[arg(long)]
    show_source: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the input was accepted.
fn run(args: &Args) -> Result<bool> {
    let file_contents = read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let file_name = args.input.to_string_lossy().to_string();

    if args.tokens {
        return Ok(print_tokens(file_contents, file_name));
    }

    let start = Instant::now();
    let result = parse(file_contents.clone(), Some(file_name));
    tracing::info!("Parsed in {:?}", start.elapsed());

    match result {
        Ok(()) => {
            tracing::info!(input = %args.input.display(), "accepted");
            Ok(true)
        }
        Err(error) => {
            println!("{}", error);
            if args.show_source {
                println!("{}", render_source_context(&error, &file_contents));
            }
            Ok(false)
        }
    }
}

fn print_tokens(source: String, file_name: String) -> bool {
    match tokenize(source, Some(file_name)) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
            true
        }
        Err(error) => {
            println!("{}", error);
            false
        }
    }
}
