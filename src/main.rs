use std::{fs, io};

use clap::Parser;
use log::LevelFilter;
use simpas::{
    interpreter::evaluator::core::{DEFAULT_MAX_CALL_DEPTH, EvalConfig},
    run,
};

/// simpas runs programs written in a small imperative language with integer
/// variables, `if` and `while` blocks, and procedures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells simpas to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// How deeply procedure calls may nest.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Logs more details to stderr; repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = EvalConfig { max_call_depth: args.max_depth };

    if let Err(e) = run(&script, io::stdin().lock(), io::stdout().lock(), config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
