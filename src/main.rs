use std::{fs, process::ExitCode};

use clap::Parser;
use kestrel::{
    interpreter::{environment::Environment, evaluator::core::EvalOptions},
    parse, run_with,
};

/// kestrel runs small scripts made of declarations, functions, objects and
/// arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells kestrel to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the script's last statement.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the parsed program instead of running it.
    #[arg(long)]
    ast: bool,

    /// Arithmetic on non-numbers yields null instead of failing.
    #[arg(long)]
    lenient: bool,

    contents: String,
}

/// Installs a tracing subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=kestrel=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.ast {
        return match parse(&script) {
            Ok(program) => {
                println!("{program:#?}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let options = EvalOptions { lenient_arithmetic: args.lenient };
    match run_with(&script, &Environment::global(), options) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
