use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use lox::{Session, error::Diagnostics};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status when the script file or the prompt input cannot be read.
const EXIT_IO_ERROR: u8 = 74;

/// lox runs scripts written in a small dynamically-typed language. Without a
/// script it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    script: Option<PathBuf>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, conflicts_with = "script")]
    eval: Option<String>,

    /// Logs the pipeline stages to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(source) = args.eval {
        return run_source(&source);
    }

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set or `--verbose` is
/// given; otherwise logging stays off.
fn init_tracing(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("lox=debug"),
        Err(_) => return,
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn run_file(path: &Path) -> ExitCode {
    match fs::read_to_string(path) {
        Ok(source) => run_source(&source),
        Err(error) => {
            eprintln!("Failed to read the input file '{}': {error}", path.display());
            ExitCode::from(EXIT_IO_ERROR)
        },
    }
}

fn run_source(source: &str) -> ExitCode {
    let mut session = Session::new(io::stdout());
    let diagnostics = session.run(source);

    report(diagnostics);
    ExitCode::from(diagnostics.exit_code())
}

/// Reads and runs one line at a time until end of input.
///
/// Errors are reported and the prompt keeps going; definitions from earlier
/// lines stay visible. Input that cannot be read, such as a line that is not
/// valid UTF-8, is reported and ends the prompt.
fn run_prompt() -> ExitCode {
    let mut session = Session::new(io::stdout());
    let mut lines = io::stdin().lock().lines();
    let mut status = ExitCode::SUCCESS;

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                eprintln!("Failed to read input: {error}");
                status = ExitCode::from(EXIT_IO_ERROR);
                break;
            },
            None => break,
        };

        if let Some(value) = session.echo_line(&line) {
            println!("{value}");
        }
        report(session.diagnostics());
    }

    debug!(had_runtime_error = session.diagnostics().had_runtime_error(), "prompt closed");
    status
}

fn report(diagnostics: &Diagnostics) {
    for report in diagnostics.reports() {
        eprintln!("{report}");
    }
}
