use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use elang::runtime::io::read_line;
use elang::{parse, tokenize, LineOutcome, Session, HELP_TEXT};

static TRACING_INIT: Once = Once::new();

/// e-lang is a tiny prefix-notation language with numbers, strings and
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs a source file instead of the interactive loop.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Stops after the given stage and prints its output as JSON. Reads the
    /// file given with --file, or stdin.
    #[arg(long, value_enum)]
    emit: Option<Emit>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    /// Token sequence
    Tokens,
    /// Expression tree
    Ast,
}

/// Logs to stderr when `RUST_LOG` is set
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    if let Some(emit) = args.emit {
        emit_stage(emit, args.file.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    match args.file {
        Some(path) => Ok(execute_file(&path)),
        None => {
            interactive_loop()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn emit_stage(emit: Emit, file: Option<&Path>) -> anyhow::Result<()> {
    let source = match file {
        Some(path) => elang::load_source(path)?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("cannot read stdin")?;
            source
        }
    };

    let tokens = tokenize(&source)?;
    let json = match emit {
        Emit::Tokens => serde_json::to_string_pretty(&tokens)?,
        Emit::Ast => serde_json::to_string_pretty(&parse(tokens)?)?,
    };
    println!("{json}");

    Ok(())
}

fn execute_file(path: &Path) -> ExitCode {
    match elang::run_file(path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}.");
            ExitCode::FAILURE
        }
    }
}

fn interactive_loop() -> anyhow::Result<()> {
    println!("\t-*- e-lang -*-");
    println!("Enter \":help\" if you are lost.");

    let mut session = Session::new();
    let stdin = io::stdin();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let line = match read_line(&mut stdin.lock()) {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("Error reading input: {err}.");
                continue;
            }
        };

        match session.execute_line(&line) {
            Ok(LineOutcome::Skip) => {}
            Ok(LineOutcome::Quit) => break,
            Ok(LineOutcome::Cleared) => println!("Runtime has been cleared."),
            Ok(LineOutcome::Help) => println!("{HELP_TEXT}"),
            Ok(LineOutcome::Value(Some(value))) if !value.is_none() => println!("{value}"),
            Ok(LineOutcome::Value(_)) => {}
            Err(err) => {
                eprintln!("{err}.");
                eprintln!("Runtime has been cleared.");
            }
        }
    }

    Ok(())
}
