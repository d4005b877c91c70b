//! Kiln CLI
//!
//! Evaluates a tree produced by an external parser and handed over as JSON.

use clap::{ArgAction, Parser, Subcommand};
use kiln::ast::Expr;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kiln", version, about = "Kiln - expression tree evaluator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a JSON-encoded expression tree and print its value
    Run {
        /// Tree file, or `-` for stdin
        file: PathBuf,
    },
    /// Decode a JSON-encoded tree and print it back (schema check)
    Dump {
        /// Tree file, or `-` for stdin
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Run { file } => run_file(&file),
        Command::Dump { file } => dump_file(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn read_tree(path: &Path) -> Result<Expr, Box<dyn std::error::Error>> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let expr = serde_json::from_str(&source)?;
    tracing::debug!(path = %path.display(), "decoded expression tree");
    Ok(expr)
}

fn run_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let expr = read_tree(path)?;
    let value = kiln::evaluate(&expr)?;
    println!("{value}");
    Ok(())
}

fn dump_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let expr = read_tree(path)?;
    println!("{}", serde_json::to_string_pretty(&expr)?);
    Ok(())
}
