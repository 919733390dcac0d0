//! `print_ast` parses a GraphQL file and prints it back in canonical form.
//!
//! Parse errors are printed to stderr together with a snippet of the offending source, and the
//! process exits with a non-zero status.

use anyhow::Context;
use clap::Parser;
use graphql_syntax::ast::{parse_document, ASTContext, PrintNode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(clap::Parser, Debug)]
#[command(name = "print_ast", version, about = "Print a GraphQL document in canonical form")]
struct Cli {
    #[arg(help = "Path to the GraphQL document to print.")]
    file: PathBuf,

    #[arg(help = "Enable verbose output.", long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = ASTContext::new();
    match parse_document(&ctx, &source) {
        Ok(document) => {
            println!("{}", document.print());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.print(true));
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: &Path) -> anyhow::Result<String> {
    log::debug!("Reading `{}`.", file.display());
    std::fs::read_to_string(file).with_context(|| format!("Failed to read `{}`", file.display()))
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        let env_val = std::env::var("LOG_LEVEL").map(|s| s.trim().to_string());

        match env_val.as_deref() {
            Ok("TRACE" | "trace") => LevelFilter::TRACE,
            Ok("DEBUG" | "debug") => LevelFilter::DEBUG,
            Ok("INFO" | "info") => LevelFilter::INFO,
            Ok("WARN" | "warn") => LevelFilter::WARN,
            Ok("ERROR" | "error") => LevelFilter::ERROR,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                ));
                DEFAULT_LOG_LEVEL
            }
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
