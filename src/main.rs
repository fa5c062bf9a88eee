//! Binary entry point for interview-analyzer.
//!
//! Interview Transcript Analyzer: structured assessment reports from
//! interview transcripts.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use interview_analyzer::cli::{Cli, TerminalSurface, execute};
use interview_analyzer::error::CommandError;
use interview_analyzer::{config, setup_logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Seed the environment before clap reads env-backed flags.
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut surface = TerminalSurface::new(io::stdout().lock(), io::stderr().lock());

    match execute(&cli, &mut surface, &mut input) {
        Ok(status) => {
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Some(e) = surface.take_failure()
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error: {}", CommandError::OutputFailed(e.to_string()));
                return ExitCode::FAILURE;
            }
            if status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            drop(surface);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
