//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interview Transcript Analyzer.
///
/// Extracts the text of an interview transcript (txt, pdf, or docx) and
/// asks Gemini for a structured assessment report.
#[derive(Parser, Debug)]
#[command(name = "interview-analyzer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the OpenAI-compatible generation endpoint.
    #[arg(long, env = "GEMINI_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one transcript and print the report.
    Analyze {
        /// Path to the transcript (txt, pdf, or docx).
        file: PathBuf,

        /// Declared content type (MIME), overriding the extension guess.
        #[arg(short = 't', long)]
        content_type: Option<String>,

        /// Fail on any error instead of rendering the fallback report.
        #[arg(long)]
        strict: bool,
    },

    /// Analyze transcripts one after another, reading paths from stdin.
    ///
    /// An empty line, `quit`, or `exit` ends the session.
    #[command(alias = "i")]
    Interactive,

    /// Print the analysis prompt template.
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "interview-analyzer",
            "analyze",
            "notes.pdf",
            "--content-type",
            "application/pdf",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                file,
                content_type,
                strict,
            } => {
                assert_eq!(file, PathBuf::from("notes.pdf"));
                assert_eq!(content_type.as_deref(), Some("application/pdf"));
                assert!(!strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_api_base_global() {
        let cli = Cli::try_parse_from([
            "interview-analyzer",
            "interactive",
            "--api-base",
            "http://localhost:8080/v1",
        ])
        .unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:8080/v1"));
        assert!(matches!(cli.command, Commands::Interactive));
    }

    #[test]
    fn test_analyze_requires_file() {
        assert!(Cli::try_parse_from(["interview-analyzer", "analyze"]).is_err());
    }
}
