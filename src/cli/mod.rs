//! CLI layer for interview-analyzer.
//!
//! Provides the command-line interface using clap, with commands for
//! analyzing one transcript, running an interactive upload session, and
//! printing the prompt template.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{RunStatus, accept_upload, execute, execute_with_config};
pub use output::TerminalSurface;
pub use parser::{Cli, Commands};
