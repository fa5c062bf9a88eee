//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{ContentType, Session, Surface, UploadOutcome, UploadedDocument};
use crate::error::{CommandError, Result};
use crate::generation::{GeminiClient, TextGenerator};
use crate::io::read_upload;
use crate::prompt::build_prompt;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

/// Application title shown once at startup.
pub const APP_TITLE: &str = "Interview Transcript Analyzer";

/// File extensions accepted for upload, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["txt", "pdf", "docx"];

/// Instructions shown when the interactive session starts.
pub const UPLOAD_INSTRUCTIONS: &str =
    "Upload Interview Transcript (txt, pdf, docx): enter a file path per line, or an empty line to quit.";

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every requested report was rendered (fallback included).
    Completed,
    /// An upload was rejected or halted before a report was rendered.
    Halted,
}

impl RunStatus {
    /// Returns `true` if the run completed.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Executes the CLI command against the process environment.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `surface` - Where the flow is rendered.
/// * `input` - Source of upload paths for the interactive command.
///
/// # Errors
///
/// Returns an error if reading `input` fails, or for any failure of a
/// strict `analyze`. Otherwise upload and generation failures are shown on
/// `surface` and reflected in the [`RunStatus`].
pub fn execute(cli: &Cli, surface: &mut dyn Surface, input: &mut dyn BufRead) -> Result<RunStatus> {
    let mut config = Config::from_env();
    if let Some(base) = &cli.api_base {
        config = config.with_api_base(base.clone());
    }
    execute_with_config(cli, config, surface, input)
}

/// Executes the CLI command with an explicit configuration.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_with_config(
    cli: &Cli,
    config: Config,
    surface: &mut dyn Surface,
    input: &mut dyn BufRead,
) -> Result<RunStatus> {
    debug!(?config, "Resolved configuration");

    match &cli.command {
        Commands::Template => Ok(cmd_template(surface)),
        Commands::Analyze {
            file,
            content_type,
            strict: true,
        } => cmd_analyze_strict(&config, file, content_type.as_deref(), surface),
        Commands::Analyze {
            file,
            content_type,
            strict: false,
        } => {
            let mut session = start_session(&config, surface);
            Ok(cmd_analyze(
                &mut session,
                file,
                content_type.as_deref(),
                surface,
            ))
        }
        Commands::Interactive => {
            let mut session = start_session(&config, surface);
            cmd_interactive(&mut session, input, surface)
        }
    }
}

/// Shows the title, reports a configuration problem once, and builds the
/// session. A missing key does not stop startup.
fn start_session(config: &Config, surface: &mut dyn Surface) -> Session<GeminiClient> {
    surface.title(APP_TITLE);
    if let Err(e) = config.validate() {
        surface.error(&e.to_string());
    }
    Session::new(GeminiClient::new(config))
}

fn cmd_template(surface: &mut dyn Surface) -> RunStatus {
    surface.status(&build_prompt(""));
    RunStatus::Completed
}

fn cmd_analyze<G: TextGenerator>(
    session: &mut Session<G>,
    path: &Path,
    declared: Option<&str>,
    surface: &mut dyn Surface,
) -> RunStatus {
    match accept_upload(path, declared) {
        Ok(document) => status_of(&session.handle_upload(document, surface)),
        Err(e) => {
            surface.error(&format!("Error processing file: {e}"));
            RunStatus::Halted
        }
    }
}

/// Runs one upload with every failure returned as an error.
fn cmd_analyze_strict(
    config: &Config,
    path: &Path,
    declared: Option<&str>,
    surface: &mut dyn Surface,
) -> Result<RunStatus> {
    surface.title(APP_TITLE);
    let mut session = Session::new(GeminiClient::try_new(config)?);
    let document = accept_upload(path, declared)?;
    let summary = session.analyze(&document)?;
    surface.report(&summary.summary);
    Ok(RunStatus::Completed)
}

/// Reads upload paths line by line until an empty line, `quit`, `exit`,
/// or end of input. A bad path is reported and the loop continues.
fn cmd_interactive<G: TextGenerator>(
    session: &mut Session<G>,
    input: &mut dyn BufRead,
    surface: &mut dyn Surface,
) -> Result<RunStatus> {
    surface.status(UPLOAD_INSTRUCTIONS);

    let mut line = String::new();
    let mut uploads = 0_usize;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();
        if entry.is_empty() || entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            break;
        }

        uploads += 1;
        match cmd_analyze(session, Path::new(entry), None, surface) {
            RunStatus::Completed => info!(path = entry, "Upload reported"),
            RunStatus::Halted => info!(path = entry, "Upload halted"),
        }
    }

    debug!(uploads, "Interactive session ended");
    Ok(RunStatus::Completed)
}

/// Checks an upload path and reads it into an [`UploadedDocument`].
///
/// The extension must be one of [`ACCEPTED_EXTENSIONS`]. The content type
/// is taken from `declared` when given, otherwise guessed from the path.
///
/// # Errors
///
/// Returns [`CommandError::UnsupportedFileType`] for other extensions,
/// [`CommandError::InvalidArgument`] for a blank declared type, or an I/O
/// error if the file cannot be read.
pub fn accept_upload(path: &Path, declared: Option<&str>) -> Result<UploadedDocument> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        });
    if !accepted {
        return Err(CommandError::UnsupportedFileType {
            path: path.display().to_string(),
            accepted: ACCEPTED_EXTENSIONS.join(", "),
        }
        .into());
    }

    let content_type = match declared {
        Some(mime) if mime.trim().is_empty() => {
            return Err(CommandError::InvalidArgument("content type is empty".to_string()).into());
        }
        Some(mime) => ContentType::from_mime(Some(mime)),
        None => ContentType::guess_from_path(path),
    };
    let bytes = read_upload(path)?;

    let mut document = UploadedDocument::new(bytes, content_type);
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        document = document.with_name(name);
    }
    Ok(document)
}

/// Maps an upload outcome to a run status.
#[must_use]
pub fn status_of(outcome: &UploadOutcome) -> RunStatus {
    if outcome.is_reported() {
        RunStatus::Completed
    } else {
        RunStatus::Halted
    }
}
