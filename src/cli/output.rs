//! Terminal rendering for the analysis flow.
//!
//! Formatting is done by pure `format_*` functions; [`TerminalSurface`]
//! writes their output to a pair of writers (normally stdout and stderr).

use crate::core::Surface;
use std::fmt::Write as FmtWrite;
use std::io::{self, Write};

/// Heading above the transcript preview.
pub const PREVIEW_HEADING: &str = "Original Transcript Preview";

/// Header of the rendered report.
pub const REPORT_HEADER: &str = "📄 Interview Analysis Report";

/// Subheader of the rendered report.
pub const REPORT_SUBHEADER: &str = "Comprehensive Insights";

/// Formats the application title with an underline.
#[must_use]
pub fn format_title(title: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{title}");
    let _ = writeln!(output, "{}", "=".repeat(title.chars().count()));
    output.push('\n');
    output
}

/// Formats the transcript preview block.
#[must_use]
pub fn format_preview(preview: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{PREVIEW_HEADING}");
    output.push_str("---\n");
    output.push_str(preview);
    if !preview.is_empty() && !preview.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("---\n\n");
    output
}

/// Formats the report with its header and subheader.
///
/// The summary text is written verbatim.
#[must_use]
pub fn format_report(summary: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "\n{REPORT_HEADER}");
    let _ = writeln!(output, "{}", "=".repeat(REPORT_HEADER.chars().count()));
    let _ = writeln!(output, "\n{REPORT_SUBHEADER}");
    let _ = writeln!(output, "{}\n", "-".repeat(REPORT_SUBHEADER.chars().count()));
    output.push_str(summary);
    if !summary.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// A [`Surface`] writing to terminal streams.
///
/// Title, preview, status, and report go to `out`; errors go to `err`.
/// The first write failure is kept and later writes are skipped, so the
/// caller can inspect it once the flow is done.
pub struct TerminalSurface<O: Write, E: Write> {
    out: O,
    err: E,
    failure: Option<io::Error>,
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    /// Creates a surface over the given writers.
    pub const fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            failure: None,
        }
    }

    /// Takes the first write error, if any occurred.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    /// Consumes the surface, returning the writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_out(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            self.failure = Some(e);
        }
    }

    fn write_err(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = self.err.write_all(text.as_bytes()) {
            self.failure = Some(e);
        }
    }
}

impl<O: Write, E: Write> Surface for TerminalSurface<O, E> {
    fn title(&mut self, title: &str) {
        self.write_out(&format_title(title));
    }

    fn status(&mut self, message: &str) {
        self.write_out(&format!("{message}\n"));
    }

    fn error(&mut self, message: &str) {
        self.write_err(&format!("{message}\n"));
    }

    fn preview(&mut self, preview: &str) {
        self.write_out(&format_preview(preview));
    }

    fn report(&mut self, summary: &str) {
        self.write_out(&format_report(summary));
    }
}
