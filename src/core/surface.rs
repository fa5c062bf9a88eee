//! The display layer an upload's flow renders to.

/// User-visible output for one session.
///
/// Implementations decide how each kind of message looks; the session only
/// decides what is shown and in which order. Methods are infallible so a
/// display problem never changes the flow; the terminal implementation
/// records write failures for the caller to inspect.
pub trait Surface {
    /// Application title, shown once per run.
    fn title(&mut self, title: &str);

    /// Progress or informational line.
    fn status(&mut self, message: &str);

    /// User-visible error notification.
    fn error(&mut self, message: &str);

    /// Transcript preview block.
    fn preview(&mut self, preview: &str);

    /// Final report body, shown exactly as given.
    fn report(&mut self, summary: &str);
}

/// A [`Surface`] that records everything it is shown.
///
/// Useful for embedding the analyzer and for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    /// Titles shown.
    pub titles: Vec<String>,
    /// Status lines shown.
    pub statuses: Vec<String>,
    /// Error notifications shown.
    pub errors: Vec<String>,
    /// Previews shown.
    pub previews: Vec<String>,
    /// Reports shown.
    pub reports: Vec<String>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn preview(&mut self, preview: &str) {
        self.previews.push(preview.to_string());
    }

    fn report(&mut self, summary: &str) {
        self.reports.push(summary.to_string());
    }
}
