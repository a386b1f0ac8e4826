//! Where the editor sends its outcome messages.
//!
//! Reports are advisory. Nothing in the editor depends on whether a report
//! was delivered.

use vw_core::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Emptiness errors are warnings, everything else is an error.
    pub fn of(err: &GraphError) -> Self {
        match err {
            GraphError::NoVertices | GraphError::NoEdges => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn failure(&mut self, context: &str, err: &GraphError) {
        self.report(Severity::of(err), &format!("{context}: {err}"));
    }
}

/// Forwards reports to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    entries: Vec<(Severity, String)>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Severity, String)] {
        &self.entries
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|(s, _)| *s == severity).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        self.entries.push((severity, message.to_owned()));
    }
}
