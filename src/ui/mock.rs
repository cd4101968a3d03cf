//! Mock reporter implementation for testing.
//!
//! `MockReporter` implements the [`Reporter`] trait and captures every
//! diagnostic for later assertion.

use super::{Reporter, Severity};

/// Reporter that records diagnostics instead of printing them.
#[derive(Debug, Default)]
pub struct MockReporter {
    entries: Vec<(Severity, String)>,
}

impl MockReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics in emission order.
    pub fn entries(&self) -> &[(Severity, String)] {
        &self.entries
    }

    /// Messages recorded at WARN.
    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warn)
    }

    /// Messages recorded at a given severity.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Number of diagnostics recorded at a given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|(s, _)| *s == severity).count()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Reporter for MockReporter {
    fn report(&mut self, severity: Severity, msg: &str) {
        self.entries.push((severity, msg.to_string()));
    }
}
