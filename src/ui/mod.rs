//! Severity-tagged diagnostics.
//!
//! This module provides:
//! - [`Severity`] tags shared with the downstream check engine
//! - [`Reporter`] trait for emitting recoverable diagnostics
//! - [`StderrReporter`] for real runs and [`MockReporter`] for tests
//! - [`SeverityStyles`] mapping each severity to its terminal style
//!
//! # Example
//!
//! ```
//! use hostaudit::ui::{MockReporter, Reporter, Severity};
//!
//! let mut reporter = MockReporter::new();
//! reporter.warn("Kubernetes version check skipped");
//! assert_eq!(reporter.warnings(), ["Kubernetes version check skipped"]);
//! assert_eq!(reporter.count(Severity::Fail), 0);
//! ```

pub mod mock;
pub mod reporter;
pub mod theme;

pub use mock::MockReporter;
pub use reporter::StderrReporter;
pub use theme::{should_use_colors, SeverityStyles};

use std::fmt;

/// Result classes a check or diagnostic can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Pass,
    Fail,
    Warn,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Severity::Pass => "PASS",
            Severity::Fail => "FAIL",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
        };
        f.pad(tag)
    }
}

/// Sink for diagnostics raised while resolving the runtime.
///
/// Resolvers only ever report recoverable conditions here; fatal ones are
/// returned as errors.
pub trait Reporter {
    /// Emit a message tagged with a severity.
    fn report(&mut self, severity: Severity, msg: &str);

    /// Emit a warning.
    fn warn(&mut self, msg: &str) {
        self.report(Severity::Warn, msg);
    }

    /// Emit an informational message.
    fn info(&mut self, msg: &str) {
        self.report(Severity::Info, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_displays_tag() {
        assert_eq!(Severity::Pass.to_string(), "PASS");
        assert_eq!(Severity::Fail.to_string(), "FAIL");
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn default_methods_route_severity() {
        let mut reporter = MockReporter::new();
        reporter.warn("w");
        reporter.info("i");
        assert_eq!(
            reporter.entries(),
            [
                (Severity::Warn, "w".to_string()),
                (Severity::Info, "i".to_string())
            ]
        );
    }
}
