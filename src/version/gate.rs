//! Orchestration tool version gate.
//!
//! Best-effort: every problem found here is reported as a warning and the
//! run carries on.

use crate::inspect::VersionTool;
use crate::ui::Reporter;

use super::parse::{parse_role_version, Role};
use super::ExpectedVersion;

/// How a version check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOutcome {
    /// The tool was missing or produced no output.
    Skipped,
    /// Both roles were inspected; `matched` is true when neither warned.
    Checked { matched: bool },
}

/// Compare the version reported for `role` against the baseline.
///
/// Returns the warning to emit, or `None` when the versions are equal. The
/// comparison is textual: `"01"` and `"1"` differ.
pub fn check_version(role: Role, output: &str, expected: &ExpectedVersion) -> Option<String> {
    let Some(found) = parse_role_version(role, output) else {
        return Some(format!(
            "Couldn't find {} version from kubectl output '{}'",
            role, output
        ));
    };

    if found.major != expected.major || found.minor != expected.minor {
        return Some(format!("Unexpected {} version {}", role, found));
    }

    None
}

/// Checks the orchestration tool's client and server versions.
#[derive(Debug)]
pub struct VersionGate<T> {
    tool: T,
}

impl<T: VersionTool> VersionGate<T> {
    /// Create a gate querying `tool`.
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// Verify client and server versions against `expected`, reporting any
    /// discrepancy as a warning.
    pub fn verify(&self, expected: &ExpectedVersion, reporter: &mut dyn Reporter) -> VersionOutcome {
        // The tool might not be on the user's path.
        let Some(executable) = self.tool.locate() else {
            reporter.warn("Kubernetes version check skipped");
            return VersionOutcome::Skipped;
        };

        let output = self.tool.query_version(&executable);
        if let Some(error) = &output.error {
            reporter.warn(&format!(
                "Kubernetes version check skipped with error {}",
                error
            ));
            if output.stdout.is_empty() {
                return VersionOutcome::Skipped;
            }
        }

        let mut matched = true;
        for role in Role::ALL {
            if let Some(msg) = check_version(role, &output.stdout, expected) {
                reporter.warn(&msg);
                matched = false;
            }
        }

        VersionOutcome::Checked { matched }
    }
}
