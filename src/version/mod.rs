//! Orchestration tool version checking.
//!
//! - [`parse`] extracts per-role `{major, minor}` from `kubectl version`
//! - [`gate`] compares them with an [`ExpectedVersion`] baseline
//!
//! # Example
//!
//! ```
//! use hostaudit::version::{check_version, ExpectedVersion, Role};
//!
//! let expected: ExpectedVersion = "1.21".parse().unwrap();
//! let output = r#"Server Version: version.Info{Major:"1", Minor:"20"}"#;
//! let warning = check_version(Role::Server, output, &expected);
//! assert_eq!(warning.as_deref(), Some("Unexpected Server version 1.20"));
//! ```

pub mod gate;
pub mod parse;

pub use gate::{check_version, VersionGate, VersionOutcome};
pub use parse::{extract_version, parse_role_version, role_segment, Role, VersionInfo};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuditError;

/// Baseline `major.minor` the orchestration tool is expected to report.
///
/// Both parts are compared as text, never as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedVersion {
    pub major: String,
    pub minor: String,
}

impl ExpectedVersion {
    /// Create a baseline from its parts.
    pub fn new(major: &str, minor: &str) -> Self {
        Self {
            major: major.to_string(),
            minor: minor.to_string(),
        }
    }
}

impl FromStr for ExpectedVersion {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| AuditError::InvalidVersion {
            input: s.to_string(),
            message: message.to_string(),
        };

        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| invalid("expected <major>.<minor>"))?;

        let is_number = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_number(major) || !is_number(minor) {
            return Err(invalid("major and minor must be numeric"));
        }

        Ok(Self::new(major, minor))
    }
}

impl fmt::Display for ExpectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
