//! Parsing `kubectl version` output.
//!
//! Extraction is two steps: find the `<Role> Version: version.Info{...}`
//! segment, then pull the quoted `Major` and `Minor` fields out of it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// --- Compiled regexes (one-time via LazyLock) ---

static CLIENT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Client Version: version\.Info\{(.*)\}").expect("CLIENT_SEGMENT must compile")
});

static SERVER_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Server Version: version\.Info\{(.*)\}").expect("SERVER_SEGMENT must compile")
});

static MAJOR_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Major:"([0-9]+)""#).expect("MAJOR_FIELD must compile"));

static MINOR_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Minor:"([0-9]+)""#).expect("MINOR_FIELD must compile"));

/// Which side of `kubectl version` output a version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    /// Both roles, in reporting order.
    pub const ALL: [Role; 2] = [Role::Client, Role::Server];

    fn segment_regex(self) -> &'static Regex {
        match self {
            Role::Client => &*CLIENT_SEGMENT,
            Role::Server => &*SERVER_SEGMENT,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "Client"),
            Role::Server => write!(f, "Server"),
        }
    }
}

/// Major and minor version as reported, kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Find the `version.Info{...}` segment reported for `role`.
pub fn role_segment(role: Role, output: &str) -> Option<&str> {
    role.segment_regex().find(output).map(|m| m.as_str())
}

/// Pull the `Major` and `Minor` fields out of a segment.
///
/// Returns `None` unless both are present.
pub fn extract_version(segment: &str) -> Option<VersionInfo> {
    Some(VersionInfo {
        major: capture(&MAJOR_FIELD, segment)?,
        minor: capture(&MINOR_FIELD, segment)?,
    })
}

/// Version reported for `role`, if it can be found.
pub fn parse_role_version(role: Role, output: &str) -> Option<VersionInfo> {
    role_segment(role, output).and_then(extract_version)
}

fn capture(re: &Regex, s: &str) -> Option<String> {
    re.captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
