//! Orchestration tool lookup and invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the version-reporting executable.
pub const KUBECTL: &str = "kubectl";

/// Captured output of a version tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Standard output, possibly partial when the run failed.
    pub stdout: String,

    /// Why the run failed, if it did.
    pub error: Option<String>,
}

impl ToolOutput {
    /// Output of a successful run.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            error: None,
        }
    }

    /// Output of a failed run.
    pub fn failure(stdout: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            error: Some(error.into()),
        }
    }
}

/// Capability to locate and run the version-reporting tool.
pub trait VersionTool {
    /// Find the executable, or `None` if it is not installed.
    fn locate(&self) -> Option<PathBuf>;

    /// Run the tool's `version` subcommand.
    fn query_version(&self, executable: &Path) -> ToolOutput;
}

/// `kubectl` found on the search path.
#[derive(Debug, Clone)]
pub struct Kubectl {
    path_entries: Vec<PathBuf>,
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::new()
    }
}

impl Kubectl {
    /// Search the system `PATH`.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Search the given directories instead of `PATH`.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl VersionTool for Kubectl {
    fn locate(&self) -> Option<PathBuf> {
        resolve_tool_path(KUBECTL, &self.path_entries)
    }

    fn query_version(&self, executable: &Path) -> ToolOutput {
        match Command::new(executable).arg("version").output() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                tracing::trace!("{} version output: {}", executable.display(), stdout);
                if output.status.success() {
                    ToolOutput::success(stdout)
                } else {
                    ToolOutput::failure(stdout, output.status.to_string())
                }
            }
            Err(e) => ToolOutput::failure(String::new(), e.to_string()),
        }
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
