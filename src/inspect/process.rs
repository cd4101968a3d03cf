//! Process-table queries.

use std::process::Command;

/// Capability to list the command lines of running processes.
///
/// Closures of type `Fn(&str) -> String` implement this trait, which keeps
/// fakes in tests down to a single line.
pub trait ProcessInspector {
    /// Return the raw command lines of processes named exactly `program`,
    /// one per line. An empty string means nothing is running.
    fn query_running(&self, program: &str) -> String;
}

impl<F> ProcessInspector for F
where
    F: Fn(&str) -> String,
{
    fn query_running(&self, program: &str) -> String {
        self(program)
    }
}

/// Queries the host process table with `ps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsInspector;

impl PsInspector {
    /// Create a new inspector.
    pub fn new() -> Self {
        Self
    }

    /// Arguments passed to `ps` for a given program name.
    pub fn args(program: &str) -> [&str; 5] {
        ["-C", program, "-o", "cmd", "--no-headers"]
    }
}

impl ProcessInspector for PsInspector {
    fn query_running(&self, program: &str) -> String {
        let args = Self::args(program);
        match Command::new("ps").args(args).output() {
            Ok(output) => {
                // ps exits non-zero when nothing matched; that is just "not running".
                if !output.status.success() {
                    tracing::debug!("ps {:?}: {}", args, output.status);
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(e) => {
                tracing::debug!("ps {:?}: {}", args, e);
                String::new()
            }
        }
    }
}
