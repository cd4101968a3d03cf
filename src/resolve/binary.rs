//! Running-binary resolution.
//!
//! Each component lists candidate executables in order of preference. A
//! candidate is verified by asking the process table for processes named
//! after the candidate's first word, then checking that some command line
//! starts with the whole candidate, optionally preceded by a directory.
//! `/usr/bin/kubelet` is a match for `kubelet`, but `apiserver` is not a
//! match for `kube-apiserver`.

use regex::Regex;

use crate::config::Component;
use crate::error::{AuditError, Result};
use crate::inspect::ProcessInspector;

use super::map::ResolvedMap;

/// Resolves which candidate binary is running for each component.
#[derive(Debug)]
pub struct BinaryResolver<P> {
    inspector: P,
}

impl<P: ProcessInspector> BinaryResolver<P> {
    /// Create a resolver querying processes through `inspector`.
    pub fn new(inspector: P) -> Self {
        Self { inspector }
    }

    /// Resolve every component that declares at least one binary candidate.
    ///
    /// Unresolved optional components default to their own name.
    ///
    /// # Errors
    ///
    /// Returns `ExecutableNotRunning` for the first required component none
    /// of whose candidates is running.
    pub fn resolve_all(&self, components: &[Component]) -> Result<ResolvedMap> {
        let mut binaries = ResolvedMap::new();

        for component in components.iter().filter(|c| !c.bins.is_empty()) {
            let bin = match self.find_executable(&component.bins) {
                Some(bin) => {
                    tracing::debug!(
                        "Component {} uses running binary {}",
                        component.name,
                        bin
                    );
                    bin
                }
                None if component.optional => {
                    tracing::debug!("Component {} not running", component.name);
                    component.name.clone()
                }
                None => {
                    return Err(AuditError::ExecutableNotRunning {
                        component: component.name.clone(),
                    })
                }
            };
            binaries.insert(&component.name, bin);
        }

        Ok(binaries)
    }

    /// Return the first running candidate, quotes stripped.
    pub fn find_executable(&self, candidates: &[String]) -> Option<String> {
        for candidate in candidates {
            if self.verify_bin(candidate) {
                return Some(strip_quotes(candidate).to_string());
            }
            tracing::debug!("executable '{}' not running", candidate);
        }
        None
    }

    /// Check whether `candidate` is running.
    pub fn verify_bin(&self, candidate: &str) -> bool {
        let bin = strip_quotes(candidate);

        // A candidate may be several words; ps only knows the first one.
        let Some(program) = bin.split_whitespace().next() else {
            return false;
        };

        let Some(pattern) = process_pattern(bin) else {
            return false;
        };

        self.inspector
            .query_running(program)
            .lines()
            .any(|line| pattern.is_match(line))
    }
}

/// Strip any surrounding single or double quotes.
pub fn strip_quotes(candidate: &str) -> &str {
    candidate.trim_matches(|c| c == '\'' || c == '"')
}

/// Pattern matching a command line that runs `bin`.
///
/// Anchored at line start, allows a leading directory, requires the exact
/// candidate text followed by whitespace or end of line. This is stricter
/// than a bare prefix match: `kubelet` does not match
/// `/usr/bin/kubelet-wrapper`.
pub fn process_pattern(bin: &str) -> Option<Regex> {
    let pattern = format!(r"^(\S*/)*{}(\s|$)", regex::escape(bin));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!("invalid process pattern for '{}': {}", bin, e);
            None
        }
    }
}
