//! Filesystem existence checks.

use std::fs;
use std::io;
use std::path::Path;

/// Capability to check whether a path exists.
///
/// An `Err` of kind [`io::ErrorKind::NotFound`] means "does not exist"; any
/// other error is a real failure to inspect the path.
pub trait PathProbe {
    /// Inspect `path`.
    fn probe(&self, path: &Path) -> io::Result<()>;
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> io::Result<()>,
{
    fn probe(&self, path: &Path) -> io::Result<()> {
        self(path)
    }
}

/// Probes the real filesystem with a metadata lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl PathProbe for HostFilesystem {
    fn probe(&self, path: &Path) -> io::Result<()> {
        fs::metadata(path).map(|_| ())
    }
}
