//! Version command implementation.
//!
//! The `hostaudit version` command compares the kubectl client and server
//! versions with the expected baseline. Mismatches are warnings only.

use std::path::{Path, PathBuf};

use crate::cli::args::VersionArgs;
use crate::config::load_catalog;
use crate::error::{AuditError, Result};
use crate::inspect::Kubectl;
use crate::ui::Reporter;
use crate::version::{ExpectedVersion, VersionGate};

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    catalog_path: PathBuf,
    args: VersionArgs,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(catalog_path: &Path, args: VersionArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }

    /// Baseline from `--expected`, else from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` for a malformed `--expected`, catalog errors
    /// when the catalog is needed and can't be loaded, and `CatalogInvalid`
    /// when neither source names a baseline.
    pub fn expected_version(&self) -> Result<ExpectedVersion> {
        if let Some(expected) = &self.args.expected {
            return expected.parse();
        }

        load_catalog(&self.catalog_path)?
            .version
            .ok_or_else(|| AuditError::CatalogInvalid {
                message: format!(
                    "no expected version in {}; pass --expected <major>.<minor>",
                    self.catalog_path.display()
                ),
            })
    }
}

impl Command for VersionCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let expected = self.expected_version()?;
        let outcome = VersionGate::new(Kubectl::new()).verify(&expected, reporter);
        tracing::debug!("Version check against {}: {:?}", expected, outcome);
        Ok(CommandResult::success())
    }
}
