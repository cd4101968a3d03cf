//! Substitute command implementation.
//!
//! The `hostaudit substitute` command resolves the catalog and prints each
//! template with its `$<component>bin` and `$<component>conf` placeholders
//! filled in, exactly as the check engine would run it.

use std::path::{Path, PathBuf};

use crate::cli::args::SubstituteArgs;
use crate::config::load_catalog;
use crate::error::Result;
use crate::inspect::{HostFilesystem, PsInspector};
use crate::resolve::RuntimeMaps;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The substitute command implementation.
pub struct SubstituteCommand {
    catalog_path: PathBuf,
    args: SubstituteArgs,
}

impl SubstituteCommand {
    /// Create a new substitute command.
    pub fn new(catalog_path: &Path, args: SubstituteArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }
}

impl Command for SubstituteCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let catalog = load_catalog(&self.catalog_path)?;
        let maps = RuntimeMaps::resolve(&catalog, PsInspector::new(), HostFilesystem, reporter)?;

        for template in &self.args.templates {
            println!("{}", maps.materialize(template));
        }

        Ok(CommandResult::success())
    }
}
