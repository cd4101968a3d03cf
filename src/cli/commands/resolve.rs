//! Resolve command implementation.
//!
//! The `hostaudit resolve` command shows which binary and config file each
//! catalog component resolved to on this host.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::{load_catalog, Catalog};
use crate::error::{AuditError, Result};
use crate::inspect::{HostFilesystem, PsInspector};
use crate::resolve::RuntimeMaps;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    catalog_path: PathBuf,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(catalog_path: &Path, args: ResolveArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let catalog = load_catalog(&self.catalog_path)?;
        let maps = RuntimeMaps::resolve(&catalog, PsInspector::new(), HostFilesystem, reporter)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&maps)
                .map_err(|e| AuditError::Other(anyhow::Error::new(e)))?;
            println!("{}", json);
        } else {
            print!("{}", render_listing(&catalog, &maps));
        }

        Ok(CommandResult::success())
    }
}

/// Render a column-aligned `component / binary / config` listing in
/// catalog order.
pub fn render_listing(catalog: &Catalog, maps: &RuntimeMaps) -> String {
    const HEADER: [&str; 3] = ["COMPONENT", "BINARY", "CONFIG"];

    let rows: Vec<[&str; 3]> = catalog
        .components
        .iter()
        .map(|c| {
            [
                c.name.as_str(),
                maps.binaries.get(&c.name).unwrap_or("-"),
                maps.configs.get(&c.name).unwrap_or("-"),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&HEADER).chain(&rows) {
        let line = format!(
            "{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1]
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
