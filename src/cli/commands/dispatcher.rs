//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Sink for recoverable diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code. Fatal
    /// conditions are returned as errors for the caller to turn into an exit.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    catalog_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading the catalog at `catalog_path`.
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    /// Get the catalog path.
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(&self.catalog_path, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Version(args)) => {
                let cmd = super::version::VersionCommand::new(&self.catalog_path, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Substitute(args)) => {
                let cmd =
                    super::substitute::SubstituteCommand::new(&self.catalog_path, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(reporter)
            }
            None => {
                let cmd =
                    super::resolve::ResolveCommand::new(&self.catalog_path, ResolveArgs::default());
                cmd.execute(reporter)
            }
        }
    }
}
