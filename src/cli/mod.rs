//! Command-line interface for hostaudit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ResolveArgs, SubstituteArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
