//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// hostaudit - Resolve the audited components running on this host.
#[derive(Debug, Parser)]
#[command(name = "hostaudit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the component catalog (defaults to cfg/config.yaml)
    #[arg(short, long, global = true, env = "HOSTAUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log each resolution decision
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging, including raw tool output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve running binaries and config files (default if no command specified)
    Resolve(ResolveArgs),

    /// Check the kubectl client and server versions against a baseline
    Version(VersionArgs),

    /// Substitute resolved values into check command templates
    Substitute(SubstituteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Expected <major>.<minor> (overrides the catalog's `version` section)
    #[arg(short, long)]
    pub expected: Option<String>,
}

/// Arguments for the `substitute` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SubstituteArgs {
    /// Templates using $<component>bin and $<component>conf placeholders
    #[arg(required = true)]
    pub templates: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
