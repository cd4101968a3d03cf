//! hostaudit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hostaudit::cli::{Cli, CommandDispatcher};
use hostaudit::config::catalog_path;
use hostaudit::ui::{Reporter, Severity, SeverityStyles, StderrReporter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to TRACE
/// 2. `--verbose` flag sets level to DEBUG
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is INFO
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("hostaudit=trace")
    } else if verbose {
        EnvFilter::new("hostaudit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hostaudit=info"))
    };

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    tracing::debug!("hostaudit starting with args: {:?}", cli);

    let mut reporter = StderrReporter::new(SeverityStyles::detect(cli.no_color));
    let dispatcher = CommandDispatcher::new(catalog_path(cli.config.as_deref()));

    match dispatcher.dispatch(&cli, &mut reporter) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            reporter.report(Severity::Fail, &e.to_string());
            ExitCode::from(1)
        }
    }
}
