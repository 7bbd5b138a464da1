//! locsync library
//!
//! This crate keeps localization resource files structurally in sync
//! across languages. One language directory is the source of truth; every
//! other configured language converges onto its namespace and key set.
//!
//! ## Usage
//!
//! The CLI is invoked as `locsync` with various subcommands:
//!
//! ```bash
//! locsync init          # Scaffold .locsync.yaml and the source language
//! locsync sync          # Converge target languages onto the source
//! locsync validate      # Report missing/empty/orphaned keys (CI-friendly)
//! locsync fill --dry-run --provider pseudo
//! ```
//!
//! Programmatic use goes through the [`engine`] and [`translate`] modules;
//! the command layer is thin glue over them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod output;
pub mod translate;

pub use cli::Cli;
pub use error::{Error, Result};

/// CLI version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            // Exit successfully for help/version, otherwise return error
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        }
    };

    // Initialize logging if debug mode
    if cli_args.debug {
        init_logging();
    }

    // Create context
    let ctx = context::Context::new(
        cli_args.config.clone(),
        &cli_args.output,
        &cli_args.color,
        cli_args.quiet,
        cli_args.debug,
    )?;

    // Execute command
    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locsync=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
