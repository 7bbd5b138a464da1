//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// locsync - keep localization resource files in sync
#[derive(Parser, Debug)]
#[command(name = "locsync")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./.locsync.yaml)
    #[arg(long, global = true, env = "LOCSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_parser = ["table", "json", "yaml", "jsonl"])]
    pub output: String,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Reconcile every target language against the source language
    Sync,

    /// Sync, then report missing, empty, and orphaned translations
    #[command(alias = "check")]
    Validate,

    /// Report keys whose source value duplicates the common namespace
    Duplicates {
        /// Namespace holding shared values (defaults to the configured one)
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Fill missing and empty translations through a provider
    Fill {
        /// Target language (defaults to every configured target)
        #[arg(short, long)]
        language: Option<String>,

        /// Translation provider (defaults to the configured one)
        #[arg(long)]
        provider: Option<String>,

        /// Provider API key
        #[arg(long, env = "LOCSYNC_API_KEY")]
        api_key: Option<String>,

        /// Maximum number of entries to process
        #[arg(long)]
        limit: Option<usize>,

        /// Concurrent translation requests
        #[arg(long, default_value_t = 5)]
        concurrency: usize,

        /// Translate but do not write files
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the source language's flattened key set
    Keys {
        /// Restrict to one namespace
        #[arg(long)]
        namespace: Option<String>,

        /// Include base keys implied by plural suffixes
        #[arg(long)]
        bases: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}
