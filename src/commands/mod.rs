//! Command implementations for the locsync CLI.
//!
//! Each submodule implements one subcommand.

mod duplicates;
mod fill;
mod init;
mod keys;
mod sync;
mod validate;

use crate::cli::Commands;
use crate::context::Context;
use crate::error::Result;

/// Execute a CLI command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Init { force } => init::run(ctx, *force).await,
        Commands::Sync => sync::run(ctx).await,
        Commands::Validate => validate::run(ctx).await,
        Commands::Duplicates { namespace } => duplicates::run(ctx, namespace.as_deref()).await,
        Commands::Fill {
            language,
            provider,
            api_key,
            limit,
            concurrency,
            dry_run,
        } => {
            fill::run(
                ctx,
                language.as_deref(),
                provider.as_deref(),
                api_key.as_deref(),
                *limit,
                *concurrency,
                *dry_run,
            )
            .await
        }
        Commands::Keys { namespace, bases } => keys::run(ctx, namespace.as_deref(), *bases).await,
        Commands::Completion { shell } => completion(ctx, shell).await,
    }
}

async fn completion(_ctx: &Context, shell: &crate::cli::Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    let mut cmd = crate::cli::Cli::command();

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        generate(generator, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
    }

    match shell {
        crate::cli::Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        crate::cli::Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        crate::cli::Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        crate::cli::Shell::PowerShell => {
            print_completions(clap_complete::shells::PowerShell, &mut cmd);
        }
    }

    Ok(())
}
