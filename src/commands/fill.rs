//! Auto-fill command.

use crate::context::Context;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::translate::autofill::{self, FillOptions};
use crate::translate::{Provider, TranslationProvider};

/// Fill missing and empty translations through a provider.
#[allow(clippy::too_many_arguments)]
pub async fn run(
    ctx: &Context,
    language: Option<&str>,
    provider_name: Option<&str>,
    api_key: Option<&str>,
    limit: Option<usize>,
    concurrency: usize,
    dry_run: bool,
) -> Result<()> {
    let config = ctx.config()?;

    let provider = Provider::resolve(provider_name.unwrap_or(&config.provider))?;
    if api_key.is_some() {
        tracing::debug!(
            provider = provider.name(),
            "built-in provider does not use an API key"
        );
    }

    if dry_run {
        ctx.output.info("Dry run: no files will be written.");
    }

    let options = FillOptions {
        language: language.map(ToString::to_string),
        limit,
        concurrency,
        dry_run,
    };

    let outcome = autofill::auto_fill(
        &provider,
        &config.translations_path,
        &config.languages,
        &config.source_language,
        &options,
    )
    .await?;

    if ctx.output.format() == OutputFormat::Table {
        if outcome.total_processed == 0 {
            ctx.output.success("Nothing to fill.");
        } else {
            ctx.output.success(&format!(
                "Translated {}/{} entries via '{}'{}{}.",
                outcome.total_translated,
                outcome.total_processed,
                provider.name(),
                if outcome.failed > 0 {
                    format!(" ({} failed)", outcome.failed)
                } else {
                    String::new()
                },
                if dry_run { " [dry run]" } else { "" },
            ));
        }
    } else {
        ctx.output.value(&outcome)?;
    }

    Ok(())
}
