//! Structure synchronization command.

use serde::Serialize;

use crate::context::Context;
use crate::engine::sync::{self, SyncOutcome};
use crate::error::Result;
use crate::output::{Displayable, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct ActionRow {
    action: &'static str,
    language: String,
    namespace: String,
    detail: String,
}

impl Displayable for ActionRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.action.to_string(),
            self.language.clone(),
            self.namespace.clone(),
            self.detail.clone(),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ACTION", "LANGUAGE", "NAMESPACE", "DETAIL"]
    }
}

fn action_rows(outcome: &SyncOutcome) -> Vec<ActionRow> {
    let mut rows = Vec::new();
    for created in &outcome.created_files {
        rows.push(ActionRow {
            action: "created",
            language: created.language.clone(),
            namespace: created.namespace.clone(),
            detail: String::new(),
        });
    }
    for removed in &outcome.removed_namespaces {
        rows.push(ActionRow {
            action: "removed",
            language: removed.language.clone(),
            namespace: removed.namespace.clone(),
            detail: String::new(),
        });
    }
    for cleaned in &outcome.cleaned_keys {
        rows.push(ActionRow {
            action: "cleaned",
            language: cleaned.language.clone(),
            namespace: cleaned.namespace.clone(),
            detail: cleaned.key.clone(),
        });
    }
    for skipped in &outcome.skipped_files {
        rows.push(ActionRow {
            action: "skipped",
            language: skipped.language.clone(),
            namespace: skipped.namespace.clone(),
            detail: "root is not a JSON object".to_string(),
        });
    }
    rows
}

/// Reconcile every target language against the source language.
pub async fn run(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;
    let outcome = sync::sync(
        &config.translations_path,
        &config.languages,
        &config.source_language,
    )?;

    if ctx.output.format() == OutputFormat::Table {
        if outcome.is_clean() {
            ctx.output.success("Everything is in sync.");
        } else {
            ctx.output.table(&action_rows(&outcome))?;
            ctx.output.info("");
            ctx.output.success(&format!(
                "Sync complete: {} created, {} removed, {} keys cleaned, {} skipped.",
                outcome.created_files.len(),
                outcome.removed_namespaces.len(),
                outcome.cleaned_keys.len(),
                outcome.skipped_files.len(),
            ));
        }
    } else {
        ctx.output.value(&outcome)?;
    }

    Ok(())
}
