//! Validation report command.

use serde::Serialize;

use crate::context::Context;
use crate::engine::validate::{self, KeyRef, ValidationReport};
use crate::error::{Error, Result};
use crate::output::{Displayable, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct FindingRow {
    status: &'static str,
    language: String,
    namespace: String,
    key: String,
}

impl Displayable for FindingRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.status.to_string(),
            self.language.clone(),
            self.namespace.clone(),
            self.key.clone(),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["STATUS", "LANGUAGE", "NAMESPACE", "KEY"]
    }
}

fn finding_rows(report: &ValidationReport) -> Vec<FindingRow> {
    let mut rows = Vec::with_capacity(report.finding_count());
    let mut push = |status: &'static str, refs: &[KeyRef]| {
        for r in refs {
            rows.push(FindingRow {
                status,
                language: r.language.clone(),
                namespace: r.namespace.clone(),
                key: r.key.clone(),
            });
        }
    };
    push("missing", &report.missing);
    push("empty", &report.empty);
    push("orphaned", &report.orphaned);
    rows
}

/// Sync, then report missing, empty, and orphaned translations.
///
/// Exits non-zero when the tree is not fully translated.
pub async fn run(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;
    let report = validate::validate(
        &config.translations_path,
        &config.languages,
        &config.source_language,
    )?;

    if ctx.output.format() == OutputFormat::Table {
        if !report.sync.is_clean() {
            ctx.output.info(&format!(
                "Sync: {} created, {} removed, {} keys cleaned, {} skipped.",
                report.sync.created_files.len(),
                report.sync.removed_namespaces.len(),
                report.sync.cleaned_keys.len(),
                report.sync.skipped_files.len(),
            ));
        }
        if report.valid {
            ctx.output.success("All translations are present and filled.");
        } else {
            ctx.output.table(&finding_rows(&report))?;
        }
    } else {
        ctx.output.value(&report)?;
    }

    if report.valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            missing: report.missing.len(),
            empty: report.empty.len(),
            orphaned: report.orphaned.len(),
        })
    }
}
