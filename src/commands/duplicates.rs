//! Duplicate value report command.

use serde::Serialize;

use crate::context::Context;
use crate::engine::duplicates;
use crate::error::Result;
use crate::output::{Displayable, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct DuplicateRow {
    namespace: String,
    key: String,
    common_key: String,
    value: String,
}

impl Displayable for DuplicateRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.namespace.clone(),
            self.key.clone(),
            self.common_key.clone(),
            self.value.clone(),
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["NAMESPACE", "KEY", "COMMON KEY", "VALUE"]
    }
}

/// Report keys whose source value duplicates the common namespace.
pub async fn run(ctx: &Context, namespace: Option<&str>) -> Result<()> {
    let config = ctx.config()?;
    let common_namespace = namespace.unwrap_or(&config.common_namespace);

    let report = duplicates::find_duplicates(
        &config.translations_path,
        &config.source_language,
        common_namespace,
    )?;

    if ctx.output.format() == OutputFormat::Table {
        if report.total_keys_checked == 0 {
            ctx.output.warn(&format!(
                "Namespace '{common_namespace}' is empty or absent; nothing to check."
            ));
        } else if report.duplicates.is_empty() {
            ctx.output.success(&format!(
                "No duplicates across {} keys.",
                report.total_keys_checked
            ));
        } else {
            let rows: Vec<DuplicateRow> = report
                .duplicates
                .iter()
                .map(|d| DuplicateRow {
                    namespace: d.namespace.clone(),
                    key: d.key.clone(),
                    common_key: d.common_key.clone(),
                    value: d.value.clone(),
                })
                .collect();
            ctx.output.table(&rows)?;
            ctx.output.info("");
            ctx.output.info(&format!(
                "{} duplicate(s) across {} keys; consider reusing the '{}' entries.",
                report.duplicates.len(),
                report.total_keys_checked,
                common_namespace,
            ));
        }
    } else {
        ctx.output.value(&report)?;
    }

    Ok(())
}
