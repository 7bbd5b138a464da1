//! Fill missing and empty translations through a provider.
//!
//! The orchestrator consumes the validator's backlog, fans each namespace's
//! batch out through a bounded worker pool, and writes each namespace file
//! exactly once per run: translation results are merged into a fresh read
//! of the on-disk map, so no two writers ever touch the same file.

use std::collections::BTreeMap;
use std::path::Path;

use futures::{StreamExt, stream};
use serde::Serialize;

use crate::engine::store;
use crate::engine::tree::FlatMap;
use crate::engine::validate;
use crate::error::{Error, Result};
use crate::translate::TranslationProvider;

/// Default width of the translation worker pool.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Options controlling one auto-fill run.
#[derive(Debug, Clone, Default)]
pub struct FillOptions {
    /// Restrict the run to one target language.
    pub language: Option<String>,
    /// Global cap on entries processed across all languages.
    pub limit: Option<usize>,
    /// Worker pool width; zero means [`DEFAULT_CONCURRENCY`].
    pub concurrency: usize,
    /// Translate but do not write files.
    pub dry_run: bool,
}

/// Counters for one auto-fill run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FillOutcome {
    /// Entries handed to the provider.
    pub total_processed: usize,
    /// Entries translated successfully.
    pub total_translated: usize,
    /// Entries skipped after a provider failure.
    pub failed: usize,
}

/// Translate the validator's missing and empty entries and write them back.
///
/// Per-item provider failures are logged and skipped; the batch continues.
/// The global limit is a cooperative stopping point between languages, not
/// a mid-flight cancellation.
pub async fn auto_fill<P: TranslationProvider>(
    provider: &P,
    root: &Path,
    languages: &[String],
    source_language: &str,
    options: &FillOptions,
) -> Result<FillOutcome> {
    let targets: Vec<&str> = match &options.language {
        Some(language) => {
            if language == source_language {
                return Err(Error::invalid_arg(format!(
                    "'{language}' is the source language"
                )));
            }
            if !languages.contains(language) {
                return Err(Error::invalid_arg(format!(
                    "'{language}' is not a configured language"
                )));
            }
            vec![language.as_str()]
        }
        None => languages
            .iter()
            .filter(|l| *l != source_language)
            .map(String::as_str)
            .collect(),
    };

    let report = validate::validate(root, languages, source_language)?;
    let source = store::read_language(root, source_language)?;

    let concurrency = if options.concurrency == 0 {
        DEFAULT_CONCURRENCY
    } else {
        options.concurrency
    };

    let mut outcome = FillOutcome::default();

    for language in targets {
        let mut pending: Vec<_> = report
            .missing
            .iter()
            .chain(report.empty.iter())
            .filter(|entry| entry.language == language)
            .collect();

        if let Some(limit) = options.limit {
            let remaining = limit.saturating_sub(outcome.total_processed);
            if remaining == 0 {
                tracing::info!(language, "item limit reached; stopping");
                break;
            }
            pending.truncate(remaining);
        }

        // Group per namespace so each file is written exactly once.
        let mut batches: BTreeMap<&str, Vec<(String, String)>> = BTreeMap::new();
        for entry in pending {
            let Some(text) = source
                .get(&entry.namespace)
                .and_then(|flat| flat.get(&entry.key))
            else {
                continue;
            };
            if text.trim().is_empty() {
                tracing::debug!(
                    language,
                    namespace = %entry.namespace,
                    key = %entry.key,
                    "source text is blank; nothing to translate"
                );
                continue;
            }
            batches
                .entry(entry.namespace.as_str())
                .or_default()
                .push((entry.key.clone(), text.clone()));
        }

        for (namespace, entries) in batches {
            outcome.total_processed += entries.len();

            let results: Vec<(String, Result<String>)> = stream::iter(entries)
                .map(|(key, text)| async move {
                    let translated = provider
                        .translate(&text, source_language, language)
                        .await;
                    (key, translated)
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

            let mut updates = FlatMap::new();
            for (key, result) in results {
                match result {
                    Ok(value) => {
                        updates.insert(key, value);
                    }
                    Err(e) => {
                        outcome.failed += 1;
                        tracing::warn!(
                            language,
                            namespace,
                            key,
                            error = %e,
                            "translation failed; skipping"
                        );
                    }
                }
            }
            outcome.total_translated += updates.len();

            if updates.is_empty() || options.dry_run {
                continue;
            }

            let mut merged = store::read_namespace(root, language, namespace)?.unwrap_or_default();
            merged.extend(updates);
            store::write_namespace(root, language, namespace, &merged)?;
        }
    }

    Ok(outcome)
}
