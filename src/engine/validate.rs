//! Post-sync validation report.
//!
//! Validation always reconciles first, then re-reads the on-disk state and
//! classifies every (language, namespace, key) triple. Because sync has
//! already stripped orphans, the orphaned list is a cross-check that should
//! come back empty after a single pass, not an actionable backlog.

use std::path::Path;

use serde::Serialize;

use crate::engine::store;
use crate::engine::sync::{self, SyncOutcome};
use crate::error::Result;

/// One (language, namespace, key) finding.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRef {
    /// Target language.
    pub language: String,
    /// Namespace id.
    pub namespace: String,
    /// Dot-path key.
    pub key: String,
}

/// The three-way diff of targets against the source language.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True iff missing, empty, and orphaned are all empty.
    pub valid: bool,
    /// Keys absent from a target.
    pub missing: Vec<KeyRef>,
    /// Keys present with a blank (empty or whitespace-only) value.
    pub empty: Vec<KeyRef>,
    /// Target keys the source does not define.
    pub orphaned: Vec<KeyRef>,
    /// Actions the pre-validation sync pass took.
    pub sync: SyncOutcome,
}

impl ValidationReport {
    /// Total number of findings across all three lists.
    pub fn finding_count(&self) -> usize {
        self.missing.len() + self.empty.len() + self.orphaned.len()
    }
}

/// Sync, then classify every source key against every configured target.
///
/// The configured language list drives iteration, so a language with no
/// files on disk is still validated. Namespace files the sync pass skipped
/// are excluded from classification for that language.
pub fn validate(
    root: &Path,
    languages: &[String],
    source_language: &str,
) -> Result<ValidationReport> {
    let sync = sync::sync(root, languages, source_language)?;
    let source = store::read_language(root, source_language)?;

    let mut missing = Vec::new();
    let mut empty = Vec::new();
    let mut orphaned = Vec::new();

    for language in languages.iter().filter(|l| *l != source_language) {
        for (namespace, source_map) in &source {
            if sync.is_skipped(language, namespace) {
                continue;
            }

            let target_map = store::read_namespace(root, language, namespace)?.unwrap_or_default();

            for key in source_map.keys() {
                match target_map.get(key) {
                    None => missing.push(KeyRef {
                        language: language.clone(),
                        namespace: namespace.clone(),
                        key: key.clone(),
                    }),
                    Some(value) if value.trim().is_empty() => empty.push(KeyRef {
                        language: language.clone(),
                        namespace: namespace.clone(),
                        key: key.clone(),
                    }),
                    Some(_) => {}
                }
            }

            for key in target_map.keys() {
                if !source_map.contains_key(key) {
                    orphaned.push(KeyRef {
                        language: language.clone(),
                        namespace: namespace.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
    }

    let valid = missing.is_empty() && empty.is_empty() && orphaned.is_empty();
    Ok(ValidationReport { valid, missing, empty, orphaned, sync })
}
