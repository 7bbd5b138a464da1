//! Structure synchronization between the source language and its targets.
//!
//! One pass converges every target language onto the source language's
//! namespace set: orphaned namespace files are removed, absent ones are
//! created with empty placeholders, and keys the source no longer defines
//! are stripped. The pass is idempotent: with no intervening changes, a
//! second run records no actions.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::engine::store;
use crate::engine::tree::FlatMap;
use crate::error::{Error, Result};

/// A namespace file created with empty placeholder values.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedFile {
    /// Target language.
    pub language: String,
    /// Namespace id.
    pub namespace: String,
}

/// A namespace file removed because the source no longer defines it.
#[derive(Debug, Clone, Serialize)]
pub struct RemovedNamespace {
    /// Target language.
    pub language: String,
    /// Namespace id.
    pub namespace: String,
}

/// A key dropped from a target because the source no longer defines it.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedKey {
    /// Target language.
    pub language: String,
    /// Namespace id.
    pub namespace: String,
    /// The orphaned key.
    pub key: String,
}

/// A target file left untouched because its JSON root is not an object.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// Target language.
    pub language: String,
    /// Namespace id.
    pub namespace: String,
}

/// Record of the actions one reconciliation pass took.
///
/// Returned per invocation, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncOutcome {
    /// Namespace files created with empty placeholders.
    pub created_files: Vec<CreatedFile>,
    /// Namespace files removed as orphans.
    pub removed_namespaces: Vec<RemovedNamespace>,
    /// Keys stripped from targets as orphans.
    pub cleaned_keys: Vec<CleanedKey>,
    /// Files left untouched because they could not be reconciled.
    pub skipped_files: Vec<SkippedFile>,
}

impl SyncOutcome {
    /// True when the pass changed nothing and skipped nothing.
    pub fn is_clean(&self) -> bool {
        self.created_files.is_empty()
            && self.removed_namespaces.is_empty()
            && self.cleaned_keys.is_empty()
            && self.skipped_files.is_empty()
    }

    /// Whether the given (language, namespace) file was skipped.
    pub fn is_skipped(&self, language: &str, namespace: &str) -> bool {
        self.skipped_files
            .iter()
            .any(|s| s.language == language && s.namespace == namespace)
    }
}

/// Reconcile every target language's namespace set against the source.
///
/// A missing or empty source-language directory yields a no-op outcome;
/// I/O errors propagate as fatal. Keys missing from an existing target are
/// backfilled with empty placeholders in memory, but the file is only
/// rewritten when an orphaned key was also dropped; a pure backfill is
/// left for the validator to report as missing.
pub fn sync(root: &Path, languages: &[String], source_language: &str) -> Result<SyncOutcome> {
    let mut outcome = SyncOutcome::default();

    let source = store::read_language(root, source_language)?;
    if source.is_empty() {
        tracing::warn!(
            language = source_language,
            root = %root.display(),
            "source language has no namespaces; nothing to sync"
        );
        return Ok(outcome);
    }

    for language in languages.iter().filter(|l| *l != source_language) {
        sync_language(root, language, &source, &mut outcome)?;
    }

    Ok(outcome)
}

fn sync_language(
    root: &Path,
    language: &str,
    source: &BTreeMap<String, FlatMap>,
    outcome: &mut SyncOutcome,
) -> Result<()> {
    fs::create_dir_all(root.join(language))?;

    // Namespaces the source no longer defines are removed outright.
    for namespace in store::list_namespaces(root, language)? {
        if !source.contains_key(&namespace) {
            fs::remove_file(store::namespace_path(root, language, &namespace))?;
            tracing::debug!(language, namespace, "removed orphaned namespace file");
            outcome.removed_namespaces.push(RemovedNamespace {
                language: language.to_string(),
                namespace,
            });
        }
    }

    for (namespace, source_map) in source {
        match store::read_namespace(root, language, namespace) {
            Ok(Some(target_map)) => {
                reconcile_namespace(root, language, namespace, source_map, &target_map, outcome)?;
            }
            Ok(None) => {
                let placeholders: FlatMap = source_map
                    .keys()
                    .map(|key| (key.clone(), String::new()))
                    .collect();
                store::write_namespace(root, language, namespace, &placeholders)?;
                tracing::debug!(language, namespace, "created namespace file");
                outcome.created_files.push(CreatedFile {
                    language: language.to_string(),
                    namespace: namespace.clone(),
                });
            }
            Err(Error::NotAnObject { path }) => {
                tracing::warn!(
                    language,
                    namespace,
                    path = %path.display(),
                    "root is not a JSON object; leaving file untouched"
                );
                outcome.skipped_files.push(SkippedFile {
                    language: language.to_string(),
                    namespace: namespace.clone(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn reconcile_namespace(
    root: &Path,
    language: &str,
    namespace: &str,
    source_map: &FlatMap,
    target_map: &FlatMap,
    outcome: &mut SyncOutcome,
) -> Result<()> {
    let mut reconciled = FlatMap::new();
    let mut cleaned = Vec::new();

    for (key, value) in target_map {
        if source_map.contains_key(key) {
            reconciled.insert(key.clone(), value.clone());
        } else {
            cleaned.push(key.clone());
        }
    }

    // Silent backfill: persisted only when an orphan forced a rewrite.
    for key in source_map.keys() {
        reconciled.entry(key.clone()).or_default();
    }

    if !cleaned.is_empty() {
        store::write_namespace(root, language, namespace, &reconciled)?;
        for key in cleaned {
            tracing::debug!(language, namespace, key, "dropped orphaned key");
            outcome.cleaned_keys.push(CleanedKey {
                language: language.to_string(),
                namespace: namespace.to_string(),
                key,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(root: &Path, language: &str, namespace: &str, contents: &str) {
        let dir = root.join(language);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{namespace}.json")), contents).unwrap();
    }

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_creates_missing_files_with_placeholders() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open", "save": "Save"}"#);

        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert_eq!(outcome.created_files.len(), 1);
        assert_eq!(outcome.created_files[0].language, "fr");
        assert_eq!(outcome.created_files[0].namespace, "menu");

        let fr = store::read_namespace(tmp.path(), "fr", "menu").unwrap().unwrap();
        assert_eq!(fr.get("open"), Some(&String::new()));
        assert_eq!(fr.get("save"), Some(&String::new()));
        assert_eq!(fr.len(), 2);
    }

    #[test]
    fn test_removes_orphaned_namespace() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open"}"#);
        write_file(tmp.path(), "fr", "menu", r#"{"open": "Ouvrir"}"#);
        write_file(tmp.path(), "fr", "legacy", r#"{"old": "x"}"#);

        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert_eq!(outcome.removed_namespaces.len(), 1);
        assert_eq!(outcome.removed_namespaces[0].namespace, "legacy");
        assert!(!store::namespace_path(tmp.path(), "fr", "legacy").exists());
    }

    #[test]
    fn test_strips_orphaned_keys_and_backfills() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open", "save": "Save"}"#);
        write_file(tmp.path(), "fr", "menu", r#"{"open": "Ouvrir", "old": "x"}"#);

        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert_eq!(outcome.cleaned_keys.len(), 1);
        assert_eq!(outcome.cleaned_keys[0].key, "old");

        // The rewrite also persists the backfilled placeholder.
        let fr = store::read_namespace(tmp.path(), "fr", "menu").unwrap().unwrap();
        assert!(!fr.contains_key("old"));
        assert_eq!(fr.get("open"), Some(&"Ouvrir".to_string()));
        assert_eq!(fr.get("save"), Some(&String::new()));
    }

    #[test]
    fn test_pure_backfill_does_not_rewrite() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open", "save": "Save"}"#);
        write_file(tmp.path(), "fr", "menu", r#"{"open": "Ouvrir"}"#);

        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert!(outcome.is_clean());

        let fr = store::read_namespace(tmp.path(), "fr", "menu").unwrap().unwrap();
        assert!(!fr.contains_key("save"));
    }

    #[test]
    fn test_idempotent_second_run_is_clean() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open"}"#);
        write_file(tmp.path(), "fr", "menu", r#"{"open": "Ouvrir", "old": "x"}"#);
        write_file(tmp.path(), "fr", "legacy", r#"{"old": "x"}"#);

        let first = sync(tmp.path(), &langs(&["en", "fr", "de"]), "en").unwrap();
        assert!(!first.is_clean());

        let second = sync(tmp.path(), &langs(&["en", "fr", "de"]), "en").unwrap();
        assert!(second.is_clean());
    }

    #[test]
    fn test_missing_source_directory_is_noop() {
        let tmp = TempDir::new().unwrap();
        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert!(outcome.is_clean());
        assert!(!tmp.path().join("fr").exists());
    }

    #[test]
    fn test_non_object_target_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "menu", r#"{"open": "Open"}"#);
        write_file(tmp.path(), "fr", "menu", r#"["not", "a", "tree"]"#);

        let outcome = sync(tmp.path(), &langs(&["en", "fr"]), "en").unwrap();
        assert_eq!(outcome.skipped_files.len(), 1);
        assert!(outcome.is_skipped("fr", "menu"));

        let raw = fs::read_to_string(store::namespace_path(tmp.path(), "fr", "menu")).unwrap();
        assert!(raw.starts_with('['));
    }
}
