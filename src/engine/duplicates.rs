//! Duplicate value detection against the shared namespace.
//!
//! Keys in other namespaces whose source-language value byte-for-byte
//! matches a value already defined in the designated common namespace are
//! candidates for consolidation. Exact string equality only; no
//! normalization, no fuzzy matching.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::engine::store;
use crate::error::Result;

/// Default name of the shared-value namespace.
pub const DEFAULT_COMMON_NAMESPACE: &str = "common";

/// One key whose value duplicates a common-namespace value.
#[derive(Debug, Clone, Serialize)]
pub struct Duplicate {
    /// Namespace of the duplicated key.
    pub namespace: String,
    /// The duplicated key.
    pub key: String,
    /// The shared value.
    pub value: String,
    /// The common-namespace key already holding this value.
    pub common_key: String,
}

/// Result of one duplicate scan over the source language.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateReport {
    /// Duplicates found, in (namespace, key) order.
    pub duplicates: Vec<Duplicate>,
    /// Number of non-common keys examined.
    pub total_keys_checked: usize,
}

/// Scan the source language for values duplicating the common namespace.
///
/// An empty or absent common namespace short-circuits to an empty report
/// with zero keys checked.
pub fn find_duplicates(
    root: &Path,
    source_language: &str,
    common_namespace: &str,
) -> Result<DuplicateReport> {
    let source = store::read_language(root, source_language)?;

    let Some(common) = source.get(common_namespace) else {
        return Ok(DuplicateReport::default());
    };
    if common.is_empty() {
        return Ok(DuplicateReport::default());
    }

    // Reverse index: value -> first-seen common key. FlatMap iteration is
    // lexicographic, so ties go to the lexicographically first key.
    let mut by_value: HashMap<&str, &str> = HashMap::new();
    for (key, value) in common {
        by_value.entry(value.as_str()).or_insert(key.as_str());
    }

    let mut report = DuplicateReport::default();
    for (namespace, flat) in &source {
        if namespace == common_namespace {
            continue;
        }
        for (key, value) in flat {
            report.total_keys_checked += 1;
            if let Some(common_key) = by_value.get(value.as_str()) {
                report.duplicates.push(Duplicate {
                    namespace: namespace.clone(),
                    key: key.clone(),
                    value: value.clone(),
                    common_key: (*common_key).to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(root: &Path, language: &str, namespace: &str, contents: &str) {
        let dir = root.join(language);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{namespace}.json")), contents).unwrap();
    }

    #[test]
    fn test_reports_exact_value_match() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "common", r#"{"SAVE": "Save"}"#);
        write_file(tmp.path(), "en", "editor", r#"{"SAVE_BTN": "Save", "CANCEL": "Cancel"}"#);

        let report = find_duplicates(tmp.path(), "en", "common").unwrap();
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].key, "SAVE_BTN");
        assert_eq!(report.duplicates[0].common_key, "SAVE");
        assert_eq!(report.total_keys_checked, 2);
    }

    #[test]
    fn test_no_normalization() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "common", r#"{"SAVE": "Save"}"#);
        write_file(tmp.path(), "en", "editor", r#"{"SAVE_BTN": "save", "OTHER": "Save "}"#);

        let report = find_duplicates(tmp.path(), "en", "common").unwrap();
        assert!(report.duplicates.is_empty());
        assert_eq!(report.total_keys_checked, 2);
    }

    #[test]
    fn test_first_seen_common_key_wins() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "common", r#"{"B_OK": "OK", "A_OK": "OK"}"#);
        write_file(tmp.path(), "en", "editor", r#"{"CONFIRM": "OK"}"#);

        let report = find_duplicates(tmp.path(), "en", "common").unwrap();
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].common_key, "A_OK");
    }

    #[test]
    fn test_absent_common_namespace_short_circuits() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "editor", r#"{"SAVE_BTN": "Save"}"#);

        let report = find_duplicates(tmp.path(), "en", "common").unwrap();
        assert!(report.duplicates.is_empty());
        assert_eq!(report.total_keys_checked, 0);
    }

    #[test]
    fn test_empty_common_namespace_short_circuits() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "en", "common", "{}");
        write_file(tmp.path(), "en", "editor", r#"{"SAVE_BTN": "Save"}"#);

        let report = find_duplicates(tmp.path(), "en", "common").unwrap();
        assert_eq!(report.total_keys_checked, 0);
    }
}
