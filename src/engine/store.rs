//! On-disk namespace store.
//!
//! One language is a directory of `<namespace>.json` files under the
//! translations root. Files may be flat or arbitrarily nested; they are
//! flattened on read and written back nested, pretty-printed, with a
//! trailing newline. Nothing is cached: every operation reads fresh from
//! disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::engine::tree::{self, FlatMap};
use crate::error::{Error, Result};

/// File extension of namespace files.
pub const NAMESPACE_EXT: &str = "json";

/// Path of one namespace file.
pub fn namespace_path(root: &Path, language: &str, namespace: &str) -> PathBuf {
    root.join(language).join(format!("{namespace}.{NAMESPACE_EXT}"))
}

/// List namespace ids for a language, sorted by name.
///
/// An absent language directory yields an empty list, not an error: the
/// configured language list is authoritative, not the directory layout.
pub fn list_namespaces(root: &Path, language: &str) -> Result<Vec<String>> {
    let dir = root.join(language);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut namespaces = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(NAMESPACE_EXT))
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            namespaces.push(stem.to_string());
        }
    }
    namespaces.sort();
    Ok(namespaces)
}

/// Read one namespace as a flat map. `None` if the file does not exist.
///
/// Malformed JSON and non-string leaves are fatal. A root that is not a
/// JSON object raises [`Error::NotAnObject`] so callers can choose to skip
/// the file instead of clobbering it.
pub fn read_namespace(root: &Path, language: &str, namespace: &str) -> Result<Option<FlatMap>> {
    let path = namespace_path(root, language, namespace);
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;

    let Value::Object(parsed) = value else {
        return Err(Error::NotAnObject { path });
    };

    let flat = tree::flatten(&parsed)
        .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;
    Ok(Some(flat))
}

/// Read every namespace of a language, keyed by namespace id.
///
/// An absent language directory yields an empty map.
pub fn read_language(root: &Path, language: &str) -> Result<BTreeMap<String, FlatMap>> {
    let mut namespaces = BTreeMap::new();
    for namespace in list_namespaces(root, language)? {
        if let Some(flat) = read_namespace(root, language, &namespace)? {
            namespaces.insert(namespace, flat);
        }
    }
    Ok(namespaces)
}

/// Write a namespace file, creating the language directory on demand.
///
/// The flat map is written back as a nested tree so files stay
/// human-diffable; key order is lexicographic by construction. Overwrites
/// unconditionally.
pub fn write_namespace(
    root: &Path,
    language: &str,
    namespace: &str,
    flat: &FlatMap,
) -> Result<()> {
    let path = namespace_path(root, language, namespace);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let nested = tree::unflatten(flat)?;
    let mut contents = serde_json::to_string_pretty(&Value::Object(nested))?;
    contents.push('\n');
    fs::write(&path, contents)?;
    Ok(())
}
