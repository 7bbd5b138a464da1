//! Flatten and unflatten nested translation trees.
//!
//! Namespace files may be flat (`{"a.b": "x"}`) or nested
//! (`{"a": {"b": "x"}}`); the flat dot-path form is the canonical working
//! representation everywhere else in the engine. Both directions reject
//! trees in which a string leaf's path collides with a nested path, rather
//! than silently picking a winner.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Canonical representation of one namespace: dot-joined key paths mapped
/// to leaf values. The ordered map keeps keys lexicographically sorted, so
/// every serialization of a flat map is deterministic.
pub type FlatMap = BTreeMap<String, String>;

/// Returns true iff any top-level value is a nested object.
///
/// Used on read to decide whether flattening is required; a map with no
/// nested values already is its own flat form.
pub fn is_nested(tree: &Map<String, Value>) -> bool {
    tree.values().any(Value::is_object)
}

/// Flatten a namespace tree into dot-joined key paths.
///
/// Empty nested objects produce no entries. Leaves must be strings; any
/// other leaf type is rejected, as is a literal dotted key colliding with
/// a nested path (`{"a.b": _, "a": {"b": _}}`).
pub fn flatten(tree: &Map<String, Value>) -> Result<FlatMap> {
    let mut flat = FlatMap::new();
    flatten_into(tree, None, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    tree: &Map<String, Value>,
    prefix: Option<&str>,
    out: &mut FlatMap,
) -> Result<()> {
    for (key, value) in tree {
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::String(s) => {
                if out.insert(path.clone(), s.clone()).is_some() {
                    return Err(Error::parse(format!(
                        "duplicate key '{path}' after flattening"
                    )));
                }
            }
            Value::Object(nested) => flatten_into(nested, Some(&path), out)?,
            other => {
                return Err(Error::parse(format!(
                    "key '{path}' has a non-string leaf ({})",
                    value_kind(other)
                )));
            }
        }
    }
    Ok(())
}

/// Rebuild a nested tree from a flat map.
///
/// Rejects maps in which one key is a strict dot-prefix of another (`a`
/// alongside `a.b`): such a map has no faithful tree form.
pub fn unflatten(flat: &FlatMap) -> Result<Map<String, Value>> {
    let mut root = Map::new();
    for (path, value) in flat {
        insert_path(&mut root, path, value)?;
    }
    Ok(root)
}

fn insert_path(root: &mut Map<String, Value>, path: &str, value: &str) -> Result<()> {
    let mut node = root;
    let mut walked = String::new();
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);

        if segments.peek().is_none() {
            if matches!(node.get(segment), Some(Value::Object(_))) {
                return Err(Error::KeyCollision {
                    key: path.to_string(),
                    prefix: walked.clone(),
                });
            }
            node.insert(segment.to_string(), Value::String(value.to_string()));
        } else {
            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match entry {
                Value::Object(nested) => node = nested,
                _ => {
                    return Err(Error::KeyCollision {
                        key: path.to_string(),
                        prefix: walked.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}
