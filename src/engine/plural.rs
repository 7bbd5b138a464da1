//! Plural-suffix grouping over flat key sets.
//!
//! i18next-style keys spell plural forms as `<base>_<category>` using the
//! six CLDR plural categories. Downstream type generation wants the
//! virtual base key, not the per-category variants.

use std::collections::BTreeSet;

/// CLDR plural category suffixes, in category order.
pub const PLURAL_SUFFIXES: [&str; 6] = ["_zero", "_one", "_two", "_few", "_many", "_other"];

/// Infer the base keys implied by plural-suffixed keys.
///
/// A base is emitted only when it is non-empty and no key equal to it is
/// already present. Each base appears once regardless of how many suffixed
/// siblings exist; the suffix must be trailing, not a mid-token substring.
pub fn plural_base_keys(keys: &[String]) -> Vec<String> {
    let existing: BTreeSet<&str> = keys.iter().map(String::as_str).collect();

    let mut bases = BTreeSet::new();
    for key in keys {
        for suffix in PLURAL_SUFFIXES {
            if let Some(base) = key.strip_suffix(suffix) {
                if !base.is_empty() && !existing.contains(base) {
                    bases.insert(base.to_string());
                }
                break;
            }
        }
    }

    bases.into_iter().collect()
}
