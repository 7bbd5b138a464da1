//! Source key listing command.
//!
//! Prints the source language's flattened key set, optionally with the
//! virtual base keys implied by plural suffixes, the same set downstream
//! type generators consume.

use serde::Serialize;

use crate::context::Context;
use crate::engine::{plural, store};
use crate::error::{Error, Result};
use crate::output::{Displayable, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct KeyRow {
    namespace: String,
    key: String,
    kind: &'static str,
}

impl Displayable for KeyRow {
    fn table_row(&self) -> Vec<String> {
        vec![self.namespace.clone(), self.key.clone(), self.kind.to_string()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["NAMESPACE", "KEY", "KIND"]
    }
}

/// Print the source language's flattened key set.
pub async fn run(ctx: &Context, namespace: Option<&str>, bases: bool) -> Result<()> {
    let config = ctx.config()?;
    let source = store::read_language(&config.translations_path, &config.source_language)?;

    if source.is_empty() {
        return Err(Error::config(format!(
            "Source language '{}' has no namespaces under {}",
            config.source_language,
            config.translations_path.display(),
        )));
    }

    if let Some(ns) = namespace
        && !source.contains_key(ns)
    {
        return Err(Error::invalid_arg(format!(
            "Namespace '{ns}' does not exist in the source language"
        )));
    }

    let mut rows = Vec::new();
    for (ns, flat) in &source {
        if namespace.is_some_and(|wanted| wanted != ns.as_str()) {
            continue;
        }

        let keys: Vec<String> = flat.keys().cloned().collect();
        for key in &keys {
            rows.push(KeyRow { namespace: ns.clone(), key: key.clone(), kind: "literal" });
        }
        if bases {
            for base in plural::plural_base_keys(&keys) {
                rows.push(KeyRow { namespace: ns.clone(), key: base, kind: "plural-base" });
            }
        }
    }

    if ctx.output.format() == OutputFormat::Table {
        ctx.output.table(&rows)?;
        ctx.output.info("");
        ctx.output.info(&format!("{} key(s).", rows.len()));
    } else {
        ctx.output.value(&rows)?;
    }

    Ok(())
}
