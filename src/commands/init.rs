//! First-run project setup.

use std::fs;
use std::path::Path;

use crate::config::{Config, PROJECT_CONFIG};
use crate::context::Context;
use crate::engine::store;
use crate::engine::tree::FlatMap;
use crate::error::{Error, Result};

/// Write a starter configuration and seed the source language directory.
pub async fn run(ctx: &Context, force: bool) -> Result<()> {
    let path = Path::new(PROJECT_CONFIG);
    if path.exists() && !force {
        return Err(Error::config(format!(
            "{PROJECT_CONFIG} already exists. Use --force to overwrite."
        )));
    }

    let config = Config::starter();
    let contents = serde_yaml::to_string(&config)?;
    fs::write(path, contents)?;
    ctx.output.success(&format!("Wrote {PROJECT_CONFIG}."));

    // Seed the source language with a sample namespace so sync and
    // validate have something to work from.
    let sample = store::namespace_path(
        &config.translations_path,
        &config.source_language,
        &config.common_namespace,
    );
    if !sample.exists() {
        let mut flat = FlatMap::new();
        flat.insert("hello".to_string(), "Hello world".to_string());
        store::write_namespace(
            &config.translations_path,
            &config.source_language,
            &config.common_namespace,
            &flat,
        )?;
        ctx.output.success(&format!("Created {}.", sample.display()));
    }

    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info(&format!("  - edit {PROJECT_CONFIG} and list your languages"));
    ctx.output.info("  - run 'locsync sync' to scaffold target languages");
    ctx.output.info("  - run 'locsync validate' in CI");

    Ok(())
}
