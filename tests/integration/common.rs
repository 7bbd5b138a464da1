//! Common test utilities.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temporary project directory with a `.locsync.yaml`.
pub fn project(languages: &[&str], source: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), languages, source);
    temp_dir
}

/// Write a `.locsync.yaml` listing the given languages.
pub fn write_config(project: &Path, languages: &[&str], source: &str) {
    let langs = languages.join(", ");
    let yaml = format!(
        "translations_path: locales\nlanguages: [{langs}]\nsource_language: {source}\n"
    );
    fs::write(project.join(".locsync.yaml"), yaml).expect("write config");
}

/// Write a namespace file under `<project>/locales/<language>/`.
pub fn write_namespace(project: &Path, language: &str, namespace: &str, contents: &str) {
    let dir = project.join("locales").join(language);
    fs::create_dir_all(&dir).expect("create language dir");
    fs::write(dir.join(format!("{namespace}.json")), contents).expect("write namespace");
}

/// Path of a namespace file inside the test project.
pub fn namespace_path(project: &Path, language: &str, namespace: &str) -> PathBuf {
    project
        .join("locales")
        .join(language)
        .join(format!("{namespace}.json"))
}
