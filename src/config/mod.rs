//! Configuration system for the locsync CLI.
//!
//! Resolution order (highest to lowest):
//! - Explicit `--config` path (or `LOCSYNC_CONFIG`)
//! - Project config: `.locsync.yaml` in the current directory
//! - User config: `~/.config/locsync/config.yaml` (XDG)
//!
//! Individual fields can be overridden through `LOCSYNC_*` environment
//! variables after the file is loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::duplicates::DEFAULT_COMMON_NAMESPACE;
use crate::error::{Error, Result};

/// Project configuration file name.
pub const PROJECT_CONFIG: &str = ".locsync.yaml";

/// Main CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding one subdirectory per language.
    #[serde(default = "default_translations_path")]
    pub translations_path: PathBuf,

    /// Configured languages. Authoritative: a language listed here is
    /// synchronized and validated even when it has no files on disk yet.
    pub languages: Vec<String>,

    /// Source-of-truth language; must appear in `languages`.
    pub source_language: String,

    /// Translation backend used by `locsync fill`.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Namespace holding shared values, referenced by `locsync duplicates`.
    #[serde(default = "default_common_namespace")]
    pub common_namespace: String,

    /// Whether runtimes should fall back to the source language at lookup
    /// time. Consumed by companion runtime tooling.
    #[serde(default)]
    pub use_fallback_languages: bool,

    /// Directories scanned for translation-key usages by companion tooling.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    /// File extensions considered when scanning for key usages.
    #[serde(default)]
    pub search_extensions: Vec<String>,

    /// Where companion tooling writes generated type definitions.
    #[serde(default)]
    pub types_output_path: Option<PathBuf>,
}

fn default_translations_path() -> PathBuf {
    PathBuf::from("locales")
}

fn default_provider() -> String {
    "echo".to_string()
}

fn default_common_namespace() -> String {
    DEFAULT_COMMON_NAMESPACE.to_string()
}

impl Config {
    /// Load configuration, resolving the file per the module rules.
    ///
    /// An explicit path that does not exist is an error; otherwise the
    /// project config is preferred over the user config, and a missing
    /// config everywhere is an error pointing at `locsync init`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let project = PathBuf::from(PROJECT_CONFIG);
                if project.exists() {
                    project
                } else if let Some(user) = Self::user_config_path()
                    && user.exists()
                {
                    user
                } else {
                    return Err(Error::config(format!(
                        "No configuration found. Run 'locsync init' to create {PROJECT_CONFIG}."
                    )));
                }
            }
        };

        let mut config = Self::load_from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Apply `LOCSYNC_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LOCSYNC_TRANSLATIONS_PATH")
            && !path.is_empty()
        {
            self.translations_path = PathBuf::from(path);
        }
        if let Ok(language) = std::env::var("LOCSYNC_SOURCE_LANGUAGE")
            && !language.is_empty()
        {
            self.source_language = language;
        }
        if let Ok(provider) = std::env::var("LOCSYNC_PROVIDER")
            && !provider.is_empty()
        {
            self.provider = provider;
        }
    }

    /// Check the loaded configuration for structural problems.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(Error::config("'languages' must not be empty"));
        }

        for language in &self.languages {
            if !is_valid_language_code(language) {
                return Err(Error::config(format!(
                    "Invalid language code '{language}' (expected e.g. 'en' or 'pt_BR')"
                )));
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for language in &self.languages {
            if !seen.insert(language) {
                return Err(Error::config(format!(
                    "Language '{language}' listed more than once"
                )));
            }
        }

        if !self.languages.contains(&self.source_language) {
            return Err(Error::config(format!(
                "Source language '{}' is not in the configured language list",
                self.source_language
            )));
        }

        Ok(())
    }

    /// Starter configuration written by `locsync init`.
    pub fn starter() -> Self {
        Self {
            translations_path: default_translations_path(),
            languages: vec!["en".to_string()],
            source_language: "en".to_string(),
            provider: default_provider(),
            common_namespace: default_common_namespace(),
            use_fallback_languages: false,
            search_paths: vec![PathBuf::from("src")],
            search_extensions: vec!["ts".to_string(), "tsx".to_string()],
            types_output_path: None,
        }
    }

    /// Target languages: every configured language except the source.
    pub fn target_languages(&self) -> impl Iterator<Item = &String> {
        self.languages.iter().filter(|l| **l != self.source_language)
    }

    /// Get the path to the user config file.
    ///
    /// Follows XDG Base Directory Specification:
    /// - Uses `XDG_CONFIG_HOME/locsync/config.yaml` if set
    /// - Falls back to `~/.config/locsync/config.yaml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("locsync"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("locsync"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("locsync"))
        }
    }
}

fn is_valid_language_code(code: &str) -> bool {
    let (base, region) = match code.split_once('_') {
        Some((base, region)) => (base, Some(region)),
        None => (code, None),
    };

    let base_ok = (2..=3).contains(&base.len()) && base.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region.is_none_or(|r| {
        (2..=8).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
    });

    base_ok && region_ok
}
