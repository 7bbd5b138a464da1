//! Translation capability and built-in providers.
//!
//! The engine calls a [`TranslationProvider`] but does not implement real
//! machine-translation backends; the built-ins here are network-free.
//! Providers are injected explicitly into the fill orchestrator; there is
//! no process-wide registration.
//!
//! Interpolation tokens of the form `{{name}}` must survive translation
//! unchanged; that preservation is the provider's responsibility.

pub mod autofill;

use crate::error::{Error, Result};

/// A machine-translation capability.
pub trait TranslationProvider {
    /// Short identifier used in configuration and logs.
    fn name(&self) -> &'static str;

    /// Translate `text` from `source_language` into `target_language`.
    fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> impl Future<Output = Result<String>>;
}

/// Copies the source text unchanged. Useful for seeding targets with the
/// source copy before human review.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoProvider;

impl TranslationProvider for EchoProvider {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Pseudolocalization: accents ASCII letters and brackets the text so
/// untranslated strings stand out in a running UI, while `{{name}}`
/// interpolation tokens pass through verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoProvider;

impl TranslationProvider for PseudoProvider {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String> {
        Ok(pseudolocalize(text))
    }
}

/// Built-in providers, selected by name from config or `--provider`.
#[derive(Debug, Clone, Copy)]
pub enum Provider {
    /// Source-copy passthrough.
    Echo(EchoProvider),
    /// Pseudolocalization.
    Pseudo(PseudoProvider),
}

impl Provider {
    /// Names accepted by [`Provider::resolve`].
    pub const AVAILABLE: &'static [&'static str] = &["echo", "pseudo"];

    /// Look up a built-in provider by name.
    pub fn resolve(name: &str) -> Result<Self> {
        match name {
            "echo" => Ok(Self::Echo(EchoProvider)),
            "pseudo" => Ok(Self::Pseudo(PseudoProvider)),
            other => Err(Error::UnknownProvider {
                name: other.to_string(),
                available: Self::AVAILABLE.join(", "),
            }),
        }
    }
}

impl TranslationProvider for Provider {
    fn name(&self) -> &'static str {
        match self {
            Self::Echo(p) => p.name(),
            Self::Pseudo(p) => p.name(),
        }
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        match self {
            Self::Echo(p) => p.translate(text, source_language, target_language).await,
            Self::Pseudo(p) => p.translate(text, source_language, target_language).await,
        }
    }
}

fn pseudolocalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    out.push('⟦');

    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let (head, tail) = rest.split_at(start);
        out.extend(head.chars().map(accent));
        match tail.find("}}") {
            Some(end) => {
                out.push_str(&tail[..end + 2]);
                rest = &tail[end + 2..];
            }
            None => {
                // Unterminated token; treat the remainder as plain text.
                out.extend(tail.chars().map(accent));
                rest = "";
            }
        }
    }
    out.extend(rest.chars().map(accent));

    out.push('⟧');
    out
}

fn accent(c: char) -> char {
    match c {
        'a' => 'á',
        'e' => 'é',
        'i' => 'í',
        'o' => 'ó',
        'u' => 'ú',
        'A' => 'Á',
        'E' => 'É',
        'I' => 'Í',
        'O' => 'Ó',
        'U' => 'Ú',
        'n' => 'ñ',
        'N' => 'Ñ',
        'c' => 'ç',
        'C' => 'Ç',
        other => other,
    }
}
