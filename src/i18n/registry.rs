//! Language registry: Single source of truth for all supported site languages.
//!
//! The registry is immutable static configuration. It is initialized once with
//! `OnceLock` and shared read-only; the *active* language is not stored here but
//! in each [`LocalizationContext`](crate::i18n::LocalizationContext).

use serde::Serialize;
use std::sync::OnceLock;

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value used for the document `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "nl", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "Dutch", "Arabic")
    pub name: &'static str,

    /// Native name of the language, as shown in the language picker
    pub native_name: &'static str,

    /// Writing direction
    pub direction: Direction,

    /// Whether this is the fallback language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in picker order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the fallback language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

fn ltr(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        direction: Direction::Ltr,
        is_canonical: false,
        enabled: true,
    }
}

/// Languages offered by the site header, Dutch first.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..ltr("nl", "Dutch", "Nederlands")
        },
        ltr("en", "English", "English"),
        ltr("tr", "Turkish", "Türkçe"),
        ltr("pl", "Polish", "Polski"),
        ltr("bg", "Bulgarian", "Български"),
        LanguageConfig {
            direction: Direction::Rtl,
            ..ltr("ar", "Arabic", "العربية")
        },
        ltr("de", "German", "Deutsch"),
        ltr("hu", "Hungarian", "Magyar"),
        ltr("fr", "French", "Français"),
    ]
}
