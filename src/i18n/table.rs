//! Translation tables: per-language nested JSON dictionaries.
//!
//! Each table is a JSON object whose leaves are strings. Keys are addressed
//! with dotted paths (`"validation.required"`). Tables are immutable once
//! loaded.

use crate::i18n::Language;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading translation tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid translation JSON for '{code}': {source}")]
    Parse {
        code: &'static str,
        source: serde_json::Error,
    },

    #[error("translation table for '{0}' must be a JSON object")]
    NotAnObject(&'static str),

    #[error("no translation table for the fallback language '{0}'")]
    MissingFallback(&'static str),
}

/// Tables compiled into the binary, one per registry language.
const BUNDLED: &[(&str, &str)] = &[
    ("nl", include_str!("../../locales/nl.json")),
    ("en", include_str!("../../locales/en.json")),
    ("tr", include_str!("../../locales/tr.json")),
    ("pl", include_str!("../../locales/pl.json")),
    ("bg", include_str!("../../locales/bg.json")),
    ("ar", include_str!("../../locales/ar.json")),
    ("de", include_str!("../../locales/de.json")),
    ("hu", include_str!("../../locales/hu.json")),
    ("fr", include_str!("../../locales/fr.json")),
];

/// All translation tables known to the site.
#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    tables: HashMap<Language, Value>,
}

impl TranslationTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables shipped with the crate under `locales/`.
    pub fn bundled() -> Result<Self, TableError> {
        let mut tables = Self::new();
        for (code, json) in BUNDLED {
            // Every bundled code is a registry language
            let Ok(language) = Language::from_code(code) else {
                continue;
            };
            tables.insert_json(language, json)?;
        }
        Ok(tables)
    }

    /// Load `<code>.json` for every registry language from `dir`.
    ///
    /// Languages without a file are skipped with a warning; a missing fallback
    /// table is an error since every lookup eventually lands there.
    pub fn load_dir(dir: &Path) -> Result<Self, TableError> {
        let mut tables = Self::new();

        for language in Language::all() {
            let path = dir.join(format!("{}.json", language.code()));
            if !path.exists() {
                if language.is_canonical() {
                    return Err(TableError::MissingFallback(language.code()));
                }
                warn!("No translation file for '{}' at {}", language, path.display());
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|source| TableError::Io {
                path: path.clone(),
                source,
            })?;
            tables.insert_json(language, &json)?;
            debug!("Loaded translations for '{}' from {}", language, path.display());
        }

        Ok(tables)
    }

    /// Parse and add (or replace) the table for `language`.
    pub fn insert_json(&mut self, language: Language, json: &str) -> Result<(), TableError> {
        let value: Value = serde_json::from_str(json).map_err(|source| TableError::Parse {
            code: language.code(),
            source,
        })?;
        self.insert(language, value)
    }

    /// Add (or replace) the table for `language`. The root must be an object.
    pub fn insert(&mut self, language: Language, table: Value) -> Result<(), TableError> {
        if !table.is_object() {
            return Err(TableError::NotAnObject(language.code()));
        }
        self.tables.insert(language, table);
        Ok(())
    }

    pub fn table(&self, language: Language) -> Option<&Value> {
        self.tables.get(&language)
    }

    /// Languages that have a table, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|language| self.tables.contains_key(language))
            .collect()
    }

    /// Dotted paths of every string leaf in `language`'s table, sorted.
    pub fn keys(&self, language: Language) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(table) = self.table(language) {
            collect_keys(table, "", &mut keys);
        }
        keys.sort();
        keys
    }

    /// Look up `key` in a single language's table, without fallback.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.table(language).and_then(|table| walk(table, key))
    }
}

fn collect_keys(node: &Value, prefix: &str, keys: &mut Vec<String>) {
    let Some(object) = node.as_object() else {
        return;
    };
    for (segment, child) in object {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match child {
            Value::String(_) => keys.push(path),
            Value::Object(_) => collect_keys(child, &path, keys),
            _ => {}
        }
    }
}

/// Follow the dotted `key` through nested objects; only a string leaf counts.
pub(crate) fn walk<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))?
        .as_str()
}
