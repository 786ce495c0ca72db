//! The localization context: active language, key resolution and direction.
//!
//! One context is built at startup and handed by reference to everything
//! that renders text. It owns the translation tables, the preference store
//! the language choice is persisted in, and the resolution metrics.

use crate::i18n::table::walk;
use crate::i18n::{Direction, Language, ResolutionMetrics, TranslationTables};
use crate::preference::{MemoryPreferenceStore, PreferenceStore, LANGUAGE_KEY};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Document-level attributes that follow the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: Language,
}

pub struct LocalizationContext {
    tables: TranslationTables,
    fallback: Language,
    active: Language,
    store: Box<dyn PreferenceStore>,
    metrics: ResolutionMetrics,
}

impl LocalizationContext {
    /// Build a context, restoring the language persisted in `store`.
    ///
    /// An absent, unreadable, or unknown stored value leaves the fallback
    /// language active.
    pub fn new(tables: TranslationTables, store: Box<dyn PreferenceStore>) -> Self {
        let fallback = Language::canonical();
        let active = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(e) => {
                    warn!("Ignoring stored language preference: {}", e);
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to read language preference: {}", e);
                fallback
            }
        };

        info!("Active language: {} ({})", active, active.direction().as_str());

        Self {
            tables,
            fallback,
            active,
            store,
            metrics: ResolutionMetrics::new(),
        }
    }

    /// A context whose preference lives only in memory.
    pub fn in_memory(tables: TranslationTables) -> Self {
        Self::new(tables, Box::new(MemoryPreferenceStore::new()))
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// Resolve a dotted translation key.
    ///
    /// Lookup order is the active language, then the fallback language, then
    /// the key itself, so a missing translation shows up as its raw key.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.tables.table(self.active).and_then(|t| walk(t, key)) {
            self.metrics.record_direct_hit();
            return text;
        }

        if let Some(text) = self.tables.table(self.fallback).and_then(|t| walk(t, key)) {
            debug!("Key '{}' missing for '{}', using fallback", key, self.active);
            self.metrics.record_fallback_hit();
            return text;
        }

        debug!("Missing translation key '{}'", key);
        self.metrics.record_miss();
        key
    }

    /// Switch the active language and persist the choice.
    ///
    /// Unknown codes are ignored; a failing store is logged and does not undo
    /// the switch.
    pub fn set_language(&mut self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring language change: {}", e);
                return;
            }
        };

        self.active = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language preference: {}", e);
        }

        let document = self.document();
        debug!(
            "Document attributes updated: lang={} dir={}",
            document.lang,
            document.dir.as_str()
        );
    }

    pub fn direction(&self) -> Direction {
        self.active.direction()
    }

    pub fn document(&self) -> DocumentAttributes {
        DocumentAttributes {
            dir: self.direction(),
            lang: self.active,
        }
    }

    pub fn tables(&self) -> &TranslationTables {
        &self.tables
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }
}
