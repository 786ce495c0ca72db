//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `table`: Nested per-language translation tables, bundled or loaded from disk
//! - `context`: `LocalizationContext`, the resolver handed to every text-bearing component
//! - `validator`: Coverage audit of the tables against the fallback language
//! - `metrics`: Direct / fallback / miss counters for key resolution
//!
//! # Example
//!
//! ```rust,ignore
//! use messu_site::i18n::{LocalizationContext, TranslationTables};
//!
//! let mut l10n = LocalizationContext::in_memory(TranslationTables::bundled()?);
//! l10n.set_language("en");
//! assert_eq!(l10n.resolve("nav.contact"), "Contact");
//! ```

mod context;
mod language;
mod metrics;
mod registry;
mod table;
mod validator;

pub use context::{DocumentAttributes, LocalizationContext};
pub use language::Language;
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{Direction, LanguageConfig, LanguageRegistry};
pub use table::{TableError, TranslationTables};
pub use validator::{TranslationValidator, ValidationReport};
