//! Translation coverage validation.
//!
//! Compares every loaded table against the fallback table. Gaps are only
//! warnings since resolution falls back, but structural problems (a missing
//! fallback table, non-string leaves) are errors because those keys can never
//! resolve to text.

use crate::i18n::{Language, TranslationTables};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make keys unresolvable
    pub errors: Vec<String>,

    /// Gaps that are covered by the fallback chain
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table coverage.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Check all tables against the fallback language's table.
    ///
    /// Reports, per language:
    /// - keys the fallback has but the language lacks (warning)
    /// - keys the language has but the fallback lacks (warning)
    /// - leaves that are not strings (error)
    pub fn validate(tables: &TranslationTables) -> ValidationReport {
        let mut report = ValidationReport::new();
        let fallback = Language::canonical();

        let Some(fallback_table) = tables.table(fallback) else {
            report
                .errors
                .push(format!("No translation table for fallback language '{}'", fallback));
            return report;
        };

        let mut reference = BTreeSet::new();
        Self::collect_leaves(fallback, fallback_table, "", &mut reference, &mut report);

        for language in tables.languages() {
            if language == fallback {
                continue;
            }
            let Some(table) = tables.table(language) else {
                continue;
            };

            let mut keys = BTreeSet::new();
            Self::collect_leaves(language, table, "", &mut keys, &mut report);

            let missing: Vec<_> = reference.difference(&keys).collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "'{}' is missing {} of {} keys: {:?}",
                    language,
                    missing.len(),
                    reference.len(),
                    missing
                ));
            }

            let orphans: Vec<_> = keys.difference(&reference).collect();
            if !orphans.is_empty() {
                report.warnings.push(format!(
                    "'{}' has keys unknown to '{}': {:?}",
                    language, fallback, orphans
                ));
            }
        }

        report
    }

    /// Collect dotted paths of all string leaves under `node`.
    fn collect_leaves(
        language: Language,
        node: &Value,
        prefix: &str,
        keys: &mut BTreeSet<String>,
        report: &mut ValidationReport,
    ) {
        let Some(object) = node.as_object() else {
            return;
        };

        for (segment, child) in object {
            let path = if prefix.is_empty() {
                segment.clone()
            } else {
                format!("{}.{}", prefix, segment)
            };

            if segment.contains('.') {
                report.errors.push(format!(
                    "'{}': segment '{}' contains a dot and cannot be addressed",
                    language, path
                ));
                continue;
            }

            match child {
                Value::String(_) => {
                    keys.insert(path);
                }
                Value::Object(_) => Self::collect_leaves(language, child, &path, keys, report),
                other => report.errors.push(format!(
                    "'{}': key '{}' is not a string (found {})",
                    language,
                    path,
                    type_name(other)
                )),
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables(entries: Vec<(Language, Value)>) -> TranslationTables {
        let mut tables = TranslationTables::new();
        for (language, value) in entries {
            tables.insert(language, value).unwrap();
        }
        tables
    }

    #[test]
    fn test_identical_tables_are_clean() {
        let table = json!({"nav": {"home": "Home"}});
        let report = TranslationValidator::validate(&tables(vec![
            (Language::DUTCH, table.clone()),
            (Language::ENGLISH, table),
        ]));
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_fallback_is_error() {
        let report = TranslationValidator::validate(&tables(vec![(
            Language::ENGLISH,
            json!({"nav": {"home": "Home"}}),
        )]));
        assert!(report.has_errors());
        assert!(report.errors[0].contains("fallback"));
    }

    #[test]
    fn test_missing_keys_are_warnings() {
        let report = TranslationValidator::validate(&tables(vec![
            (
                Language::DUTCH,
                json!({"nav": {"home": "Home", "contact": "Contact"}}),
            ),
            (Language::ENGLISH, json!({"nav": {"home": "Home"}})),
        ]));
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("nav.contact"));
        assert!(report.warnings[0].contains("1 of 2"));
    }

    #[test]
    fn test_orphan_keys_are_warnings() {
        let report = TranslationValidator::validate(&tables(vec![
            (Language::DUTCH, json!({"nav": {"home": "Home"}})),
            (
                Language::ENGLISH,
                json!({"nav": {"home": "Home", "blog": "Blog"}}),
            ),
        ]));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("nav.blog"));
    }

    #[test]
    fn test_non_string_leaf_is_error() {
        let report = TranslationValidator::validate(&tables(vec![(
            Language::DUTCH,
            json!({"forms": {"steps": ["a", "b"], "count": 3}}),
        )]));
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|e| e.contains("array")));
        assert!(report.errors.iter().any(|e| e.contains("number")));
    }

    #[test]
    fn test_dotted_segment_is_error() {
        let report = TranslationValidator::validate(&tables(vec![(
            Language::DUTCH,
            json!({"forms.name": "Naam"}),
        )]));
        assert!(report.has_errors());
    }

    #[test]
    fn test_bundled_tables_have_no_errors() {
        let tables = TranslationTables::bundled().unwrap();
        let report = TranslationValidator::validate(&tables);
        assert!(!report.has_errors(), "{:?}", report.errors);
        // English mirrors the fallback table exactly
        assert!(!report.warnings.iter().any(|w| w.starts_with("'en'")));
    }
}
