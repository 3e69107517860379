//! Normalization of user-submitted solution fields.
//!
//! Runs once at form submission time: strips placeholder values, trims
//! and canonicalizes dropdown entries case-insensitively, keeps
//! user-supplied custom entries where the field allows them, and enforces
//! required-field completeness unless the caller asks for a partial
//! check (the follow-up "additional details" path).

use std::collections::BTreeMap;

use taxonomy::{catalog, resolve, Category, CategoryRegistry, FieldName};

use crate::types::{FieldValue, IntakeReport, ValidationIssue};

/// Placeholder strings treated as "field not answered".
const PLACEHOLDERS: &[&str] = &["n/a", "don't remember", "prefer not to say"];

/// Options for a normalization pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Skip the required-field completeness check (used by follow-up
    /// calls that only add previously-omitted optional fields)
    pub allow_partial: bool,
}

/// Normalizer for submitted solution fields.
pub struct FieldNormalizer<'a> {
    registry: &'a CategoryRegistry,
}

impl<'a> FieldNormalizer<'a> {
    /// Create a normalizer over a registry.
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Normalize a submission given as loose JSON.
    ///
    /// Non-object input behaves like an empty submission.
    pub fn normalize_json(
        &self,
        category: &str,
        raw: &serde_json::Value,
        options: NormalizeOptions,
    ) -> IntakeReport {
        let mut fields = BTreeMap::new();
        if let Some(object) = raw.as_object() {
            for (key, value) in object {
                fields.insert(key.clone(), FieldValue::from_json(value.clone()));
            }
        }
        self.normalize(category, &fields, options)
    }

    /// Normalize a submission.
    ///
    /// An unknown category is fatal for the whole call: a single-error
    /// report with empty normalized output. Everything else accumulates
    /// per-field findings and still returns whatever could be normalized.
    pub fn normalize(
        &self,
        category: &str,
        raw: &BTreeMap<String, FieldValue>,
        options: NormalizeOptions,
    ) -> IntakeReport {
        let mut report = IntakeReport::new();

        let category: Category = match category.parse() {
            Ok(category) => category,
            Err(_) => {
                report.error(ValidationIssue::UnknownCategory {
                    category: category.to_string(),
                });
                return report;
            }
        };

        // Sibling context for the cost-structure second-field dependency.
        let subscription_type = match raw.get(FieldName::SubscriptionType.as_str()) {
            Some(FieldValue::Text(s)) => Some(s.trim().to_string()),
            _ => None,
        };

        for (key, value) in raw {
            let field = FieldName::parse(key);
            match value {
                FieldValue::List(items) => {
                    self.normalize_list(
                        category,
                        field,
                        key,
                        items,
                        subscription_type.as_deref(),
                        &mut report,
                    );
                }
                FieldValue::Text(text) => {
                    self.normalize_text(
                        category,
                        field,
                        key,
                        text,
                        subscription_type.as_deref(),
                        &mut report,
                    );
                }
                // Non-string, non-array values pass through unchanged.
                FieldValue::Other(other) => {
                    report
                        .normalized
                        .insert(key.clone(), FieldValue::Other(other.clone()));
                }
            }
        }

        if !options.allow_partial {
            for field in self.registry.required_fields(category) {
                let present = report
                    .normalized
                    .get(field.as_str())
                    .map(|value| !value.is_empty())
                    .unwrap_or(false);
                if !present {
                    report.error(ValidationIssue::MissingRequiredField { field: *field });
                }
            }
        }

        report
    }

    /// Normalize an array-typed field.
    fn normalize_list(
        &self,
        category: Category,
        field: Option<FieldName>,
        key: &str,
        items: &[String],
        subscription_type: Option<&str>,
        report: &mut IntakeReport,
    ) {
        // Empty entries are dropped; the literal "None" is a meaningful
        // "no issues reported" sentinel and stays.
        let entries: Vec<&str> = items
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect();

        let resolved = field.and_then(|field| {
            resolve::resolve_key_in_context(category, field, subscription_type)
                .map(|catalog_key| (field, catalog_key))
        });

        let mut normalized = Vec::with_capacity(entries.len());
        for entry in entries {
            match resolved {
                Some((field, catalog_key)) => {
                    if let Some(canonical) = catalog::canonicalize(catalog_key, entry) {
                        normalized.push(canonical.to_string());
                    } else if field.allows_custom_entries() {
                        normalized.push(entry.to_string());
                    } else {
                        report.error(ValidationIssue::InvalidValue {
                            field,
                            value: entry.to_string(),
                            catalog: catalog_key,
                        });
                        normalized.push(entry.to_string());
                    }
                }
                None => normalized.push(entry.to_string()),
            }
        }

        if !normalized.is_empty() {
            report
                .normalized
                .insert(key.to_string(), FieldValue::List(normalized));
        }
    }

    /// Normalize a string-typed field.
    fn normalize_text(
        &self,
        category: Category,
        field: Option<FieldName>,
        key: &str,
        text: &str,
        subscription_type: Option<&str>,
        report: &mut IntakeReport,
    ) {
        let trimmed = text.trim();

        // Placeholders mean "not answered": the field is dropped
        // entirely, not stored as an empty value.
        if trimmed.is_empty()
            || PLACEHOLDERS
                .iter()
                .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
        {
            return;
        }

        // Literal escape that always passes regardless of the dropdown.
        if trimmed.eq_ignore_ascii_case("unknown") {
            report
                .normalized
                .insert(key.to_string(), FieldValue::Text(trimmed.to_string()));
            return;
        }

        let resolved = field.and_then(|field| {
            resolve::resolve_key_in_context(category, field, subscription_type)
                .map(|catalog_key| (field, catalog_key))
        });

        let normalized = match resolved {
            Some((field, catalog_key)) => {
                if let Some(canonical) = catalog::canonicalize(catalog_key, trimmed) {
                    canonical.to_string()
                } else if field.allows_custom_entries() {
                    trimmed.to_string()
                } else {
                    report.error(ValidationIssue::InvalidValue {
                        field,
                        value: trimmed.to_string(),
                        catalog: catalog_key,
                    });
                    trimmed.to_string()
                }
            }
            None => trimmed.to_string(),
        };

        report
            .normalized
            .insert(key.to_string(), FieldValue::Text(normalized));
    }
}
