//! Distribution validation.
//!
//! Checks a candidate distribution against the dropdown catalog and the
//! statistical quality invariants. Checks run in a fixed order and every
//! finding is collected — nothing short-circuits except a missing or
//! structurally-nonsensical input, which produces a single finding.

mod patterns;

pub use patterns::{MechanisticDetector, PatternFinding};

use taxonomy::{resolve, Category, CategoryRegistry, FieldName};

use oracle::{DistributionData, SourceTag};

use crate::config::DistillConfig;
use crate::types::{ValidationIssue, ValidationReport};

/// Which tolerance and severity profile a validation pass runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Pre-persistence gate: zero percentage tolerance, mechanistic
    /// patterns are errors
    Strict,
    /// Lighter normalization-time check: small percentage tolerance,
    /// mechanistic patterns downgrade to warnings
    Lenient,
}

/// Validator for generated distributions.
pub struct DistributionValidator<'a> {
    registry: &'a CategoryRegistry,
    config: DistillConfig,
    detector: MechanisticDetector,
}

impl<'a> DistributionValidator<'a> {
    /// Create a validator over a registry with the given tolerances.
    pub fn new(registry: &'a CategoryRegistry, config: DistillConfig) -> Self {
        Self {
            registry,
            config,
            detector: MechanisticDetector::new(),
        }
    }

    /// The tolerances this validator runs with.
    pub fn config(&self) -> &DistillConfig {
        &self.config
    }

    /// Validate with the strict pre-persistence profile.
    pub fn validate(
        &self,
        data: &DistributionData,
        field: FieldName,
        category: Category,
    ) -> ValidationReport {
        self.validate_with_mode(data, field, category, ValidationMode::Strict)
    }

    /// Validate with the lenient normalization-time profile.
    pub fn validate_lenient(
        &self,
        data: &DistributionData,
        field: FieldName,
        category: Category,
    ) -> ValidationReport {
        self.validate_with_mode(data, field, category, ValidationMode::Lenient)
    }

    /// Validate a raw persisted value.
    ///
    /// Missing, non-object, or structurally-garbled input produces the
    /// single [`ValidationIssue::NotADistribution`] finding.
    pub fn validate_raw(
        &self,
        raw: &serde_json::Value,
        field: FieldName,
        category: Category,
    ) -> ValidationReport {
        if !raw.is_object() {
            return ValidationReport::single_error(ValidationIssue::NotADistribution);
        }
        match serde_json::from_value::<DistributionData>(raw.clone()) {
            Ok(data) => self.validate(&data, field, category),
            Err(_) => ValidationReport::single_error(ValidationIssue::NotADistribution),
        }
    }

    /// Run the full check battery.
    pub fn validate_with_mode(
        &self,
        data: &DistributionData,
        field: FieldName,
        category: Category,
        mode: ValidationMode,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        // 1. Structure: nothing else is checkable without values.
        if data.values.is_empty() {
            report.error(ValidationIssue::MissingValues);
            return report;
        }

        // 2. Field applicability. Warning only: some entry points
        // intentionally validate optional fields.
        if !self.registry.config(category).requires(field) {
            report.warn(ValidationIssue::FieldNotRequired { field, category });
        }

        // 3. Dropdown compliance.
        if let Some(key) = resolve::resolve_key(category, field) {
            let options = taxonomy::catalog::options(key);
            for value in &data.values {
                let trimmed = value.value.trim();
                if options.contains(&trimmed) {
                    continue;
                }
                if let Some(expected) = taxonomy::catalog::canonicalize(key, trimmed) {
                    report.error(ValidationIssue::CaseMismatch {
                        value: trimmed.to_string(),
                        expected: expected.to_string(),
                    });
                } else if !field.allows_custom_entries() {
                    report.error(ValidationIssue::InvalidValue {
                        field,
                        value: trimmed.to_string(),
                        catalog: key,
                    });
                }
            }
        }

        // 4. Duplicate safety net (post-dedup; trim + case-insensitive,
        // not the full synonym logic).
        let mut seen: Vec<String> = Vec::new();
        let mut reported: Vec<String> = Vec::new();
        for value in &data.values {
            let folded = value.value.trim().to_lowercase();
            if seen.contains(&folded) {
                if !reported.contains(&folded) {
                    report.error(ValidationIssue::DuplicateValue {
                        value: value.value.trim().to_string(),
                    });
                    reported.push(folded);
                }
            } else {
                seen.push(folded);
            }
        }

        // 5. Mode membership, with the auto-fixable suggestion when a
        // case-insensitive hit exists.
        let mode_label = data.mode.trim();
        let exact = data.values.iter().any(|v| v.value.trim() == mode_label);
        if !exact {
            let suggestion = data.find_value(mode_label).map(|v| v.value.clone());
            report.error(ValidationIssue::ModeMismatch {
                mode: data.mode.clone(),
                suggestion,
            });
        }

        // 6. Percentage validity.
        for value in &data.values {
            if value.percentage > 100 {
                report.error(ValidationIssue::PercentageOutOfRange {
                    value: value.value.clone(),
                    percentage: value.percentage,
                });
            }
        }
        let tolerance = match mode {
            ValidationMode::Strict => self.config.strict_percentage_tolerance,
            ValidationMode::Lenient => self.config.lenient_percentage_tolerance,
        };
        let sum = data.percentage_sum() as f64;
        if (sum - 100.0).abs() > tolerance {
            report.error(ValidationIssue::PercentageSum { sum });
        }

        // 7. Count consistency, when counts were supplied at all.
        if data.counts_present() {
            let actual = data.count_sum();
            if (actual as f64 - data.total_reports as f64).abs() > self.config.count_tolerance {
                report.error(ValidationIssue::CountMismatch {
                    declared: data.total_reports,
                    actual,
                });
            }
        }

        // 8. Source vocabulary membership.
        for value in &data.values {
            if SourceTag::parse(&value.source).is_none() {
                report.error(ValidationIssue::InvalidSource {
                    value: value.value.clone(),
                    source: value.source.clone(),
                });
            }
        }

        // 9. Mechanistic patterns. Severity depends on the call site.
        for finding in self.detector.analyze(&data.values) {
            let issue = ValidationIssue::MechanisticPattern {
                pattern: finding.pattern.to_string(),
                detail: finding.detail,
            };
            match mode {
                ValidationMode::Strict => report.error(issue),
                ValidationMode::Lenient => report.warn(issue),
            }
        }

        // 10. Diversity quality, warning only.
        if data.values.len() < self.config.min_recommended_options {
            report.warn(ValidationIssue::LowDiversity {
                options: data.values.len(),
            });
        }
        for value in &data.values {
            if value.percentage > self.config.dominance_warning_percentage {
                report.warn(ValidationIssue::DominantOption {
                    value: value.value.clone(),
                    percentage: value.percentage,
                });
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle::DistributionValue;
    use taxonomy::CatalogKey;

    fn bucket(value: &str, count: u32, percentage: u32, source: &str) -> DistributionValue {
        DistributionValue {
            value: value.to_string(),
            count,
            percentage,
            source: source.to_string(),
        }
    }

    fn validator(registry: &CategoryRegistry) -> DistributionValidator<'_> {
        DistributionValidator::new(registry, DistillConfig::default())
    }

    #[test]
    fn test_out_of_vocabulary_value() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "sometimes",
            vec![
                bucket("sometimes", 0, 40, "studies"),
                bucket("Once daily", 0, 35, "studies"),
                bucket("Weekly", 0, 15, "studies"),
                bucket("As needed", 0, 10, "studies"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::Frequency, Category::Medications);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::InvalidValue {
                catalog: CatalogKey::FrequencyStandard,
                value,
                ..
            } if value == "sometimes"
        )));
    }

    #[test]
    fn test_case_mismatch_is_distinct_and_suggests_fix() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "weekly",
            vec![
                bucket("weekly", 0, 60, "studies"),
                bucket("Monthly", 0, 25, "studies"),
                bucket("Daily", 0, 10, "studies"),
                bucket("As needed", 0, 5, "studies"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::MeetingFrequency, Category::SupportGroups);
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::CaseMismatch { value, expected }
                if value == "weekly" && expected == "Weekly"
        )));
        // Not double-reported as a generic invalid value.
        assert!(!report
            .errors
            .iter()
            .any(|issue| matches!(issue, ValidationIssue::InvalidValue { .. })));
    }

    #[test]
    fn test_equal_split_rejected() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "Weekly",
            vec![
                bucket("Weekly", 0, 25, "studies"),
                bucket("Monthly", 0, 25, "studies"),
                bucket("Daily", 0, 25, "studies"),
                bucket("As needed", 0, 25, "studies"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::MeetingFrequency, Category::SupportGroups);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::MechanisticPattern { pattern, .. } if pattern == "quarter_split"
        )));
    }

    #[test]
    fn test_mechanistic_downgrades_to_warning_when_lenient() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "Weekly",
            vec![
                bucket("Weekly", 0, 25, "studies"),
                bucket("Monthly", 0, 25, "studies"),
                bucket("Daily", 0, 25, "studies"),
                bucket("As needed", 0, 25, "studies"),
            ],
            "ai_training_data",
        );

        let report =
            v.validate_lenient(&data, FieldName::MeetingFrequency, Category::SupportGroups);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|issue| matches!(
            issue,
            ValidationIssue::MechanisticPattern { .. }
        )));
    }

    #[test]
    fn test_percentage_sum_and_counts() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let mut data = DistributionData::new(
            "Weekly",
            vec![
                bucket("Weekly", 60, 70, "studies"),
                bucket("Monthly", 30, 20, "research"),
            ],
            "ai_training_data",
        );
        data.total_reports = 100; // counts actually sum to 90

        let report = v.validate(&data, FieldName::MeetingFrequency, Category::SupportGroups);
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::PercentageSum { sum } if *sum == 90.0
        )));
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::CountMismatch { declared: 100, actual: 90 }
        )));
    }

    #[test]
    fn test_duplicates_mode_and_sources() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "monthly",
            vec![
                bucket("Weekly", 0, 50, "studies"),
                bucket("weekly ", 0, 30, "made_up_source"),
                bucket("Monthly", 0, 20, "research"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::MeetingFrequency, Category::SupportGroups);

        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::DuplicateValue { value } if value == "weekly"
        )));
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::ModeMismatch { suggestion: Some(s), .. } if s == "Monthly"
        )));
        assert!(report.errors.iter().any(|issue| matches!(
            issue,
            ValidationIssue::InvalidSource { source, .. } if source == "made_up_source"
        )));
    }

    #[test]
    fn test_optional_field_is_warning_not_error() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        // access_time is optional for support groups.
        let data = DistributionData::new(
            "Immediately",
            vec![
                bucket("Immediately", 0, 40, "studies"),
                bucket("Within 24 hours", 0, 32, "studies"),
                bucket("1-3 days", 0, 18, "studies"),
                bucket("4-7 days", 0, 10, "studies"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::AccessTime, Category::SupportGroups);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|issue| matches!(
            issue,
            ValidationIssue::FieldNotRequired { .. }
        )));
    }

    #[test]
    fn test_empty_and_raw_inputs() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let empty = DistributionData::new("", vec![], "ai_training_data");
        let report = v.validate(&empty, FieldName::Frequency, Category::Medications);
        assert_eq!(report.errors, vec![ValidationIssue::MissingValues]);

        let report = v.validate_raw(
            &serde_json::Value::Null,
            FieldName::Frequency,
            Category::Medications,
        );
        assert_eq!(report.errors, vec![ValidationIssue::NotADistribution]);

        let report = v.validate_raw(
            &serde_json::json!({"values": "not-an-array"}),
            FieldName::Frequency,
            Category::Medications,
        );
        assert_eq!(report.errors, vec![ValidationIssue::NotADistribution]);
    }

    #[test]
    fn test_clean_distribution_passes() {
        let registry = CategoryRegistry::new().unwrap();
        let v = validator(&registry);

        let data = DistributionData::new(
            "Weekly",
            vec![
                bucket("Weekly", 45, 45, "studies"),
                bucket("Monthly", 27, 27, "research"),
                bucket("Daily", 18, 18, "user_experiences"),
                bucket("As needed", 10, 10, "community_feedback"),
            ],
            "ai_training_data",
        );

        let report = v.validate(&data, FieldName::MeetingFrequency, Category::SupportGroups);
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }
}
