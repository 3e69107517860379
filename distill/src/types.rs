//! Findings model for the distill pipeline.
//!
//! Every check itemizes its findings and collection never short-circuits:
//! batch regeneration tooling needs the full picture to decide what to
//! fix, and the form layer renders the per-field error list directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use taxonomy::{CatalogKey, Category, FieldName};

/// A single validation finding.
///
/// Errors and warnings share this type; severity is decided by which list
/// of a [`ValidationReport`] a finding lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Distribution has no values at all
    #[error("distribution has no values")]
    MissingValues,

    /// Input was missing or not structurally a distribution
    #[error("missing or non-object distribution data")]
    NotADistribution,

    /// Field is not in the category's required set
    #[error("field '{field}' is not required for category '{category}'")]
    FieldNotRequired { field: FieldName, category: Category },

    /// Value is not a member of its resolved catalog
    #[error("invalid value '{value}' for field '{field}' (catalog '{catalog}')")]
    InvalidValue {
        field: FieldName,
        value: String,
        catalog: CatalogKey,
    },

    /// Value matches a catalog entry except for casing; mechanically
    /// auto-fixable, so reported distinctly from [`Self::InvalidValue`]
    #[error("case mismatch: '{value}' should be '{expected}'")]
    CaseMismatch { value: String, expected: String },

    /// Two values are equal under trim + case-insensitive comparison
    #[error("duplicate value '{value}'")]
    DuplicateValue { value: String },

    /// Mode does not name any bucket; suggestion carries the
    /// case-insensitive hit when one exists
    #[error("mode '{mode}' does not match any value")]
    ModeMismatch {
        mode: String,
        suggestion: Option<String>,
    },

    /// A bucket percentage is outside 0-100
    #[error("percentage {percentage} out of range on '{value}'")]
    PercentageOutOfRange { value: String, percentage: u32 },

    /// Percentages do not sum to 100 within the tolerance in effect
    #[error("percentages sum to {sum}, expected 100")]
    PercentageSum { sum: f64 },

    /// Bucket counts disagree with the declared total
    #[error("counts sum to {actual}, declared total is {declared}")]
    CountMismatch { declared: u32, actual: u32 },

    /// Source tag is not in the vocabulary
    #[error("unknown source '{source}' on value '{value}'")]
    InvalidSource { value: String, r#source: String },

    /// Distribution looks synthesized mechanically rather than drawn from
    /// a genuine population
    #[error("mechanistic pattern '{pattern}': {detail}")]
    MechanisticPattern { pattern: String, detail: String },

    /// Fewer distinct options than a genuine aggregate would show
    #[error("only {options} distinct options")]
    LowDiversity { options: usize },

    /// One bucket dominates the distribution
    #[error("option '{value}' holds {percentage}% of reports")]
    DominantOption { value: String, percentage: u32 },

    /// A required field is absent or empty in a submission
    #[error("missing required field '{field}'")]
    MissingRequiredField { field: FieldName },

    /// Submitted category string is not registered
    #[error("unknown category: {category}")]
    UnknownCategory { category: String },
}

/// Result of a validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no errors were collected (warnings allowed)
    pub is_valid: bool,
    /// Findings that make the data unusable as-is
    pub errors: Vec<ValidationIssue>,
    /// Quality findings that do not block persistence
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty, valid report.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a report holding exactly one error.
    pub fn single_error(issue: ValidationIssue) -> Self {
        let mut report = Self::new();
        report.error(issue);
        report
    }

    /// Record an error.
    pub fn error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
        self.is_valid = false;
    }

    /// Record a warning.
    pub fn warn(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Fold another report's findings into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.warnings.extend(other.warnings);
        for issue in other.errors {
            self.error(issue);
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A submitted field value, as the form layer hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value
    Text(String),
    /// Ordered list of strings (array-typed fields like challenges)
    List(Vec<String>),
    /// Anything else; passes through normalization unchanged
    Other(serde_json::Value),
}

impl FieldValue {
    /// Convert loose submission JSON into a field value.
    pub fn from_json(value: serde_json::Value) -> FieldValue {
        match value {
            serde_json::Value::String(s) => FieldValue::Text(s),
            serde_json::Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in &items {
                    match item.as_str() {
                        Some(s) => entries.push(s.to_string()),
                        // Mixed-type arrays stay opaque.
                        None => return FieldValue::Other(serde_json::Value::Array(items)),
                    }
                }
                FieldValue::List(entries)
            }
            other => FieldValue::Other(other),
        }
    }

    /// Whether the value counts as present for required-field checks.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Other(v) => v.is_null(),
        }
    }
}

/// Result of normalizing one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeReport {
    /// True when no errors were collected
    pub is_valid: bool,
    /// Per-field findings, accumulated rather than short-circuited
    pub errors: Vec<ValidationIssue>,
    /// Whatever could be normalized, keyed by submitted field name
    pub normalized: BTreeMap<String, FieldValue>,
}

impl IntakeReport {
    /// Create an empty, valid report.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            normalized: BTreeMap::new(),
        }
    }

    /// Record an error.
    pub fn error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
        self.is_valid = false;
    }
}

impl Default for IntakeReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_tracks_validity() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid);

        report.warn(ValidationIssue::LowDiversity { options: 2 });
        assert!(report.is_valid);

        report.error(ValidationIssue::MissingValues);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_merge_carries_errors() {
        let mut a = ValidationReport::new();
        let mut b = ValidationReport::new();
        b.error(ValidationIssue::PercentageSum { sum: 90.0 });

        a.merge(b);
        assert!(!a.is_valid);
    }

    #[test]
    fn test_field_value_from_json() {
        assert_eq!(
            FieldValue::from_json(serde_json::json!("Weekly")),
            FieldValue::Text("Weekly".to_string())
        );
        assert_eq!(
            FieldValue::from_json(serde_json::json!(["None"])),
            FieldValue::List(vec!["None".to_string()])
        );
        assert!(matches!(
            FieldValue::from_json(serde_json::json!(42)),
            FieldValue::Other(_)
        ));
    }

    #[test]
    fn test_field_value_emptiness() {
        assert!(FieldValue::Text("   ".to_string()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Text("Weekly".to_string()).is_empty());
    }
}
