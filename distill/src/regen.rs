//! Regeneration policy.
//!
//! Decides whether a persisted field value should be sent back to the
//! oracle. Regeneration is wholesale: a distribution that fails any
//! quality gate is replaced entirely, never patched bucket by bucket.

use serde::{Deserialize, Serialize};

use oracle::DistributionData;
use taxonomy::{Category, FieldName};

use crate::validate::DistributionValidator;

/// Why a value needs regeneration. The first matching reason wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegenerationReason {
    /// No value was ever generated (absent or null)
    NotGenerated,
    /// Value is still a raw string, never converted to distribution form
    RawString,
    /// Exactly one bucket holding 100%
    SingleBucket,
    /// Fewer buckets than a genuine aggregate would show
    TooFewOptions,
    /// Full strict validation failed
    FailedValidation,
    /// Carries a fallback or general-knowledge source tag
    LowQualitySource,
}

impl RegenerationReason {
    /// Get a short wire string for audit logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotGenerated => "not_generated",
            Self::RawString => "raw_string",
            Self::SingleBucket => "single_bucket",
            Self::TooFewOptions => "too_few_options",
            Self::FailedValidation => "failed_validation",
            Self::LowQualitySource => "low_quality_source",
        }
    }
}

/// Determine why a raw persisted value needs regeneration, if it does.
pub fn regeneration_reason(
    raw: &serde_json::Value,
    field: FieldName,
    category: Category,
    validator: &DistributionValidator<'_>,
) -> Option<RegenerationReason> {
    if raw.is_null() {
        return Some(RegenerationReason::NotGenerated);
    }
    if raw.is_string() {
        return Some(RegenerationReason::RawString);
    }

    let data: DistributionData = match serde_json::from_value(raw.clone()) {
        Ok(data) => data,
        // Structurally unusable: treat like it was never generated.
        Err(_) => return Some(RegenerationReason::NotGenerated),
    };

    if data.values.len() == 1 && data.values[0].percentage == 100 {
        return Some(RegenerationReason::SingleBucket);
    }
    if data.values.len() < validator.config().min_recommended_options {
        return Some(RegenerationReason::TooFewOptions);
    }
    if !validator.validate(&data, field, category).is_valid {
        return Some(RegenerationReason::FailedValidation);
    }
    if data
        .values
        .iter()
        .any(|v| v.source_tag().map(|t| t.is_low_quality()).unwrap_or(false))
    {
        return Some(RegenerationReason::LowQualitySource);
    }

    None
}

/// Whether a raw persisted value should be regenerated.
pub fn needs_regeneration(
    raw: &serde_json::Value,
    field: FieldName,
    category: Category,
    validator: &DistributionValidator<'_>,
) -> bool {
    regeneration_reason(raw, field, category, validator).is_some()
}
