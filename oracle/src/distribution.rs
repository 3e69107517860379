//! Distribution wire types.
//!
//! [`RawDistribution`] is the lenient candidate shape coming back from the
//! oracle: untrusted JSON that is close to, but not guaranteed to equal,
//! the validated form. [`DistributionData`] is the strict shape the
//! pipeline produces and the persistence layer stores. Field names follow
//! the camelCase JSON the form layer and database already use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::OracleError;
use crate::types::SourceTag;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// One bucket in a validated distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DistributionValue {
    /// Canonical bucket label
    pub value: String,
    /// Synthetic report count backing this bucket
    #[serde(default)]
    pub count: u32,
    /// Integer percentage, 0-100
    pub percentage: u32,
    /// Source attribution wire string (membership is a validator check)
    pub source: String,
}

impl DistributionValue {
    /// Create a bucket with a typed source tag.
    pub fn new(value: impl Into<String>, percentage: u32, source: SourceTag) -> Self {
        Self {
            value: value.into(),
            count: 0,
            percentage,
            source: source.as_str().to_string(),
        }
    }

    /// Set the report count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Parse the source attribution, if it is in the vocabulary.
    pub fn source_tag(&self) -> Option<SourceTag> {
        SourceTag::parse(&self.source)
    }
}

/// A full generated field value: the aggregate distribution for one
/// (solution, field, goal-context) triple.
///
/// Produced once by the pipeline, persisted as an opaque JSON blob, and
/// regenerated wholesale when quality checks fail. There is no partial
/// update path for an individual bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DistributionData {
    /// The most common value; must match some bucket case-insensitively
    pub mode: String,
    /// Buckets, sorted descending by percentage after deduplication
    pub values: Vec<DistributionValue>,
    /// Declared total report count
    pub total_reports: u32,
    /// Where the aggregate came from (e.g. "ai_training_data")
    pub data_source: String,
    /// When the pipeline produced this aggregate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Fingerprint of the taxonomy this data was validated against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_fingerprint: Option<String>,
    /// Pipeline-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DistributionData {
    /// Create a distribution; `total_reports` is taken from the bucket
    /// counts.
    pub fn new(
        mode: impl Into<String>,
        values: Vec<DistributionValue>,
        data_source: impl Into<String>,
    ) -> Self {
        let total_reports = values.iter().map(|v| v.count).sum();
        Self {
            mode: mode.into(),
            values,
            total_reports,
            data_source: data_source.into(),
            generated_at: None,
            taxonomy_fingerprint: None,
            id: None,
        }
    }

    /// Stamp provenance: id, timestamp, and taxonomy fingerprint.
    pub fn with_provenance(mut self, taxonomy_fingerprint: impl Into<String>) -> Self {
        self.id = Some(uuid::Uuid::new_v4().to_string());
        self.generated_at = Some(Utc::now());
        self.taxonomy_fingerprint = Some(taxonomy_fingerprint.into());
        self
    }

    /// Sum of bucket percentages.
    pub fn percentage_sum(&self) -> u32 {
        self.values.iter().map(|v| v.percentage).sum()
    }

    /// Sum of bucket counts.
    pub fn count_sum(&self) -> u32 {
        self.values.iter().map(|v| v.count).sum()
    }

    /// Whether any bucket carries a report count.
    pub fn counts_present(&self) -> bool {
        self.values.iter().any(|v| v.count > 0)
    }

    /// Find a bucket by label, case-insensitively after trimming.
    pub fn find_value(&self, label: &str) -> Option<&DistributionValue> {
        let needle = label.trim();
        self.values
            .iter()
            .find(|v| v.value.trim().eq_ignore_ascii_case(needle))
    }
}

/// One bucket as the oracle returned it. Everything optional except the
/// label; numbers arrive as floats because the model emits them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RawValue {
    /// Bucket label as generated
    pub value: String,
    /// Report count, if the model supplied one
    #[serde(default)]
    pub count: Option<f64>,
    /// Percentage, if the model supplied one
    #[serde(default)]
    pub percentage: Option<f64>,
    /// Source attribution string as generated
    #[serde(default)]
    pub source: Option<String>,
}

/// A candidate distribution from the oracle, before mapping, dedup, and
/// validation. Treated as untrusted input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RawDistribution {
    /// Claimed mode, if any
    #[serde(default)]
    pub mode: Option<String>,
    /// Candidate buckets
    #[serde(default)]
    pub values: Vec<RawValue>,
    /// Claimed total report count
    #[serde(default)]
    pub total_reports: Option<f64>,
    /// Claimed provenance label
    #[serde(default)]
    pub data_source: Option<String>,
}

impl RawDistribution {
    /// Parse a candidate from arbitrary oracle JSON.
    ///
    /// Only structural mismatch fails; content problems are for the
    /// validator.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, OracleError> {
        serde_json::from_value(value.clone())
            .map_err(|e| OracleError::MalformedResponse(e.to_string()))
    }

    /// Sum of the supplied percentages (missing ones count as zero).
    pub fn percentage_sum(&self) -> f64 {
        self.values.iter().filter_map(|v| v.percentage).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_wire_shape() {
        let data = DistributionData::new(
            "Weekly",
            vec![
                DistributionValue::new("Weekly", 75, SourceTag::Studies).with_count(80),
                DistributionValue::new("Monthly", 25, SourceTag::Research).with_count(20),
            ],
            "ai_training_data",
        );

        assert_eq!(data.total_reports, 100);
        assert_eq!(data.percentage_sum(), 100);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["totalReports"], 100);
        assert_eq!(json["dataSource"], "ai_training_data");
        assert_eq!(json["values"][0]["percentage"], 75);
    }

    #[test]
    fn test_find_value_case_insensitive() {
        let data = DistributionData::new(
            "Weekly",
            vec![DistributionValue::new("Weekly", 100, SourceTag::Studies)],
            "ai_training_data",
        );
        assert!(data.find_value(" weekly ").is_some());
        assert!(data.find_value("daily").is_none());
    }

    #[test]
    fn test_raw_from_loose_json() {
        let json = serde_json::json!({
            "mode": "Weekly",
            "values": [
                { "value": "weekly", "count": 50.0, "percentage": 45.5, "source": "user_experiences" },
                { "value": "Monthly", "percentage": 54.5 }
            ],
            "totalReports": 50.0
        });

        let raw = RawDistribution::from_json(&json).unwrap();
        assert_eq!(raw.values.len(), 2);
        assert_eq!(raw.values[1].count, None);
        assert!((raw.percentage_sum() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_raw_rejects_non_object() {
        let err = RawDistribution::from_json(&serde_json::json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, OracleError::MalformedResponse(_)));
    }

    #[test]
    fn test_provenance_stamp() {
        let data = DistributionData::new(
            "Weekly",
            vec![DistributionValue::new("Weekly", 100, SourceTag::Studies)],
            "ai_training_data",
        )
        .with_provenance("abc123");

        assert!(data.id.is_some());
        assert!(data.generated_at.is_some());
        assert_eq!(data.taxonomy_fingerprint.as_deref(), Some("abc123"));
    }
}
