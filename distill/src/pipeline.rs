//! Pipeline orchestration: ingest → map → dedup → validate.
//!
//! Takes a raw oracle candidate the whole way to a validated, provenance-
//! stamped distribution plus the full findings report. Pure and
//! synchronous; the async oracle call happens outside, in whatever batch
//! tooling owns retries and rate limits.

use tracing::debug;

use oracle::{DistributionData, DistributionValue, RawDistribution};
use taxonomy::{catalog_fingerprint, Category, CategoryRegistry, FieldName};

use crate::config::DistillConfig;
use crate::dedup::Deduplicator;
use crate::mapper::ValueMapper;
use crate::types::{ValidationIssue, ValidationReport};
use crate::validate::DistributionValidator;

/// A distilled distribution plus everything the checks found.
#[derive(Debug, Clone)]
pub struct DistillOutcome {
    /// The distribution after mapping, dedup, and provenance stamping
    pub data: DistributionData,
    /// Collected findings; `is_valid` decides whether this persists or
    /// goes back to the oracle
    pub report: ValidationReport,
}

/// The full candidate-to-validated pipeline.
pub struct DistillPipeline<'a> {
    mapper: ValueMapper,
    deduplicator: Deduplicator,
    validator: DistributionValidator<'a>,
}

impl<'a> DistillPipeline<'a> {
    /// Create a pipeline over a registry with the given tolerances.
    pub fn new(registry: &'a CategoryRegistry, config: DistillConfig) -> Self {
        Self {
            mapper: ValueMapper::new(),
            deduplicator: Deduplicator::new(),
            validator: DistributionValidator::new(registry, config),
        }
    }

    /// The validator this pipeline gates with.
    pub fn validator(&self) -> &DistributionValidator<'a> {
        &self.validator
    }

    /// Run a raw candidate through mapping, deduplication, and strict
    /// validation.
    pub fn distill(
        &self,
        raw: &RawDistribution,
        field: FieldName,
        category: Category,
    ) -> DistillOutcome {
        let data_source = raw
            .data_source
            .clone()
            .unwrap_or_else(|| "unknown".to_string());

        if raw.values.is_empty() {
            return DistillOutcome {
                data: DistributionData::new("", vec![], data_source),
                report: ValidationReport::single_error(ValidationIssue::MissingValues),
            };
        }

        let mut report = ValidationReport::new();

        // Lighter-weight sanity check on the raw percentages; dedup will
        // rescale, so an off-100 candidate is a warning here, not a
        // rejection.
        let raw_sum = raw.percentage_sum();
        if (raw_sum - 100.0).abs() > self.validator.config().lenient_percentage_tolerance {
            debug!(
                field = %field,
                category = %category,
                sum = raw_sum,
                "raw candidate percentages off 100, rescaling during dedup"
            );
            report.warn(ValidationIssue::PercentageSum { sum: raw_sum });
        }

        // Coerce stray labels into the catalog vocabulary and integer
        // percentages. Missing attributions get the fallback tag, which
        // the regeneration policy treats as low quality.
        let values: Vec<DistributionValue> = raw
            .values
            .iter()
            .map(|value| DistributionValue {
                value: self.mapper.map_to_dropdown(category, field, &value.value),
                count: value.count.map(|c| c.round().max(0.0) as u32).unwrap_or(0),
                percentage: value
                    .percentage
                    .map(|p| p.round().max(0.0) as u32)
                    .unwrap_or(0),
                source: value
                    .source
                    .clone()
                    .unwrap_or_else(|| "fallback".to_string()),
            })
            .collect();

        let mode = raw
            .mode
            .as_deref()
            .map(|mode| self.mapper.map_to_dropdown(category, field, mode))
            .unwrap_or_default();

        let mut data = DistributionData::new(mode, values, data_source);
        if let Some(declared) = raw.total_reports {
            data.total_reports = declared.round().max(0.0) as u32;
        }

        let data = self.deduplicator.deduplicate(&data);

        report.merge(self.validator.validate(&data, field, category));

        DistillOutcome {
            data: data.with_provenance(catalog_fingerprint()),
            report,
        }
    }
}
