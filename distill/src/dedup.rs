//! Distribution deduplication.
//!
//! Generated distributions routinely contain semantically-duplicate
//! buckets ("once daily" vs "Once Daily" vs "1x daily"). This module
//! merges equivalence groups, picks the canonical spelling and the
//! best-quality source attribution, and rebalances percentages so the
//! result satisfies the sum-to-100 invariant again.
//!
//! Deduplication never fails for well-formed input; a distribution with
//! zero or one values passes through unchanged.

use tracing::debug;

use oracle::{DistributionData, DistributionValue, SourceTag};

/// Canonical phrasings preferred when an equivalence group offers a
/// choice of spellings.
const STANDARD_TERMS: &[&str] = &[
    "Once daily",
    "Twice daily",
    "Three times daily",
    "Multiple times daily",
    "Every other day",
    "As needed",
    "Daily",
    "Weekly",
    "Monthly",
    "Free",
    "Online",
    "In-person",
];

/// Merges semantically-duplicate buckets in a distribution.
///
/// The synonym sets are a hand-curated seed list, not an exhaustive
/// thesaurus; sets can be extended per instance with
/// [`Deduplicator::add_synonym_set`].
pub struct Deduplicator {
    synonym_sets: Vec<Vec<String>>,
}

impl Deduplicator {
    /// Create a deduplicator with the default synonym sets.
    pub fn new() -> Self {
        Self {
            synonym_sets: Self::default_synonym_sets(),
        }
    }

    /// Get the default synonym seed list.
    fn default_synonym_sets() -> Vec<Vec<String>> {
        let seeds: &[&[&str]] = &[
            &["once daily", "daily", "1x daily", "once per day", "one time daily"],
            &["twice daily", "2x daily", "two times daily", "twice per day"],
            &["three times daily", "3x daily", "three times per day", "thrice daily"],
            &["as needed", "when needed", "prn", "on demand"],
            &["weekly", "once weekly", "once a week", "every week", "1x weekly"],
            &["monthly", "once monthly", "once a month", "every month"],
            &["every other day", "alternate days", "every two days"],
            &["free", "no cost", "$0"],
            &["online", "virtual", "remote"],
            &["in-person", "in person", "face to face", "face-to-face"],
        ];
        seeds
            .iter()
            .map(|set| set.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    /// Add a custom synonym set.
    pub fn add_synonym_set(&mut self, terms: impl IntoIterator<Item = impl Into<String>>) {
        self.synonym_sets
            .push(terms.into_iter().map(Into::into).collect());
    }

    /// Index of the synonym set containing a value, if any.
    fn synonym_set_of(&self, value: &str) -> Option<usize> {
        let needle = value.trim();
        self.synonym_sets
            .iter()
            .position(|set| set.iter().any(|term| term.eq_ignore_ascii_case(needle)))
    }

    /// Two values are equivalent on exact match, case-insensitive match,
    /// or shared synonym-set membership.
    fn equivalent(&self, a: &str, b: &str) -> bool {
        let (a, b) = (a.trim(), b.trim());
        if a.eq_ignore_ascii_case(b) {
            return true;
        }
        match (self.synonym_set_of(a), self.synonym_set_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Merge duplicate buckets and restore the distribution invariants.
    pub fn deduplicate(&self, data: &DistributionData) -> DistributionData {
        if data.values.len() <= 1 {
            return data.clone();
        }

        // Partition into equivalence groups, preserving first-seen order.
        let mut groups: Vec<Vec<DistributionValue>> = Vec::new();
        'values: for value in &data.values {
            for group in groups.iter_mut() {
                if group
                    .iter()
                    .any(|member| self.equivalent(&member.value, &value.value))
                {
                    group.push(value.clone());
                    continue 'values;
                }
            }
            groups.push(vec![value.clone()]);
        }

        // Merge each group: summed count and percentage, canonical label,
        // best-quality source.
        let mut merged: Vec<DistributionValue> = Vec::with_capacity(groups.len());
        let mut group_labels: Vec<Vec<String>> = Vec::with_capacity(groups.len());
        for group in &groups {
            let canonical = Self::canonical_label(group);
            if group.len() > 1 {
                debug!(
                    canonical = %canonical,
                    members = group.len(),
                    "merged equivalent buckets"
                );
            }
            group_labels.push(group.iter().map(|v| v.value.clone()).collect());
            merged.push(DistributionValue {
                value: canonical,
                count: group.iter().map(|v| v.count).sum(),
                percentage: group.iter().map(|v| v.percentage).sum(),
                source: Self::best_source(group),
            });
        }

        Self::rescale(&mut merged);

        // Remap the mode to the canonical label of whichever group held
        // it, before sorting reorders the buckets.
        let remapped_mode = self.remap_mode(&data.mode, &group_labels, &merged);

        merged.sort_by(|a, b| b.percentage.cmp(&a.percentage));

        let mode = remapped_mode.unwrap_or_else(|| merged[0].value.clone());

        DistributionData {
            mode,
            values: merged,
            ..data.clone()
        }
    }

    /// Pick the canonical spelling for a group: proper case beats
    /// lowercase, standard terminology beats ad-hoc phrasing, first
    /// occurrence breaks ties.
    fn canonical_label(group: &[DistributionValue]) -> String {
        fn rank(label: &str) -> u8 {
            let trimmed = label.trim();
            let proper = trimmed
                .chars()
                .find(|c| c.is_alphabetic())
                .map(|c| c.is_uppercase())
                .unwrap_or(false);
            let standard = STANDARD_TERMS
                .iter()
                .any(|term| term.eq_ignore_ascii_case(trimmed));
            (proper as u8) * 2 + standard as u8
        }

        let mut best = &group[0];
        for member in &group[1..] {
            if rank(&member.value) > rank(&best.value) {
                best = member;
            }
        }
        best.value.trim().to_string()
    }

    /// Pick the highest-quality source attribution; ties keep the first.
    fn best_source(group: &[DistributionValue]) -> String {
        fn rank(source: &str) -> u8 {
            SourceTag::parse(source)
                .map(|tag| tag.quality_rank())
                .unwrap_or(0)
        }

        let mut best = &group[0];
        for member in &group[1..] {
            if rank(&member.source) > rank(&best.source) {
                best = member;
            }
        }
        best.source.clone()
    }

    /// Force percentages to sum to exactly 100.
    fn rescale(values: &mut [DistributionValue]) {
        let total: u32 = values.iter().map(|v| v.percentage).sum();
        if total == 100 {
            return;
        }

        if total == 0 {
            // Even split; the remainder goes to the first buckets in order.
            let n = values.len() as u32;
            let base = 100 / n;
            let remainder = (100 % n) as usize;
            for (i, value) in values.iter_mut().enumerate() {
                value.percentage = base + u32::from(i < remainder);
            }
            return;
        }

        for value in values.iter_mut() {
            value.percentage =
                ((value.percentage as f64) * 100.0 / (total as f64)).round() as u32;
        }

        // Rounding drift lands on the single largest bucket.
        let sum: i64 = values.iter().map(|v| v.percentage as i64).sum();
        let residual = 100 - sum;
        if residual != 0 {
            let mut largest = 0;
            for (i, value) in values.iter().enumerate() {
                if value.percentage > values[largest].percentage {
                    largest = i;
                }
            }
            let adjusted = values[largest].percentage as i64 + residual;
            values[largest].percentage = adjusted.max(0) as u32;
        }
    }

    /// Find the merged bucket whose group contained the old mode.
    fn remap_mode(
        &self,
        old_mode: &str,
        group_labels: &[Vec<String>],
        merged: &[DistributionValue],
    ) -> Option<String> {
        if old_mode.trim().is_empty() {
            return None;
        }
        for (labels, bucket) in group_labels.iter().zip(merged) {
            if labels.iter().any(|label| self.equivalent(label, old_mode)) {
                return Some(bucket.value.clone());
            }
        }
        debug!(mode = %old_mode, "mode matched no bucket group, falling back to top bucket");
        None
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(value: &str, percentage: u32, source: &str) -> DistributionValue {
        DistributionValue {
            value: value.to_string(),
            count: 0,
            percentage,
            source: source.to_string(),
        }
    }

    fn distribution(mode: &str, values: Vec<DistributionValue>) -> DistributionData {
        DistributionData::new(mode, values, "ai_training_data")
    }

    #[test]
    fn test_equivalence_class_merge() {
        let dedup = Deduplicator::new();
        let data = distribution(
            "once daily",
            vec![
                bucket("once daily", 30, "user_experiences"),
                bucket("Once Daily", 20, "studies"),
                bucket("1x daily", 10, "community_feedback"),
                bucket("As needed", 40, "research"),
            ],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.values.len(), 2);

        let merged = result.find_value("once daily").unwrap();
        assert_eq!(merged.value, "Once Daily");
        assert_eq!(merged.percentage, 60);
        // studies outranks user_experiences and community_feedback
        assert_eq!(merged.source, "studies");

        // Mode followed its group to the canonical spelling.
        assert_eq!(result.mode, "Once Daily");
    }

    #[test]
    fn test_idempotence() {
        let dedup = Deduplicator::new();
        let data = distribution(
            "Weekly",
            vec![
                bucket("weekly", 45, "user_experiences"),
                bucket("Weekly", 30, "studies"),
                bucket("Monthly", 25, "research"),
            ],
        );

        let once = dedup.deduplicate(&data);
        let twice = dedup.deduplicate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rescale_from_overflowing_sum() {
        let dedup = Deduplicator::new();
        let data = distribution(
            "A",
            vec![bucket("A", 80, "studies"), bucket("B", 60, "studies")],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.percentage_sum(), 100);
        // 80/140 and 60/140, rounded
        assert_eq!(result.values[0].percentage, 57);
        assert_eq!(result.values[1].percentage, 43);
    }

    #[test]
    fn test_all_zero_percentages_split_evenly() {
        let dedup = Deduplicator::new();
        let data = distribution(
            "A",
            vec![
                bucket("A", 0, "studies"),
                bucket("B", 0, "studies"),
                bucket("C", 0, "studies"),
            ],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.percentage_sum(), 100);
        let percentages: Vec<u32> = result.values.iter().map(|v| v.percentage).collect();
        assert_eq!(percentages, vec![34, 33, 33]);
    }

    #[test]
    fn test_rounding_residual_lands_on_largest_bucket() {
        let dedup = Deduplicator::new();
        // 1/3 each rounds to 33+33+33 = 99; the largest (first) absorbs +1.
        let data = distribution(
            "A",
            vec![
                bucket("A", 1, "studies"),
                bucket("B", 1, "studies"),
                bucket("C", 1, "studies"),
            ],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.percentage_sum(), 100);
    }

    #[test]
    fn test_small_distributions_pass_through() {
        let dedup = Deduplicator::new();

        let single = distribution("A", vec![bucket("A", 40, "studies")]);
        assert_eq!(dedup.deduplicate(&single), single);

        let empty = distribution("", vec![]);
        assert_eq!(dedup.deduplicate(&empty), empty);
    }

    #[test]
    fn test_sorted_descending_and_mode_remapped() {
        let dedup = Deduplicator::new();
        let data = distribution(
            "Weekly",
            vec![
                bucket("weekly", 45, "user_experiences"),
                bucket("Weekly", 30, "studies"),
                bucket("Monthly", 25, "research"),
            ],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.values.len(), 2);
        assert_eq!(result.values[0].value, "Weekly");
        assert_eq!(result.values[0].percentage, 75);
        assert_eq!(result.values[1].value, "Monthly");
        assert_eq!(result.values[1].percentage, 25);
        assert_eq!(result.mode, "Weekly");
    }

    #[test]
    fn test_custom_synonym_set() {
        let mut dedup = Deduplicator::new();
        dedup.add_synonym_set(["text line", "sms line"]);

        let data = distribution(
            "Text line",
            vec![
                bucket("Text line", 60, "studies"),
                bucket("SMS line", 40, "user_experiences"),
            ],
        );

        let result = dedup.deduplicate(&data);
        assert_eq!(result.values.len(), 1);
        assert_eq!(result.values[0].percentage, 100);
    }
}
