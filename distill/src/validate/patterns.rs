//! Mechanistic-pattern detection.
//!
//! A genuine population distribution is lumpy. Equal splits, the exact
//! 25×4 and 20×5 shapes, and clean arithmetic staircases indicate the
//! model synthesized numbers mechanically instead of estimating a real
//! spread — the core quality signal the validator exists to catch.

use tracing::debug;

use oracle::DistributionValue;

/// A matched mechanistic pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFinding {
    /// Pattern name
    pub pattern: &'static str,
    /// Human-readable description of the match
    pub detail: String,
}

/// Detector for mechanically-synthesized distributions.
pub struct MechanisticDetector;

impl MechanisticDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Analyze bucket percentages and return every matched pattern.
    pub fn analyze(&self, values: &[DistributionValue]) -> Vec<PatternFinding> {
        let percentages: Vec<u32> = values.iter().map(|v| v.percentage).collect();
        let mut findings = Vec::new();

        if let Some(finding) = self.equal_split(&percentages) {
            findings.push(finding);
        }
        if let Some(finding) = self.arithmetic_sequence(&percentages) {
            findings.push(finding);
        }

        for finding in &findings {
            debug!(pattern = finding.pattern, detail = %finding.detail, "mechanistic pattern matched");
        }

        findings
    }

    /// All percentages identical across more than two buckets; the exact
    /// 25×4 and 20×5 shapes get their specific names.
    fn equal_split(&self, percentages: &[u32]) -> Option<PatternFinding> {
        if percentages.len() <= 2 {
            return None;
        }
        let first = percentages[0];
        if first == 0 || !percentages.iter().all(|p| *p == first) {
            return None;
        }

        let (pattern, detail) = match (percentages.len(), first) {
            (4, 25) => ("quarter_split", "exact 25%/25%/25%/25% split".to_string()),
            (5, 20) => ("fifth_split", "exact 20%×5 split".to_string()),
            (n, p) => (
                "equal_split",
                format!("all {n} buckets hold exactly {p}%"),
            ),
        };
        Some(PatternFinding { pattern, detail })
    }

    /// Percentages form a constant-difference sequence across three or
    /// more buckets. Zero difference is the equal-split case and is not
    /// reported twice.
    fn arithmetic_sequence(&self, percentages: &[u32]) -> Option<PatternFinding> {
        if percentages.len() < 3 {
            return None;
        }
        let diff = percentages[0] as i64 - percentages[1] as i64;
        if diff == 0 {
            return None;
        }
        let constant = percentages
            .windows(2)
            .all(|pair| pair[0] as i64 - pair[1] as i64 == diff);
        if !constant {
            return None;
        }

        Some(PatternFinding {
            pattern: "arithmetic_sequence",
            detail: format!(
                "percentages {percentages:?} step by a constant {diff}"
            ),
        })
    }
}

impl Default for MechanisticDetector {
    fn default() -> Self {
        Self::new()
    }
}
