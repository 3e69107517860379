//! Configuration for the distill pipeline.

use serde::{Deserialize, Serialize};

/// Tolerances and quality thresholds for validation and regeneration.
///
/// Two percentage tolerances exist on purpose: the strict one gates
/// persistence, the lenient one is the lighter-weight check applied to raw
/// candidates at normalization time. Existing stored data may only satisfy
/// the looser bound, so the two are kept at their respective call sites
/// rather than unified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistillConfig {
    /// Allowed deviation from a 100 percentage sum pre-persistence
    pub strict_percentage_tolerance: f64,
    /// Allowed deviation from a 100 percentage sum at normalization time
    pub lenient_percentage_tolerance: f64,
    /// Allowed deviation between summed counts and the declared total
    pub count_tolerance: f64,
    /// Distributions with fewer options than this draw a diversity warning
    /// and trigger regeneration
    pub min_recommended_options: usize,
    /// A single bucket above this percentage draws a dominance warning
    pub dominance_warning_percentage: u32,
}

impl Default for DistillConfig {
    fn default() -> Self {
        Self {
            strict_percentage_tolerance: 0.0,
            lenient_percentage_tolerance: 0.01,
            count_tolerance: 0.01,
            min_recommended_options: 4,
            dominance_warning_percentage: 80,
        }
    }
}

impl DistillConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DistillConfig::default();
        assert_eq!(config.strict_percentage_tolerance, 0.0);
        assert_eq!(config.lenient_percentage_tolerance, 0.01);
        assert_eq!(config.min_recommended_options, 4);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DistillConfig {
            dominance_warning_percentage: 75,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = DistillConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.dominance_warning_percentage, 75);
    }
}
