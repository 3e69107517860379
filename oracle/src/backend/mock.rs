//! Mock oracle for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::traits::{DistributionOracle, OracleError};
use crate::distribution::{RawDistribution, RawValue};
use crate::request::GenerationRequest;

/// Mock oracle with a canned response.
///
/// Configurable availability and response for unit tests.
pub struct MockOracle {
    oracle_id: String,
    available: AtomicBool,
    response: RawDistribution,
    call_count: AtomicU32,
}

impl MockOracle {
    /// Create a new mock oracle.
    pub fn new(oracle_id: impl Into<String>) -> Self {
        Self {
            oracle_id: oracle_id.into(),
            available: AtomicBool::new(true),
            response: RawDistribution {
                mode: Some("Weekly".to_string()),
                values: vec![RawValue {
                    value: "Weekly".to_string(),
                    count: Some(100.0),
                    percentage: Some(100.0),
                    source: Some("user_experiences".to_string()),
                }],
                total_reports: Some(100.0),
                data_source: Some("mock".to_string()),
            },
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the canned response.
    pub fn with_response(mut self, response: RawDistribution) -> Self {
        self.response = response;
        self
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Get the number of times generate was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count.
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new("mock-oracle")
    }
}

#[async_trait]
impl DistributionOracle for MockOracle {
    fn id(&self) -> &str {
        &self.oracle_id
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<RawDistribution, OracleError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if !self.available.load(Ordering::SeqCst) {
            return Err(OracleError::Unavailable("Mock oracle disabled".to_string()));
        }

        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxonomy::{Category, FieldName};

    #[tokio::test]
    async fn test_mock_oracle() {
        let oracle = MockOracle::new("test-oracle");

        assert!(oracle.is_available().await);
        assert_eq!(oracle.call_count(), 0);

        let request =
            GenerationRequest::new(Category::SupportGroups, FieldName::MeetingFrequency, "NAMI");
        let response = oracle.generate(&request).await.unwrap();

        assert_eq!(response.mode.as_deref(), Some("Weekly"));
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_unavailable() {
        let oracle = MockOracle::new("test-oracle").with_available(false);

        assert!(!oracle.is_available().await);

        let request =
            GenerationRequest::new(Category::Medications, FieldName::Frequency, "sertraline");
        let result = oracle.generate(&request).await;
        assert!(matches!(result, Err(OracleError::Unavailable(_))));
    }
}
