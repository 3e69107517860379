//! Core trait for distribution oracles.
//!
//! This is the seam to the external AI system. The pipeline never talks
//! to a model directly; it hands a [`GenerationRequest`] to an oracle and
//! gets back an untrusted [`RawDistribution`] candidate for validation.

use async_trait::async_trait;

use crate::distribution::RawDistribution;
use crate::request::GenerationRequest;

/// Error types for oracle operations.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Oracle is not available
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// Request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Rate limited by the backend
    #[error("Rate limited, retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    /// Response was not structurally a candidate distribution
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for distribution oracles.
///
/// Implementations wrap whatever model service produces candidate
/// distributions; tests use [`crate::backend::MockOracle`]. Callers own
/// retry and rate-limit policy — the core performs no retries.
#[async_trait]
pub trait DistributionOracle: Send + Sync {
    /// Get the oracle identifier (e.g. model name).
    fn id(&self) -> &str;

    /// Check if the oracle is currently available.
    async fn is_available(&self) -> bool;

    /// Generate a candidate distribution for a request.
    async fn generate(&self, request: &GenerationRequest)
        -> Result<RawDistribution, OracleError>;
}
