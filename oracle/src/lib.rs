//! AI-oracle boundary for the Wayfinder solution-rating platform.
//!
//! The offline pipeline asks an external model for synthetic aggregate
//! statistics; this crate owns everything at that boundary:
//!
//! - [`RawDistribution`]: the lenient, untrusted candidate shape
//! - [`DistributionData`]: the strict, validated shape that gets persisted
//! - [`SourceTag`]: the closed source-quality vocabulary with its ranking
//! - [`GenerationRequest`]: what to generate, with resolved options and
//!   context tags
//! - [`DistributionOracle`]: the async seam to the model, with
//!   [`MockOracle`] for tests
//!
//! Prompt construction and model transport are deliberately absent — the
//! pipeline treats the oracle as an external system whose output requires
//! full validation.

pub mod backend;
pub mod distribution;
pub mod request;
pub mod types;

// Re-export main types
pub use backend::{DistributionOracle, MockOracle, OracleError};
pub use distribution::{DistributionData, DistributionValue, RawDistribution, RawValue};
pub use request::GenerationRequest;
pub use types::SourceTag;
