//! Distill — the validation and normalization pipeline for Wayfinder
//! aggregate distributions.
//!
//! The AI oracle produces candidate distributions that are close to, but
//! not guaranteed to satisfy, the catalog and quality invariants. This
//! crate takes candidates the rest of the way, and normalizes the
//! user-submitted side of the product with the same taxonomy:
//!
//! ```text
//! oracle candidate ──► map ──► dedup ──► validate ──► persist / regenerate
//!
//! form submission ──► normalize ──► persist
//! ```
//!
//! - [`Deduplicator`]: merges semantically-duplicate buckets and restores
//!   the sum-to-100 invariant
//! - [`DistributionValidator`]: the ordered check battery, including
//!   mechanistic-pattern detection
//! - [`ValueMapper`]: best-effort free text → catalog bucket coercion
//! - [`FieldNormalizer`]: user-submission normalization
//! - [`regen`]: the wholesale-regeneration policy
//! - [`DistillPipeline`]: candidate-to-validated orchestration
//!
//! Everything here is pure, synchronous, and stateless between calls; it
//! is safe to invoke concurrently without coordination.

pub mod config;
pub mod dedup;
pub mod intake;
pub mod mapper;
pub mod pipeline;
pub mod regen;
pub mod types;
pub mod validate;

// Re-export main types
pub use config::DistillConfig;
pub use dedup::Deduplicator;
pub use intake::{FieldNormalizer, NormalizeOptions};
pub use mapper::ValueMapper;
pub use pipeline::{DistillOutcome, DistillPipeline};
pub use regen::{needs_regeneration, regeneration_reason, RegenerationReason};
pub use types::{FieldValue, IntakeReport, ValidationIssue, ValidationReport};
pub use validate::{DistributionValidator, MechanisticDetector, PatternFinding, ValidationMode};
