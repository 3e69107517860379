//! Oracle backends.
//!
//! The trait abstracts over whatever model service produces candidate
//! distributions; only the mock ships here. Production transports live
//! with the batch tooling that owns rate limiting and checkpointing.

mod mock;
mod traits;

pub use mock::MockOracle;
pub use traits::{DistributionOracle, OracleError};
