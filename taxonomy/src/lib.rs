//! Survey taxonomy for the Wayfinder solution-rating platform.
//!
//! Every solution category has its own required-field set and its own
//! dropdown vocabulary for semantically-similar concepts ("cost" means
//! different things for a subscription app, a support group, and a
//! supplement). This crate centralizes that configuration so the rest of
//! the pipeline stays category-agnostic:
//!
//! - [`Category`], [`FieldName`], [`CatalogKey`]: the closed vocabulary
//! - [`CategoryRegistry`]: required fields, dropdown sources, context tags
//! - [`catalog`]: the canonical option lists
//! - [`resolve`]: precedence-based (category, field) → option-list
//!   resolution, including the cost-structure and second-field special
//!   cases
//! - [`catalog_fingerprint`]: SHA-256 stamp of the whole configuration
//!
//! All data is process-wide constant; nothing here mutates at runtime.
//!
//! # Example
//!
//! ```
//! use taxonomy::{resolve, Category, CategoryRegistry, FieldName};
//!
//! let registry = CategoryRegistry::new().expect("built-in config is audited");
//! let fields = registry.required_fields(Category::SupportGroups);
//! assert!(fields.contains(&FieldName::MeetingFrequency));
//!
//! let options = resolve::resolve(Category::SupportGroups, FieldName::MeetingFrequency);
//! assert!(options.unwrap().contains(&"Weekly"));
//! ```

pub mod catalog;
pub mod categories;
pub mod fingerprint;
pub mod registry;
pub mod resolve;
pub mod types;

// Re-export main types
pub use categories::CategoryProvider;
pub use fingerprint::catalog_fingerprint;
pub use registry::CategoryRegistry;
pub use resolve::{cost_structure, CostStructure};
pub use types::{CatalogKey, Category, CategoryConfig, FieldName, FormFamily, TaxonomyError};
