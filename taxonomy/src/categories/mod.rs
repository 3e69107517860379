//! Per-category field configuration.
//!
//! Each category provides its required fields, direct dropdown mappings,
//! and prompt-context tags. Providers are grouped by survey form.

pub mod community;
pub mod dosage;
pub mod financial;
pub mod lifestyle;

pub use community::{CrisisResourcesCategory, SupportGroupsCategory, TherapyServicesCategory};
pub use dosage::{MedicationsCategory, SkincareCategory, SupplementsCategory};
pub use financial::{AppsSoftwareCategory, FinancialProductsCategory};
pub use lifestyle::{BooksMediaCategory, LifestyleChangesCategory, MedicalProceduresCategory};

use crate::types::{Category, CategoryConfig};

/// Trait for category-specific field configuration.
pub trait CategoryProvider: Send + Sync {
    /// Get the category this provider handles
    fn category(&self) -> Category;

    /// Get the static field configuration for this category
    fn config(&self) -> CategoryConfig;
}

/// All built-in providers, in [`Category::all`] order.
pub fn all_providers() -> Vec<Box<dyn CategoryProvider>> {
    vec![
        Box::new(MedicationsCategory),
        Box::new(SupplementsCategory),
        Box::new(SkincareCategory),
        Box::new(SupportGroupsCategory),
        Box::new(TherapyServicesCategory),
        Box::new(CrisisResourcesCategory),
        Box::new(FinancialProductsCategory),
        Box::new(AppsSoftwareCategory),
        Box::new(LifestyleChangesCategory),
        Box::new(BooksMediaCategory),
        Box::new(MedicalProceduresCategory),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_provider() {
        let provided: Vec<Category> = all_providers().iter().map(|p| p.category()).collect();
        for category in Category::all() {
            assert!(provided.contains(category), "no provider for {category}");
        }
    }

    #[test]
    fn test_provider_config_matches_category() {
        for provider in all_providers() {
            assert_eq!(provider.category(), provider.config().category);
        }
    }
}
