//! Dosage-form categories: medications, supplements, skincare.
//!
//! These categories share the dose/frequency-centric field set. Dosage
//! amounts stay free text; frequency, cost, and challenges resolve through
//! the category-aware special cases.

use crate::categories::CategoryProvider;
use crate::types::{CatalogKey, Category, CategoryConfig, FieldName};

/// Provider for the medications category.
pub struct MedicationsCategory;

impl CategoryProvider for MedicationsCategory {
    fn category(&self) -> Category {
        Category::Medications
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::Medications,
            required_fields: &[
                FieldName::Dosage,
                FieldName::Frequency,
                FieldName::TimeToResults,
                FieldName::SideEffects,
                FieldName::Cost,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::SideEffects, CatalogKey::SideEffects),
            ],
            context_sources: &[
                "clinical trial registries",
                "prescribing information",
                "patient experience forums",
            ],
        }
    }
}

/// Provider for the supplements category.
pub struct SupplementsCategory;

impl CategoryProvider for SupplementsCategory {
    fn category(&self) -> Category {
        Category::Supplements
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::Supplements,
            required_fields: &[
                FieldName::Dosage,
                FieldName::Frequency,
                FieldName::TimeToResults,
                FieldName::SideEffects,
                FieldName::Cost,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::SideEffects, CatalogKey::SideEffects),
            ],
            context_sources: &[
                "supplement research databases",
                "consumer lab reports",
                "wellness community forums",
            ],
        }
    }
}

/// Provider for the skincare category.
///
/// Skincare uses its own frequency vocabulary (morning/night routines).
pub struct SkincareCategory;

impl CategoryProvider for SkincareCategory {
    fn category(&self) -> Category {
        Category::Skincare
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::Skincare,
            required_fields: &[
                FieldName::Frequency,
                FieldName::TimeToResults,
                FieldName::SideEffects,
                FieldName::Cost,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::SideEffects, CatalogKey::SideEffects),
            ],
            context_sources: &[
                "dermatology literature",
                "skincare review communities",
                "product ingredient databases",
            ],
        }
    }
}
