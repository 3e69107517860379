//! Lifestyle-form categories: lifestyle changes, books/media, medical
//! procedures.

use crate::categories::CategoryProvider;
use crate::types::{CatalogKey, Category, CategoryConfig, FieldName};

/// Provider for the lifestyle-changes category.
pub struct LifestyleChangesCategory;

impl CategoryProvider for LifestyleChangesCategory {
    fn category(&self) -> Category {
        Category::LifestyleChanges
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::LifestyleChanges,
            required_fields: &[
                FieldName::Frequency,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Cost, FieldName::SideEffects, FieldName::Notes],
            dropdowns: &[
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::SideEffects, CatalogKey::SideEffects),
            ],
            context_sources: &[
                "behavioral health studies",
                "habit formation research",
                "lifestyle community forums",
            ],
        }
    }
}

/// Provider for the books/media category.
pub struct BooksMediaCategory;

impl CategoryProvider for BooksMediaCategory {
    fn category(&self) -> Category {
        Category::BooksMedia
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::BooksMedia,
            required_fields: &[
                FieldName::Format,
                FieldName::Cost,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[(FieldName::TimeToResults, CatalogKey::TimeToResults)],
            context_sources: &["reader reviews", "bibliotherapy research"],
        }
    }
}

/// Provider for the medical-procedures category.
pub struct MedicalProceduresCategory;

impl CategoryProvider for MedicalProceduresCategory {
    fn category(&self) -> Category {
        Category::MedicalProcedures
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::MedicalProcedures,
            required_fields: &[
                FieldName::Format,
                FieldName::Cost,
                FieldName::TimeToResults,
                FieldName::SideEffects,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::SideEffects, CatalogKey::SideEffects),
            ],
            context_sources: &[
                "clinical outcome registries",
                "procedure cost databases",
                "patient recovery forums",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifestyle_minimal_required_set() {
        let config = LifestyleChangesCategory.config();
        assert_eq!(config.required_fields.len(), 3);
        assert!(config.optional_fields.contains(&FieldName::Cost));
    }

    #[test]
    fn test_procedures_track_side_effects() {
        let config = MedicalProceduresCategory.config();
        assert!(config.requires(FieldName::SideEffects));
    }
}
