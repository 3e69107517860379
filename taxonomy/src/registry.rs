//! Category field registry.
//!
//! Assembles the per-category providers into one lookup surface and audits
//! the configuration at build time: every required field must be free
//! text, special-cased, or directly mapped, and every direct mapping must
//! agree with the precedence resolver. A violation is a configuration bug
//! and fails construction loudly rather than surfacing later as a silent
//! skip.

use std::collections::HashMap;

use crate::categories::all_providers;
use crate::resolve;
use crate::types::{CatalogKey, Category, CategoryConfig, FieldName, TaxonomyError};

/// Registry of category field configurations.
pub struct CategoryRegistry {
    configs: HashMap<Category, CategoryConfig>,
}

impl CategoryRegistry {
    /// Build the registry from the built-in providers and audit it.
    pub fn new() -> Result<Self, TaxonomyError> {
        let mut configs = HashMap::new();

        for provider in all_providers() {
            let config = provider.config();
            configs.insert(provider.category(), config);
        }

        let registry = Self { configs };
        registry.audit()?;
        Ok(registry)
    }

    /// Check every category configuration for resolution gaps.
    fn audit(&self) -> Result<(), TaxonomyError> {
        for (category, config) in &self.configs {
            for field in config.required_fields {
                if field.is_free_text() {
                    continue;
                }
                if resolve::resolve_key(*category, *field).is_none() {
                    return Err(TaxonomyError::InvalidConfiguration(format!(
                        "required field '{field}' in category '{category}' has no dropdown resolution"
                    )));
                }
            }

            // Direct mappings must not diverge from the resolver.
            for (field, key) in config.dropdowns {
                if resolve::resolve_key(*category, *field) != Some(*key) {
                    return Err(TaxonomyError::InvalidConfiguration(format!(
                        "dropdown map for '{field}' in category '{category}' disagrees with resolver"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Get the configuration for a category.
    pub fn config(&self, category: Category) -> CategoryConfig {
        // Every Category variant has a provider; audited at construction.
        self.configs[&category]
    }

    /// Get the ordered required fields for a category.
    pub fn required_fields(&self, category: Category) -> &'static [FieldName] {
        self.config(category).required_fields
    }

    /// Get the required fields for a category given by wire string.
    ///
    /// Fails with [`TaxonomyError::UnknownCategory`] for unregistered
    /// strings.
    pub fn required_fields_named(
        &self,
        category: &str,
    ) -> Result<&'static [FieldName], TaxonomyError> {
        let category: Category = category.parse()?;
        Ok(self.required_fields(category))
    }

    /// Get the catalog key a field resolves to for a category.
    ///
    /// Fails with [`TaxonomyError::UnmappedField`] when no resolution path
    /// exists (free-text fields included; callers wanting the lenient form
    /// use [`resolve::resolve`]).
    pub fn dropdown_source(
        &self,
        field: FieldName,
        category: Category,
    ) -> Result<CatalogKey, TaxonomyError> {
        resolve::resolve_key(category, field)
            .ok_or(TaxonomyError::UnmappedField { field, category })
    }

    /// Get the prompt-context tags for a category.
    pub fn context_sources(&self, category: Category) -> &'static [&'static str] {
        self.config(category).context_sources
    }

    /// Check whether a wire string names a registered category.
    pub fn is_valid_category(&self, name: &str) -> bool {
        name.parse::<Category>().is_ok()
    }

    /// All registered categories.
    pub fn all_categories(&self) -> &'static [Category] {
        Category::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds_and_audits() {
        let registry = CategoryRegistry::new().unwrap();
        assert_eq!(registry.all_categories().len(), 11);
    }

    #[test]
    fn test_financial_products_required_fields() {
        let registry = CategoryRegistry::new().unwrap();
        let fields = registry
            .required_fields_named("financial_products")
            .unwrap();
        assert_eq!(
            fields,
            &[
                FieldName::CostType,
                FieldName::FinancialBenefit,
                FieldName::AccessTime,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ]
        );
    }

    #[test]
    fn test_unknown_category_fails() {
        let registry = CategoryRegistry::new().unwrap();
        let err = registry.required_fields_named("astrology").unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownCategory(_)));
        assert!(!registry.is_valid_category("astrology"));
    }

    #[test]
    fn test_dropdown_source() {
        let registry = CategoryRegistry::new().unwrap();
        assert_eq!(
            registry
                .dropdown_source(FieldName::Frequency, Category::Skincare)
                .unwrap(),
            CatalogKey::FrequencySkincare
        );

        // Free-text fields have no mapping; that is an error for this
        // strict lookup.
        let err = registry
            .dropdown_source(FieldName::Dosage, Category::Medications)
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::UnmappedField { .. }));
    }

    #[test]
    fn test_context_sources_nonempty() {
        let registry = CategoryRegistry::new().unwrap();
        for category in registry.all_categories() {
            assert!(!registry.context_sources(*category).is_empty());
        }
    }
}
