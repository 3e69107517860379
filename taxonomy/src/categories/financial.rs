//! Financial-form categories: financial products and apps/software.

use crate::categories::CategoryProvider;
use crate::types::{CatalogKey, Category, CategoryConfig, FieldName};

/// Provider for the financial-products category.
pub struct FinancialProductsCategory;

impl CategoryProvider for FinancialProductsCategory {
    fn category(&self) -> Category {
        Category::FinancialProducts
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::FinancialProducts,
            required_fields: &[
                FieldName::CostType,
                FieldName::FinancialBenefit,
                FieldName::AccessTime,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::CostType, CatalogKey::CostTypeFinancial),
                (FieldName::FinancialBenefit, CatalogKey::FinancialBenefit),
                (FieldName::AccessTime, CatalogKey::AccessTime),
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
            ],
            context_sources: &[
                "consumer finance reviews",
                "product fee disclosures",
                "personal finance communities",
            ],
        }
    }
}

/// Provider for the apps/software category.
///
/// The cost vocabulary depends on the submitted `subscription_type` value;
/// the resolver handles that second-field dependency.
pub struct AppsSoftwareCategory;

impl CategoryProvider for AppsSoftwareCategory {
    fn category(&self) -> Category {
        Category::AppsSoftware
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::AppsSoftware,
            required_fields: &[
                FieldName::SubscriptionType,
                FieldName::Cost,
                FieldName::UsageFrequency,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[
                (FieldName::SubscriptionType, CatalogKey::SubscriptionType),
                (FieldName::UsageFrequency, CatalogKey::UsageFrequency),
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
            ],
            context_sources: &[
                "app store review corpora",
                "digital health efficacy studies",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_products_required_order() {
        let config = FinancialProductsCategory.config();
        assert_eq!(
            config.required_fields,
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
    fn test_apps_require_subscription_type() {
        let config = AppsSoftwareCategory.config();
        assert!(config.requires(FieldName::SubscriptionType));
        assert!(config.requires(FieldName::Cost));
    }
}
