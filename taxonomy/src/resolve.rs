//! Precedence-based dropdown resolution.
//!
//! Dropdown vocabularies are reused across categories but recombined:
//! frequency and format vary by category, challenges vary by form family,
//! and cost fields go through a category→cost-structure table that can
//! depend on a second field's value (app cost depends on
//! `subscription_type`). This module is the single source of truth the
//! validator, mapper, and intake normalizer all resolve through.
//!
//! Resolution order, first match wins:
//! 1. special-cased fields (frequency, format, challenges, cost),
//! 2. the direct category-independent field → catalog map,
//! 3. `None`, meaning unconstrained free text (callers skip dropdown
//!    validation rather than erroring).

use tracing::debug;

use crate::catalog;
use crate::types::{CatalogKey, Category, FieldName, FormFamily};

/// How a category prices its solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostStructure {
    /// Recurring monthly cost (medications, supplements, subscriptions)
    Monthly,
    /// Per-session pricing (therapy)
    PerSession,
    /// Single purchase (books, procedures)
    OneTime,
    /// Group/meeting pricing, donation-friendly (support groups, crisis)
    Group,
    /// Depends on the submitted `subscription_type` value (apps)
    BySubscription,
}

/// Get the cost structure for a category.
pub fn cost_structure(category: Category) -> CostStructure {
    match category {
        Category::Medications
        | Category::Supplements
        | Category::Skincare
        | Category::LifestyleChanges
        | Category::FinancialProducts => CostStructure::Monthly,
        Category::TherapyServices => CostStructure::PerSession,
        Category::SupportGroups | Category::CrisisResources => CostStructure::Group,
        Category::BooksMedia | Category::MedicalProcedures => CostStructure::OneTime,
        Category::AppsSoftware => CostStructure::BySubscription,
    }
}

/// Resolve the catalog key for a (category, field) pair.
///
/// Context-free form: app cost falls back to the monthly app scale.
pub fn resolve_key(category: Category, field: FieldName) -> Option<CatalogKey> {
    resolve_key_in_context(category, field, None)
}

/// Resolve the catalog key for a (category, field) pair, consulting the
/// sibling `subscription_type` value where the cost structure requires it.
pub fn resolve_key_in_context(
    category: Category,
    field: FieldName,
    subscription_type: Option<&str>,
) -> Option<CatalogKey> {
    // 1. Special cases whose valid set depends on category.
    match field {
        FieldName::Frequency => {
            return Some(match category {
                Category::Skincare => CatalogKey::FrequencySkincare,
                _ => CatalogKey::FrequencyStandard,
            });
        }
        FieldName::Format => {
            return Some(match category {
                Category::SupportGroups => CatalogKey::FormatCommunity,
                Category::CrisisResources => CatalogKey::FormatCrisis,
                Category::MedicalProcedures => CatalogKey::FormatProcedure,
                Category::BooksMedia => CatalogKey::FormatBook,
                _ => CatalogKey::FormatSession,
            });
        }
        FieldName::Challenges => {
            return Some(match category.form_family() {
                FormFamily::Dosage => CatalogKey::ChallengesDosage,
                FormFamily::Community => CatalogKey::ChallengesCommunity,
                FormFamily::Financial => CatalogKey::ChallengesFinancial,
                FormFamily::Lifestyle => CatalogKey::ChallengesLifestyle,
            });
        }
        FieldName::Cost => {
            return Some(match cost_structure(category) {
                CostStructure::Monthly => CatalogKey::CostMonthly,
                CostStructure::PerSession => CatalogKey::CostPerSession,
                CostStructure::OneTime => CatalogKey::CostOneTime,
                CostStructure::Group => CatalogKey::CostGroup,
                CostStructure::BySubscription => match subscription_type {
                    Some(sub) if sub.trim().eq_ignore_ascii_case("one-time purchase") => {
                        CatalogKey::CostOneTime
                    }
                    Some(_) => CatalogKey::CostAppMonthly,
                    None => {
                        debug!(
                            category = %category,
                            "cost resolution without subscription_type context, using monthly app scale"
                        );
                        CatalogKey::CostAppMonthly
                    }
                },
            });
        }
        _ => {}
    }

    // 2. Direct map for category-independent fields.
    match field {
        FieldName::TimeToResults => Some(CatalogKey::TimeToResults),
        FieldName::AccessTime => Some(CatalogKey::AccessTime),
        FieldName::GroupSize => Some(CatalogKey::GroupSize),
        FieldName::MeetingFrequency => Some(CatalogKey::MeetingFrequency),
        FieldName::SessionFrequency => Some(CatalogKey::MeetingFrequency),
        FieldName::UsageFrequency => Some(CatalogKey::UsageFrequency),
        FieldName::SubscriptionType => Some(CatalogKey::SubscriptionType),
        FieldName::CostType => Some(CatalogKey::CostTypeFinancial),
        FieldName::FinancialBenefit => Some(CatalogKey::FinancialBenefit),
        FieldName::SideEffects => Some(CatalogKey::SideEffects),
        // 3. Unconstrained free text.
        FieldName::Dosage | FieldName::Notes => None,
        _ => None,
    }
}

/// Resolve the valid-value list for a (category, field) pair.
///
/// `None` means the field is unconstrained free text.
pub fn resolve(category: Category, field: FieldName) -> Option<&'static [&'static str]> {
    resolve_key(category, field).map(catalog::options)
}

/// Resolve the valid-value list with sibling-field context.
pub fn resolve_in_context(
    category: Category,
    field: FieldName,
    subscription_type: Option<&str>,
) -> Option<&'static [&'static str]> {
    resolve_key_in_context(category, field, subscription_type).map(catalog::options)
}
