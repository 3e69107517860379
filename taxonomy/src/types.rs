//! Core types for the survey taxonomy.
//!
//! These types model the closed category/field/catalog vocabulary shared by
//! the form layer, the generation pipeline, and the validators.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript so the React form components stay in sync with the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error types for taxonomy lookups.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// Category string has no registry entry
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A field has no dropdown resolution path for this category
    #[error("No dropdown mapping for field '{field}' in category '{category}'")]
    UnmappedField {
        field: FieldName,
        category: Category,
    },

    /// The built-in configuration is inconsistent
    #[error("Invalid category configuration: {0}")]
    InvalidConfiguration(String),
}

/// Solution category.
///
/// Each category identifies a domain of solutions sharing the same
/// required-field set and dropdown semantics. The set is closed; unknown
/// category strings are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Prescription and over-the-counter medications
    Medications,
    /// Vitamins, minerals, herbal supplements
    Supplements,
    /// Topical skincare products and routines
    Skincare,
    /// Peer support and community groups
    SupportGroups,
    /// Individual therapy and counseling services
    TherapyServices,
    /// Hotlines, text lines, and other crisis resources
    CrisisResources,
    /// Budgeting tools, credit products, savings programs
    FinancialProducts,
    /// Apps and software products
    AppsSoftware,
    /// Habit and routine changes
    LifestyleChanges,
    /// Books, audiobooks, and workbooks
    BooksMedia,
    /// Clinical procedures and treatments
    MedicalProcedures,
}

impl Category {
    /// Get the wire string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medications => "medications",
            Self::Supplements => "supplements",
            Self::Skincare => "skincare",
            Self::SupportGroups => "support_groups",
            Self::TherapyServices => "therapy_services",
            Self::CrisisResources => "crisis_resources",
            Self::FinancialProducts => "financial_products",
            Self::AppsSoftware => "apps_software",
            Self::LifestyleChanges => "lifestyle_changes",
            Self::BooksMedia => "books_media",
            Self::MedicalProcedures => "medical_procedures",
        }
    }

    /// Which survey form collects submissions for this category.
    pub fn form_family(&self) -> FormFamily {
        match self {
            Self::Medications | Self::Supplements | Self::Skincare => FormFamily::Dosage,
            Self::SupportGroups | Self::TherapyServices | Self::CrisisResources => {
                FormFamily::Community
            }
            Self::FinancialProducts | Self::AppsSoftware => FormFamily::Financial,
            Self::LifestyleChanges | Self::BooksMedia | Self::MedicalProcedures => {
                FormFamily::Lifestyle
            }
        }
    }

    /// All registered categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Medications,
            Self::Supplements,
            Self::Skincare,
            Self::SupportGroups,
            Self::TherapyServices,
            Self::CrisisResources,
            Self::FinancialProducts,
            Self::AppsSoftware,
            Self::LifestyleChanges,
            Self::BooksMedia,
            Self::MedicalProcedures,
        ]
    }
}

impl FromStr for Category {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| TaxonomyError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four survey forms.
///
/// Every category belongs to exactly one family; challenge vocabularies
/// are keyed by family rather than by individual category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum FormFamily {
    /// Medications, supplements, skincare
    Dosage,
    /// Groups, therapy, crisis resources
    Community,
    /// Financial products, apps
    Financial,
    /// Habits, books, procedures
    Lifestyle,
}

/// A survey field name.
///
/// Closed set; submitted field keys that do not parse are treated as
/// free-form text by the intake normalizer rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Dosage,
    Frequency,
    MeetingFrequency,
    SessionFrequency,
    UsageFrequency,
    GroupSize,
    Format,
    AccessTime,
    TimeToResults,
    Cost,
    CostType,
    SubscriptionType,
    FinancialBenefit,
    SideEffects,
    Challenges,
    Notes,
}

impl FieldName {
    /// Get the wire string for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dosage => "dosage",
            Self::Frequency => "frequency",
            Self::MeetingFrequency => "meeting_frequency",
            Self::SessionFrequency => "session_frequency",
            Self::UsageFrequency => "usage_frequency",
            Self::GroupSize => "group_size",
            Self::Format => "format",
            Self::AccessTime => "access_time",
            Self::TimeToResults => "time_to_results",
            Self::Cost => "cost",
            Self::CostType => "cost_type",
            Self::SubscriptionType => "subscription_type",
            Self::FinancialBenefit => "financial_benefit",
            Self::SideEffects => "side_effects",
            Self::Challenges => "challenges",
            Self::Notes => "notes",
        }
    }

    /// Parse a submitted field key. Unknown keys return `None` and are
    /// handled as free-form by the caller.
    pub fn parse(s: &str) -> Option<FieldName> {
        Self::all().iter().find(|f| f.as_str() == s).copied()
    }

    /// Fields that carry unconstrained free text (no dropdown).
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::Dosage | Self::Notes)
    }

    /// Array-typed fields (submitted as a list of strings).
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Challenges | Self::SideEffects)
    }

    /// Array fields that keep user-supplied custom entries alongside
    /// catalog values.
    pub fn allows_custom_entries(&self) -> bool {
        matches!(self, Self::Challenges | Self::SideEffects)
    }

    /// All known field names.
    pub fn all() -> &'static [FieldName] {
        &[
            Self::Dosage,
            Self::Frequency,
            Self::MeetingFrequency,
            Self::SessionFrequency,
            Self::UsageFrequency,
            Self::GroupSize,
            Self::Format,
            Self::AccessTime,
            Self::TimeToResults,
            Self::Cost,
            Self::CostType,
            Self::SubscriptionType,
            Self::FinancialBenefit,
            Self::SideEffects,
            Self::Challenges,
            Self::Notes,
        ]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into the dropdown option catalog.
///
/// One key per distinct valid-value list. Several fields can share a key
/// (e.g. `session_frequency` reuses the meeting-frequency list) and one
/// field can map to different keys depending on category (frequency,
/// format, challenges, cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum CatalogKey {
    TimeToResults,
    AccessTime,
    GroupSize,
    FrequencyStandard,
    FrequencySkincare,
    MeetingFrequency,
    UsageFrequency,
    FormatCommunity,
    FormatSession,
    FormatCrisis,
    FormatProcedure,
    FormatBook,
    CostMonthly,
    CostAppMonthly,
    CostPerSession,
    CostOneTime,
    CostGroup,
    SubscriptionType,
    CostTypeFinancial,
    FinancialBenefit,
    SideEffects,
    ChallengesDosage,
    ChallengesCommunity,
    ChallengesFinancial,
    ChallengesLifestyle,
}

impl CatalogKey {
    /// Get the wire string for this catalog key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeToResults => "time_to_results",
            Self::AccessTime => "access_time",
            Self::GroupSize => "group_size",
            Self::FrequencyStandard => "frequency_standard",
            Self::FrequencySkincare => "frequency_skincare",
            Self::MeetingFrequency => "meeting_frequency",
            Self::UsageFrequency => "usage_frequency",
            Self::FormatCommunity => "format_community",
            Self::FormatSession => "format_session",
            Self::FormatCrisis => "format_crisis",
            Self::FormatProcedure => "format_procedure",
            Self::FormatBook => "format_book",
            Self::CostMonthly => "cost_monthly",
            Self::CostAppMonthly => "cost_app_monthly",
            Self::CostPerSession => "cost_per_session",
            Self::CostOneTime => "cost_one_time",
            Self::CostGroup => "cost_group",
            Self::SubscriptionType => "subscription_type",
            Self::CostTypeFinancial => "cost_type_financial",
            Self::FinancialBenefit => "financial_benefit",
            Self::SideEffects => "side_effects",
            Self::ChallengesDosage => "challenges_dosage",
            Self::ChallengesCommunity => "challenges_community",
            Self::ChallengesFinancial => "challenges_financial",
            Self::ChallengesLifestyle => "challenges_lifestyle",
        }
    }

    /// Keys whose option lists are dollar-amount buckets.
    pub fn is_cost(&self) -> bool {
        matches!(
            self,
            Self::CostMonthly
                | Self::CostAppMonthly
                | Self::CostPerSession
                | Self::CostOneTime
                | Self::CostGroup
        )
    }

    /// Keys whose option lists are elapsed-time buckets.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::TimeToResults | Self::AccessTime)
    }

    /// All catalog keys, in fingerprint order.
    pub fn all() -> &'static [CatalogKey] {
        &[
            Self::TimeToResults,
            Self::AccessTime,
            Self::GroupSize,
            Self::FrequencyStandard,
            Self::FrequencySkincare,
            Self::MeetingFrequency,
            Self::UsageFrequency,
            Self::FormatCommunity,
            Self::FormatSession,
            Self::FormatCrisis,
            Self::FormatProcedure,
            Self::FormatBook,
            Self::CostMonthly,
            Self::CostAppMonthly,
            Self::CostPerSession,
            Self::CostOneTime,
            Self::CostGroup,
            Self::SubscriptionType,
            Self::CostTypeFinancial,
            Self::FinancialBenefit,
            Self::SideEffects,
            Self::ChallengesDosage,
            Self::ChallengesCommunity,
            Self::ChallengesFinancial,
            Self::ChallengesLifestyle,
        ]
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static field configuration for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    /// The category this configuration describes
    pub category: Category,
    /// Fields every complete submission must carry, in form order
    pub required_fields: &'static [FieldName],
    /// Fields the follow-up "additional details" call may add
    pub optional_fields: &'static [FieldName],
    /// Direct field → catalog mappings (special-cased fields are resolved
    /// by the precedence resolver instead)
    pub dropdowns: &'static [(FieldName, CatalogKey)],
    /// Descriptive tags handed to the prompt-construction layer
    pub context_sources: &'static [&'static str],
}

impl CategoryConfig {
    /// Look up the direct catalog mapping for a field, if present.
    pub fn dropdown_for(&self, field: FieldName) -> Option<CatalogKey> {
        self.dropdowns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, key)| *key)
    }

    /// Check whether a field is required for this category.
    pub fn requires(&self, field: FieldName) -> bool {
        self.required_fields.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "horoscopes".parse::<Category>().unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownCategory(_)));
    }

    #[test]
    fn test_form_family() {
        assert_eq!(Category::Medications.form_family(), FormFamily::Dosage);
        assert_eq!(Category::SupportGroups.form_family(), FormFamily::Community);
        assert_eq!(
            Category::FinancialProducts.form_family(),
            FormFamily::Financial
        );
        assert_eq!(Category::BooksMedia.form_family(), FormFamily::Lifestyle);
    }

    #[test]
    fn test_field_predicates() {
        assert!(FieldName::Dosage.is_free_text());
        assert!(FieldName::Notes.is_free_text());
        assert!(!FieldName::Frequency.is_free_text());

        assert!(FieldName::Challenges.is_array());
        assert!(FieldName::SideEffects.allows_custom_entries());
        assert!(!FieldName::Format.is_array());
    }

    #[test]
    fn test_field_parse() {
        assert_eq!(
            FieldName::parse("meeting_frequency"),
            Some(FieldName::MeetingFrequency)
        );
        assert_eq!(FieldName::parse("favorite_color"), None);
    }
}
