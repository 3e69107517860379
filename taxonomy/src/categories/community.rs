//! Community-form categories: support groups, therapy services, crisis
//! resources.

use crate::categories::CategoryProvider;
use crate::types::{CatalogKey, Category, CategoryConfig, FieldName};

/// Provider for the support-groups category.
pub struct SupportGroupsCategory;

impl CategoryProvider for SupportGroupsCategory {
    fn category(&self) -> Category {
        Category::SupportGroups
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::SupportGroups,
            required_fields: &[
                FieldName::MeetingFrequency,
                FieldName::GroupSize,
                FieldName::Format,
                FieldName::Cost,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::AccessTime, FieldName::Notes],
            dropdowns: &[
                (FieldName::MeetingFrequency, CatalogKey::MeetingFrequency),
                (FieldName::GroupSize, CatalogKey::GroupSize),
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::AccessTime, CatalogKey::AccessTime),
            ],
            context_sources: &[
                "peer support program evaluations",
                "community health surveys",
                "group outcome studies",
            ],
        }
    }
}

/// Provider for the therapy-services category.
///
/// Session frequency reuses the meeting-frequency vocabulary.
pub struct TherapyServicesCategory;

impl CategoryProvider for TherapyServicesCategory {
    fn category(&self) -> Category {
        Category::TherapyServices
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::TherapyServices,
            required_fields: &[
                FieldName::SessionFrequency,
                FieldName::Format,
                FieldName::Cost,
                FieldName::TimeToResults,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::AccessTime, FieldName::Notes],
            dropdowns: &[
                (FieldName::SessionFrequency, CatalogKey::MeetingFrequency),
                (FieldName::TimeToResults, CatalogKey::TimeToResults),
                (FieldName::AccessTime, CatalogKey::AccessTime),
            ],
            context_sources: &[
                "psychotherapy outcome research",
                "practitioner directories",
                "client experience reports",
            ],
        }
    }
}

/// Provider for the crisis-resources category.
pub struct CrisisResourcesCategory;

impl CategoryProvider for CrisisResourcesCategory {
    fn category(&self) -> Category {
        Category::CrisisResources
    }

    fn config(&self) -> CategoryConfig {
        CategoryConfig {
            category: Category::CrisisResources,
            required_fields: &[
                FieldName::Format,
                FieldName::AccessTime,
                FieldName::Cost,
                FieldName::Challenges,
            ],
            optional_fields: &[FieldName::Notes],
            dropdowns: &[(FieldName::AccessTime, CatalogKey::AccessTime)],
            context_sources: &[
                "crisis line usage reports",
                "public health access studies",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_groups_fields() {
        let config = SupportGroupsCategory.config();
        assert!(config.requires(FieldName::MeetingFrequency));
        assert!(config.requires(FieldName::GroupSize));
        assert_eq!(
            config.dropdown_for(FieldName::MeetingFrequency),
            Some(CatalogKey::MeetingFrequency)
        );
    }

    #[test]
    fn test_session_frequency_reuses_meeting_catalog() {
        let config = TherapyServicesCategory.config();
        assert_eq!(
            config.dropdown_for(FieldName::SessionFrequency),
            Some(CatalogKey::MeetingFrequency)
        );
    }
}
