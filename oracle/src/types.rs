//! Source-quality vocabulary.
//!
//! Every bucket in a generated distribution carries a source attribution
//! tag. The vocabulary is closed; the validator checks membership over the
//! untrusted wire strings, and the deduplicator uses the quality ranking
//! to pick the surviving attribution when buckets merge.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Source attribution for a distribution bucket.
///
/// Ordered by evidence quality via [`SourceTag::quality_rank`]: research
/// grades above studies, studies above clinical trials, down through
/// consumer and community sources to `general_knowledge` and `fallback`,
/// which mark inherently low-quality synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Research,
    MetaAnalysis,
    SystematicReview,
    Studies,
    ClinicalTrials,
    PeerReviewed,
    ClinicalGuidelines,
    MedicalLiterature,
    FdaLabel,
    ManufacturerData,
    ConsumerReports,
    MarketResearch,
    SurveyData,
    UserExperiences,
    UserReviews,
    ForumDiscussions,
    CommunityFeedback,
    SocialMedia,
    ExpertOpinions,
    PractitionerExperience,
    Anecdotal,
    NewsMedia,
    IndustryReports,
    GeneralKnowledge,
    Fallback,
}

impl SourceTag {
    /// Get the wire string for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::MetaAnalysis => "meta_analysis",
            Self::SystematicReview => "systematic_review",
            Self::Studies => "studies",
            Self::ClinicalTrials => "clinical_trials",
            Self::PeerReviewed => "peer_reviewed",
            Self::ClinicalGuidelines => "clinical_guidelines",
            Self::MedicalLiterature => "medical_literature",
            Self::FdaLabel => "fda_label",
            Self::ManufacturerData => "manufacturer_data",
            Self::ConsumerReports => "consumer_reports",
            Self::MarketResearch => "market_research",
            Self::SurveyData => "survey_data",
            Self::UserExperiences => "user_experiences",
            Self::UserReviews => "user_reviews",
            Self::ForumDiscussions => "forum_discussions",
            Self::CommunityFeedback => "community_feedback",
            Self::SocialMedia => "social_media",
            Self::ExpertOpinions => "expert_opinions",
            Self::PractitionerExperience => "practitioner_experience",
            Self::Anecdotal => "anecdotal",
            Self::NewsMedia => "news_media",
            Self::IndustryReports => "industry_reports",
            Self::GeneralKnowledge => "general_knowledge",
            Self::Fallback => "fallback",
        }
    }

    /// Parse a wire string. Unknown tags return `None`; membership is a
    /// validation finding, not a panic.
    pub fn parse(s: &str) -> Option<SourceTag> {
        Self::all().iter().find(|t| t.as_str() == s.trim()).copied()
    }

    /// Evidence quality rank; higher wins when merged buckets disagree.
    pub fn quality_rank(&self) -> u8 {
        match self {
            Self::Research => 100,
            Self::MetaAnalysis => 98,
            Self::SystematicReview => 96,
            Self::Studies => 95,
            Self::ClinicalTrials => 90,
            Self::PeerReviewed => 88,
            Self::ClinicalGuidelines => 86,
            Self::MedicalLiterature => 85,
            Self::FdaLabel => 80,
            Self::ManufacturerData => 70,
            Self::ConsumerReports => 65,
            Self::MarketResearch => 62,
            Self::SurveyData => 60,
            Self::UserExperiences => 55,
            Self::UserReviews => 52,
            Self::ForumDiscussions => 48,
            Self::CommunityFeedback => 45,
            Self::SocialMedia => 40,
            Self::ExpertOpinions => 35,
            Self::PractitionerExperience => 33,
            Self::Anecdotal => 30,
            Self::NewsMedia => 28,
            Self::IndustryReports => 26,
            Self::GeneralKnowledge => 20,
            Self::Fallback => 10,
        }
    }

    /// Tags that trigger regeneration regardless of structural validity.
    pub fn is_low_quality(&self) -> bool {
        matches!(self, Self::GeneralKnowledge | Self::Fallback)
    }

    /// All tags in the vocabulary.
    pub fn all() -> &'static [SourceTag] {
        &[
            Self::Research,
            Self::MetaAnalysis,
            Self::SystematicReview,
            Self::Studies,
            Self::ClinicalTrials,
            Self::PeerReviewed,
            Self::ClinicalGuidelines,
            Self::MedicalLiterature,
            Self::FdaLabel,
            Self::ManufacturerData,
            Self::ConsumerReports,
            Self::MarketResearch,
            Self::SurveyData,
            Self::UserExperiences,
            Self::UserReviews,
            Self::ForumDiscussions,
            Self::CommunityFeedback,
            Self::SocialMedia,
            Self::ExpertOpinions,
            Self::PractitionerExperience,
            Self::Anecdotal,
            Self::NewsMedia,
            Self::IndustryReports,
            Self::GeneralKnowledge,
            Self::Fallback,
        ]
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
