//! Dropdown option catalog.
//!
//! Every valid-value list, keyed by [`CatalogKey`]. List order is display
//! order. Values are the canonical case-sensitive spellings; matching
//! elsewhere is case-insensitive with promotion to these exact strings.

use crate::types::CatalogKey;

const TIME_TO_RESULTS: &[&str] = &[
    "Immediately",
    "1-3 days",
    "4-7 days",
    "1-2 weeks",
    "3-4 weeks",
    "1-2 months",
    "3-6 months",
    "6-12 months",
    "1-2 years",
];

const ACCESS_TIME: &[&str] = &[
    "Immediately",
    "Within 24 hours",
    "1-3 days",
    "4-7 days",
    "1-2 weeks",
    "2+ weeks",
];

const GROUP_SIZE: &[&str] = &[
    "Under 10 people",
    "10-25 people",
    "25-50 people",
    "50-100 people",
    "100+ people",
];

const FREQUENCY_STANDARD: &[&str] = &[
    "Multiple times daily",
    "Three times daily",
    "Twice daily",
    "Once daily",
    "Every other day",
    "Weekly",
    "As needed",
];

const FREQUENCY_SKINCARE: &[&str] = &[
    "Twice daily",
    "Once daily",
    "Morning only",
    "Night only",
    "A few times per week",
    "Weekly",
    "As needed",
];

const MEETING_FREQUENCY: &[&str] = &[
    "Daily",
    "Multiple times per week",
    "Weekly",
    "Every other week",
    "Monthly",
    "As needed",
];

const USAGE_FREQUENCY: &[&str] = &[
    "Multiple times daily",
    "Once daily",
    "A few times per week",
    "Weekly",
    "Less than weekly",
];

const FORMAT_COMMUNITY: &[&str] = &["In-person", "Online", "Hybrid"];

const FORMAT_SESSION: &[&str] = &["In-person", "Video call", "Phone call", "Text-based"];

const FORMAT_CRISIS: &[&str] = &[
    "Phone hotline",
    "Text line",
    "Online chat",
    "In-person center",
];

const FORMAT_PROCEDURE: &[&str] = &["Office visit", "Outpatient", "Inpatient", "At-home"];

const FORMAT_BOOK: &[&str] = &["Print book", "E-book", "Audiobook", "Workbook"];

const COST_MONTHLY: &[&str] = &[
    "Free",
    "Under $10/month",
    "$10-$24.99/month",
    "$25-$49.99/month",
    "$50-$99.99/month",
    "$100+/month",
];

const COST_APP_MONTHLY: &[&str] = &[
    "Free",
    "Under $5/month",
    "$5-$9.99/month",
    "$10-$19.99/month",
    "$20+/month",
];

const COST_PER_SESSION: &[&str] = &[
    "Free",
    "Under $50/session",
    "$50-$99/session",
    "$100-$149/session",
    "$150-$199/session",
    "$200+/session",
];

const COST_ONE_TIME: &[&str] = &[
    "Free",
    "Under $20",
    "$20-$49.99",
    "$50-$99.99",
    "$100-$499.99",
    "$500+",
];

const COST_GROUP: &[&str] = &[
    "Free",
    "Donation-based",
    "Under $10/meeting",
    "$10-$25/meeting",
    "Over $25/meeting",
];

const SUBSCRIPTION_TYPE: &[&str] = &[
    "Free",
    "Free with ads",
    "Freemium",
    "Monthly subscription",
    "Annual subscription",
    "One-time purchase",
];

const COST_TYPE_FINANCIAL: &[&str] = &[
    "Free to use",
    "Flat monthly fee",
    "Percentage-based fee",
    "Interest charges",
    "One-time fee",
];

const FINANCIAL_BENEFIT: &[&str] = &[
    "Reduced monthly expenses",
    "Debt reduction",
    "Improved credit score",
    "Emergency savings built",
    "Better budgeting habits",
    "Increased income",
];

const SIDE_EFFECTS: &[&str] = &[
    "None",
    "Nausea",
    "Headache",
    "Drowsiness",
    "Insomnia",
    "Dry mouth",
    "Dizziness",
    "Fatigue",
    "Weight gain",
    "Weight loss",
    "Digestive issues",
    "Skin irritation",
];

const CHALLENGES_DOSAGE: &[&str] = &[
    "Remembering to take it",
    "Side effects",
    "Cost",
    "Finding the right dose",
    "Refill logistics",
    "None",
];

const CHALLENGES_COMMUNITY: &[&str] = &[
    "Scheduling conflicts",
    "Feeling comfortable sharing",
    "Finding the right fit",
    "Transportation",
    "Cost",
    "None",
];

const CHALLENGES_FINANCIAL: &[&str] = &[
    "Qualification requirements",
    "Hidden fees",
    "Learning curve",
    "Customer service",
    "Trusting the provider",
    "None",
];

const CHALLENGES_LIFESTYLE: &[&str] = &[
    "Staying consistent",
    "Time commitment",
    "Motivation",
    "Social pressure",
    "Initial discomfort",
    "None",
];

/// Get the canonical option list for a catalog key.
pub fn options(key: CatalogKey) -> &'static [&'static str] {
    match key {
        CatalogKey::TimeToResults => TIME_TO_RESULTS,
        CatalogKey::AccessTime => ACCESS_TIME,
        CatalogKey::GroupSize => GROUP_SIZE,
        CatalogKey::FrequencyStandard => FREQUENCY_STANDARD,
        CatalogKey::FrequencySkincare => FREQUENCY_SKINCARE,
        CatalogKey::MeetingFrequency => MEETING_FREQUENCY,
        CatalogKey::UsageFrequency => USAGE_FREQUENCY,
        CatalogKey::FormatCommunity => FORMAT_COMMUNITY,
        CatalogKey::FormatSession => FORMAT_SESSION,
        CatalogKey::FormatCrisis => FORMAT_CRISIS,
        CatalogKey::FormatProcedure => FORMAT_PROCEDURE,
        CatalogKey::FormatBook => FORMAT_BOOK,
        CatalogKey::CostMonthly => COST_MONTHLY,
        CatalogKey::CostAppMonthly => COST_APP_MONTHLY,
        CatalogKey::CostPerSession => COST_PER_SESSION,
        CatalogKey::CostOneTime => COST_ONE_TIME,
        CatalogKey::CostGroup => COST_GROUP,
        CatalogKey::SubscriptionType => SUBSCRIPTION_TYPE,
        CatalogKey::CostTypeFinancial => COST_TYPE_FINANCIAL,
        CatalogKey::FinancialBenefit => FINANCIAL_BENEFIT,
        CatalogKey::SideEffects => SIDE_EFFECTS,
        CatalogKey::ChallengesDosage => CHALLENGES_DOSAGE,
        CatalogKey::ChallengesCommunity => CHALLENGES_COMMUNITY,
        CatalogKey::ChallengesFinancial => CHALLENGES_FINANCIAL,
        CatalogKey::ChallengesLifestyle => CHALLENGES_LIFESTYLE,
    }
}

/// Find the canonical spelling for a value, matching case-insensitively
/// after trimming. Returns `None` when the value is not in the list.
pub fn canonicalize(key: CatalogKey, value: &str) -> Option<&'static str> {
    let needle = value.trim();
    options(key)
        .iter()
        .find(|opt| opt.eq_ignore_ascii_case(needle))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_options() {
        for key in CatalogKey::all() {
            assert!(!options(*key).is_empty(), "empty catalog for {key}");
        }
    }

    #[test]
    fn test_challenges_keep_none_sentinel() {
        for key in [
            CatalogKey::ChallengesDosage,
            CatalogKey::ChallengesCommunity,
            CatalogKey::ChallengesFinancial,
            CatalogKey::ChallengesLifestyle,
        ] {
            assert!(options(key).contains(&"None"));
        }
        assert!(options(CatalogKey::SideEffects).contains(&"None"));
    }

    #[test]
    fn test_canonicalize_case_insensitive() {
        assert_eq!(
            canonicalize(CatalogKey::MeetingFrequency, "weekly"),
            Some("Weekly")
        );
        assert_eq!(
            canonicalize(CatalogKey::MeetingFrequency, "  MONTHLY "),
            Some("Monthly")
        );
        assert_eq!(canonicalize(CatalogKey::MeetingFrequency, "sometimes"), None);
    }

    #[test]
    fn test_cost_lists_lead_with_free() {
        for key in CatalogKey::all().iter().filter(|k| k.is_cost()) {
            assert_eq!(options(*key)[0], "Free");
        }
    }
}
