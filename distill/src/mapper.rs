//! Best-effort mapping of free text onto catalog buckets.
//!
//! The oracle does not always follow instructions: it emits "$45/month"
//! where the catalog says "$25-$49.99/month", or "2 weeks" where the
//! catalog says "1-2 weeks". This mapper coerces such strays into the
//! nearest valid bucket before deduplication. It never fails — worst case
//! it returns a plausible-but-wrong bucket, and the strict validator
//! behind it is the actual gate.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use taxonomy::{catalog, resolve, Category, FieldName};

/// Phrases that map straight to the catalog's immediate-equivalent entry.
const IMMEDIATE_PHRASES: &[&str] = &[
    "immediately",
    "immediate",
    "right away",
    "instantly",
    "instant",
    "same day",
    "straight away",
];

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid regex"))
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*(hour|day|week|month|year)s?").expect("valid regex")
    })
}

fn under_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)under\s+\$(\d+(?:\.\d+)?)").expect("valid regex"))
}

fn over_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)over\s+\$(\d+(?:\.\d+)?)").expect("valid regex"))
}

fn plus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(\d+(?:\.\d+)?)\+").expect("valid regex"))
}

fn dollar_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$(\d+(?:\.\d+)?)\s*-\s*\$(\d+(?:\.\d+)?)").expect("valid regex")
    })
}

fn within_hours_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)within\s+(\d+)\s+hours?").expect("valid regex"))
}

fn duration_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*-\s*(\d+)\s*(day|week|month|year)s?").expect("valid regex")
    })
}

fn duration_plus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\+\s*(day|week|month|year)s?").expect("valid regex"))
}

/// A cost option parsed into a matchable amount bucket.
#[derive(Debug, Clone, Copy)]
enum CostBucket {
    Under(f64),
    Over(f64),
    AtLeast(f64),
    Between(f64, f64),
}

impl CostBucket {
    fn parse(option: &str) -> Option<CostBucket> {
        if let Some(caps) = under_re().captures(option) {
            return caps[1].parse().ok().map(CostBucket::Under);
        }
        if let Some(caps) = over_re().captures(option) {
            return caps[1].parse().ok().map(CostBucket::Over);
        }
        if let Some(caps) = dollar_range_re().captures(option) {
            let low: f64 = caps[1].parse().ok()?;
            let high: f64 = caps[2].parse().ok()?;
            return Some(CostBucket::Between(low, high));
        }
        if let Some(caps) = plus_re().captures(option) {
            return caps[1].parse().ok().map(CostBucket::AtLeast);
        }
        None
    }

    fn contains(&self, amount: f64) -> bool {
        match self {
            CostBucket::Under(n) => amount < *n,
            CostBucket::Over(n) => amount > *n,
            CostBucket::AtLeast(n) => amount >= *n,
            CostBucket::Between(low, high) => *low <= amount && amount <= *high,
        }
    }

    fn midpoint(&self) -> f64 {
        match self {
            CostBucket::Under(n) => n / 2.0,
            CostBucket::Over(n) | CostBucket::AtLeast(n) => n * 1.5,
            CostBucket::Between(low, high) => (low + high) / 2.0,
        }
    }
}

/// Weeks per unit of a parsed duration.
fn unit_weeks(unit: &str) -> f64 {
    match unit {
        "hour" => 1.0 / 168.0,
        "day" => 1.0 / 7.0,
        "week" => 1.0,
        "month" => 4.0,
        "year" => 52.0,
        _ => 1.0,
    }
}

/// Coerces loosely-formatted free text into catalog buckets.
pub struct ValueMapper;

impl ValueMapper {
    /// Create a new mapper.
    pub fn new() -> Self {
        Self
    }

    /// Map free text to the nearest valid dropdown value for a field.
    ///
    /// Unconstrained fields pass the trimmed input through unchanged.
    pub fn map_to_dropdown(&self, category: Category, field: FieldName, input: &str) -> String {
        let Some(key) = resolve::resolve_key(category, field) else {
            return input.trim().to_string();
        };
        let options = catalog::options(key);

        if key.is_cost() {
            return Self::map_cost(input, options);
        }
        if key.is_time() {
            return Self::map_time(input, options);
        }

        match catalog::canonicalize(key, input) {
            Some(canonical) => canonical.to_string(),
            None => {
                debug!(
                    field = %field,
                    input = %input,
                    fallback = options[0],
                    "no catalog match, defaulting to first option"
                );
                options[0].to_string()
            }
        }
    }

    /// Map a cost-like value: extract a dollar amount, walk the bucket
    /// patterns in list order, then fall back to the nearest midpoint.
    fn map_cost(input: &str, options: &[&'static str]) -> String {
        let lower = input.trim().to_lowercase();

        if lower.contains("free") {
            if let Some(free) = options
                .iter()
                .find(|option| option.to_lowercase().contains("free"))
            {
                return free.to_string();
            }
        }

        let amount = number_re()
            .captures(input)
            .and_then(|caps| caps[1].parse::<f64>().ok());
        let Some(amount) = amount else {
            debug!(input = %input, "no dollar amount found, defaulting to first option");
            return options[0].to_string();
        };

        for option in options {
            if let Some(bucket) = CostBucket::parse(option) {
                if bucket.contains(amount) {
                    return option.to_string();
                }
            }
        }

        // Nothing contained the amount; pick the bucket with the nearest
        // midpoint.
        let mut best: Option<(&str, f64)> = None;
        for option in options {
            if let Some(bucket) = CostBucket::parse(option) {
                let distance = (bucket.midpoint() - amount).abs();
                if best.map(|(_, d)| distance < d).unwrap_or(true) {
                    best = Some((option, distance));
                }
            }
        }
        match best {
            Some((option, _)) => option.to_string(),
            None => options[0].to_string(),
        }
    }

    /// Map a time-like value: normalize to weeks, then find the first
    /// option whose parsed range contains it.
    fn map_time(input: &str, options: &[&'static str]) -> String {
        let lower = input.trim().to_lowercase();

        if IMMEDIATE_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
            if let Some(option) = options
                .iter()
                .find(|option| option.eq_ignore_ascii_case("immediately"))
            {
                return option.to_string();
            }
            return options[0].to_string();
        }

        let weeks = duration_re().captures(&lower).and_then(|caps| {
            let n: f64 = caps[1].parse().ok()?;
            Some(n * unit_weeks(&caps[2]))
        });
        let Some(weeks) = weeks else {
            debug!(input = %input, "unparseable duration, defaulting to first option");
            return options[0].to_string();
        };

        for option in options {
            if let Some((min, max)) = Self::time_option_range(option) {
                if weeks >= min && weeks <= max {
                    return option.to_string();
                }
            }
        }
        options[0].to_string()
    }

    /// Parse an option's own text into a (min, max) week range.
    fn time_option_range(option: &str) -> Option<(f64, f64)> {
        if option.eq_ignore_ascii_case("immediately") {
            return Some((0.0, 0.0));
        }
        if let Some(caps) = within_hours_re().captures(option) {
            let hours: f64 = caps[1].parse().ok()?;
            return Some((0.0, hours * unit_weeks("hour")));
        }
        if let Some(caps) = duration_range_re().captures(option) {
            let low: f64 = caps[1].parse().ok()?;
            let high: f64 = caps[2].parse().ok()?;
            let factor = unit_weeks(&caps[3]);
            return Some((low * factor, high * factor));
        }
        if let Some(caps) = duration_plus_re().captures(option) {
            let low: f64 = caps[1].parse().ok()?;
            let factor = unit_weeks(&caps[2]);
            return Some((low * factor, f64::INFINITY));
        }
        None
    }
}

impl Default for ValueMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_monotonicity() {
        let options: &[&'static str] = &[
            "Under $10/month",
            "$10-$19.99/month",
            "$20-$49.99/month",
        ];
        assert_eq!(ValueMapper::map_cost("$15/month", options), "$10-$19.99/month");
        assert_eq!(ValueMapper::map_cost("$5/month", options), "Under $10/month");
        assert_eq!(ValueMapper::map_cost("$35", options), "$20-$49.99/month");
    }

    #[test]
    fn test_cost_free_and_fallbacks() {
        let mapper = ValueMapper::new();
        assert_eq!(
            mapper.map_to_dropdown(Category::Medications, FieldName::Cost, "free of charge"),
            "Free"
        );
        // No amount at all: first option.
        assert_eq!(
            mapper.map_to_dropdown(Category::Medications, FieldName::Cost, "varies"),
            "Free"
        );
    }

    #[test]
    fn test_cost_midpoint_fallback() {
        // $250 matches nothing in ["Under $10", "$10-$19.99"], midpoints
        // are 5 and ~15, so the range bucket wins.
        let options: &[&'static str] = &["Under $10", "$10-$19.99"];
        assert_eq!(ValueMapper::map_cost("$250", options), "$10-$19.99");
    }

    #[test]
    fn test_app_cost_resolves_monthly_scale() {
        let mapper = ValueMapper::new();
        assert_eq!(
            mapper.map_to_dropdown(Category::AppsSoftware, FieldName::Cost, "$7/month"),
            "$5-$9.99/month"
        );
    }

    #[test]
    fn test_time_mapping() {
        let mapper = ValueMapper::new();
        assert_eq!(
            mapper.map_to_dropdown(Category::Medications, FieldName::TimeToResults, "2 weeks"),
            "1-2 weeks"
        );
        assert_eq!(
            mapper.map_to_dropdown(Category::Medications, FieldName::TimeToResults, "3 months"),
            "3-6 months"
        );
        assert_eq!(
            mapper.map_to_dropdown(
                Category::Medications,
                FieldName::TimeToResults,
                "works immediately"
            ),
            "Immediately"
        );
        assert_eq!(
            mapper.map_to_dropdown(Category::SupportGroups, FieldName::AccessTime, "about 1 month"),
            "2+ weeks"
        );
    }

    #[test]
    fn test_plain_fields_canonicalize_or_default() {
        let mapper = ValueMapper::new();
        assert_eq!(
            mapper.map_to_dropdown(Category::SupportGroups, FieldName::Format, "in-person"),
            "In-person"
        );
        assert_eq!(
            mapper.map_to_dropdown(Category::SupportGroups, FieldName::Format, "telepathy"),
            "In-person"
        );
    }

    #[test]
    fn test_unconstrained_fields_pass_through() {
        let mapper = ValueMapper::new();
        assert_eq!(
            mapper.map_to_dropdown(Category::Medications, FieldName::Dosage, " 50mg "),
            "50mg"
        );
    }
}
