//! Generation request types.
//!
//! A request describes the (solution, field, goal-context) triple a
//! distribution is wanted for, plus the resolved option list and context
//! tags the prompt-construction layer turns into model instructions.
//! Prompt text itself lives outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taxonomy::{Category, FieldName};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Request for one generated distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Unique request identifier
    pub request_id: String,
    /// The solution being described (e.g. "Headspace", "sertraline")
    pub solution_name: String,
    /// The goal the solution was used for (e.g. "reduce anxiety")
    pub goal_context: Option<String>,
    /// Category of the solution
    pub category: Category,
    /// Field the distribution is for
    pub field: FieldName,
    /// The resolved dropdown options the model must draw values from
    /// (empty for unconstrained fields)
    pub options: Vec<String>,
    /// Context-source tags for prompt grounding
    pub context_sources: Vec<String>,
    /// When the request was made
    pub requested_at: DateTime<Utc>,
}

impl GenerationRequest {
    /// Create a new request.
    pub fn new(
        category: Category,
        field: FieldName,
        solution_name: impl Into<String>,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            solution_name: solution_name.into(),
            goal_context: None,
            category,
            field,
            options: Vec::new(),
            context_sources: Vec::new(),
            requested_at: Utc::now(),
        }
    }

    /// Set the goal context.
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal_context = Some(goal.into());
        self
    }

    /// Set the resolved option list.
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the context-source tags.
    pub fn with_context_sources(
        mut self,
        sources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.context_sources = sources.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request =
            GenerationRequest::new(Category::SupportGroups, FieldName::MeetingFrequency, "NAMI")
                .with_goal("manage depression")
                .with_options(["Weekly", "Monthly"])
                .with_context_sources(["peer support program evaluations"]);

        assert_eq!(request.category, Category::SupportGroups);
        assert_eq!(request.options.len(), 2);
        assert_eq!(request.goal_context.as_deref(), Some("manage depression"));
        assert!(!request.request_id.is_empty());
    }
}
