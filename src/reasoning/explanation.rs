//! Explanation payloads
//!
//! Wraps a reasoning outcome into the three-level structure the inspector
//! panel renders: a one-line summary, the reasoning and rules behind it,
//! and the raw facts and sources.

use super::seasonal::SowingEligibility;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationPayload {
    pub decision_id: String,
    pub action: String,
    /// 0.0-1.0
    pub confidence_score: f64,
    pub summary: String,
    pub detailed: DetailedExplanation,
    pub technical: TechnicalExplanation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedExplanation {
    pub reasoning: Vec<String>,
    pub rules_applied: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalExplanation {
    pub facts_used: Vec<String>,
    pub sources: Vec<String>,
}

impl ExplanationPayload {
    /// Summary is the first reason, or a placeholder when there is none
    pub fn new(
        decision_id: impl Into<String>,
        action: impl Into<String>,
        confidence_score: f64,
        reasons: Vec<String>,
        rules: Vec<String>,
        facts: Vec<String>,
        sources: Vec<String>,
    ) -> Self {
        let summary = reasons
            .first()
            .cloned()
            .unwrap_or_else(|| "No summary available.".to_string());

        Self {
            decision_id: decision_id.into(),
            action: action.into(),
            confidence_score,
            summary,
            detailed: DetailedExplanation { reasoning: reasons, rules_applied: rules },
            technical: TechnicalExplanation { facts_used: facts, sources },
        }
    }
}

/// Explain a sowing-window decision made at `decided_at`
pub fn explain_sowing(
    eligibility: &SowingEligibility,
    confidence: f64,
    sources: &[String],
    decided_at: DateTime<Utc>,
) -> ExplanationPayload {
    let action = if eligibility.eligible { "allow_sow" } else { "block_sow" };

    ExplanationPayload::new(
        format!("sow-{}", decided_at.timestamp_millis()),
        action,
        confidence,
        vec![eligibility.reason.clone()],
        vec![
            "rule_sowing_season_match".to_string(),
            "rule_climate_safety".to_string(),
        ],
        vec![format!("is_eligible = {}", eligibility.eligible)],
        sources.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Season;
    use chrono::TimeZone;

    #[test]
    fn test_explain_blocked_sowing() {
        let eligibility = SowingEligibility {
            eligible: false,
            season: Season::Winter,
            reason: "Too early or late. This plant prefers Spring.".to_string(),
        };
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let payload = explain_sowing(&eligibility, 0.8, &["rhs".to_string()], at);

        assert_eq!(payload.decision_id, "sow-1700000000123");
        assert_eq!(payload.action, "block_sow");
        assert_eq!(payload.summary, eligibility.reason);
        assert_eq!(payload.detailed.rules_applied.len(), 2);
        assert_eq!(payload.technical.facts_used, vec!["is_eligible = false".to_string()]);
        assert_eq!(payload.technical.sources, vec!["rhs".to_string()]);
    }

    #[test]
    fn test_empty_reasons_get_placeholder_summary() {
        let payload = ExplanationPayload::new("d1", "noop", 0.2, vec![], vec![], vec![], vec![]);
        assert_eq!(payload.summary, "No summary available.");
    }
}
