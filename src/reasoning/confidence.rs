use serde::{Deserialize, Serialize};

/// How strongly a recommendation should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Actionable,
    Warning,
    Informational,
}

impl ConfidenceLevel {
    /// Classify a 0.0-1.0 confidence score
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.7 => ConfidenceLevel::Actionable,
            s if s >= 0.4 => ConfidenceLevel::Warning,
            _ => ConfidenceLevel::Informational,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Actionable => "actionable",
            ConfidenceLevel::Warning => "warning",
            ConfidenceLevel::Informational => "informational",
        }
    }
}
