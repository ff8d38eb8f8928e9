use super::SimDay;
use serde::{Deserialize, Serialize};

/// Symptom category of an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Moisture,
    Fertility,
    Pests,
    Nutrient,
    Growth,
}

/// One observation recorded against a planted instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationEvent {
    pub id: String,
    pub recorded_day: SimDay,
    pub category: DiagnosticCategory,
    pub label: String,
}
