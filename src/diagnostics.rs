//! Observation Diagnostics
//!
//! A fixed table of symptoms a gardener can report, each with a diagnosis,
//! a prescription and an impact on the plant's levels. Species with known
//! pests or diseases get one extra Pests pattern per entry.
//!
//! Impact semantics: hydration and n/p/k are the level the symptom implies
//! and replace the current value; stress is added on top.

use crate::model::{clamp_level, DiagnosticCategory, HealthStatus, ObservationEvent, PlantedInstance, SimDay, Species};
use serde::{Deserialize, Serialize};

/// Stress added by a species-specific pest sighting
const SPECIES_PEST_STRESS: f64 = 20.0;
/// Stress added by a species-specific disease sighting
const SPECIES_DISEASE_STRESS: f64 = 30.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationImpact {
    pub hydration: Option<f64>,
    pub stress: Option<f64>,
    pub n: Option<f64>,
    pub p: Option<f64>,
    pub k: Option<f64>,
}

impl ObservationImpact {
    const fn none() -> Self {
        Self { hydration: None, stress: None, n: None, p: None, k: None }
    }

    const fn stress(amount: f64) -> Self {
        Self { stress: Some(amount), ..Self::none() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPattern {
    pub id: String,
    pub category: DiagnosticCategory,
    pub label: String,
    /// The reason
    pub diagnostic: String,
    /// The remedy
    pub prescription: String,
    pub impact: ObservationImpact,
}

struct BasePattern {
    id: &'static str,
    category: DiagnosticCategory,
    label: &'static str,
    diagnostic: &'static str,
    prescription: &'static str,
    impact: ObservationImpact,
}

impl From<&BasePattern> for ObservationPattern {
    fn from(base: &BasePattern) -> Self {
        Self {
            id: base.id.to_string(),
            category: base.category,
            label: base.label.to_string(),
            diagnostic: base.diagnostic.to_string(),
            prescription: base.prescription.to_string(),
            impact: base.impact,
        }
    }
}

// ============================================================================
// BUILT-IN OBSERVATION PATTERNS
// ============================================================================

static BASE_PATTERNS: &[BasePattern] = &[
    BasePattern {
        id: "obs_moisture_droop",
        category: DiagnosticCategory::Moisture,
        label: "Drooping/Wilting Leaves",
        diagnostic: "Critical loss of turgor pressure due to severe dehydration or high transpiration.",
        prescription: "Provide a deep, slow soak at the base immediately. Apply mulch to retain moisture.",
        impact: ObservationImpact { hydration: Some(10.0), stress: Some(30.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_moisture_yellow_mold",
        category: DiagnosticCategory::Moisture,
        label: "Yellowing Leaves / Moldy Soil",
        diagnostic: "Anaerobic conditions at the root zone (Root Rot). Oxygen is being blocked by excess water.",
        prescription: "Cease watering immediately. Aerate the soil surface and ensure drainage holes are clear.",
        impact: ObservationImpact { hydration: Some(95.0), stress: Some(40.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_fertility_nettles",
        category: DiagnosticCategory::Fertility,
        label: "Abundant Stinging Nettles nearby",
        diagnostic: "Indicators of high nitrogen and phosphorus availability in the soil.",
        prescription: "Soil is currently nitrogen-rich. Avoid adding nitrogen-heavy fertilizer for now.",
        impact: ObservationImpact { n: Some(85.0), p: Some(70.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_fertility_lavender",
        category: DiagnosticCategory::Fertility,
        label: "Lavender flourishing in vicinity",
        diagnostic: "Thrives in well-drained, sandy, and nitrogen-poor (lean) alkaline soil.",
        prescription: "Consider supplementing with organic compost or blood meal to boost nitrogen levels.",
        impact: ObservationImpact { n: Some(25.0), k: Some(40.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_pest_aphids",
        category: DiagnosticCategory::Pests,
        label: "Clusters of small green/black insects",
        diagnostic: "Aphid colony sucking plant sap and excreting honeydew (attracts ants/sooty mold).",
        prescription: "Spray with neem oil or a strong stream of water. Introduce ladybugs as natural predators.",
        impact: ObservationImpact::stress(25.0),
    },
    BasePattern {
        id: "obs_pest_fungal",
        category: DiagnosticCategory::Pests,
        label: "White powdery spots on leaves",
        diagnostic: "Powdery Mildew caused by high humidity and poor air circulation.",
        prescription: "Improve spacing. Prune affected leaves. Use an organic milk/baking soda spray.",
        impact: ObservationImpact::stress(35.0),
    },
    BasePattern {
        id: "obs_nutrient_purple",
        category: DiagnosticCategory::Nutrient,
        label: "Purple tint on undersides/stems",
        diagnostic: "Phosphorus (P) deficiency. Common in cold soils where P-uptake is limited.",
        prescription: "Apply rock phosphate or bone meal. Check soil pH as acidity can lock out phosphorus.",
        impact: ObservationImpact { p: Some(15.0), stress: Some(10.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_nutrient_brown_edge",
        category: DiagnosticCategory::Nutrient,
        label: "Brown/Burnt leaf edges (Scorching)",
        diagnostic: "Potassium (K) deficiency. Affects the plant's ability to regulate water and resist disease.",
        prescription: "Apply wood ash or kelp meal. Ensure consistent watering as K is mobile in water.",
        impact: ObservationImpact { k: Some(15.0), stress: Some(10.0), ..ObservationImpact::none() },
    },
    BasePattern {
        id: "obs_growth_stunted",
        category: DiagnosticCategory::Growth,
        label: "Stunted growth / Small leaves",
        diagnostic: "General stress or resource depletion. Likely insufficient light or root binding.",
        prescription: "Evaluate sun exposure. Consider a liquid \"booster\" feeding (seaweed extract).",
        impact: ObservationImpact::stress(20.0),
    },
    BasePattern {
        id: "obs_growth_leggy",
        category: DiagnosticCategory::Growth,
        label: "Long, weak, \"leggy\" stems",
        diagnostic: "Etiolation. The plant is searching for light, sacrificing structural integrity for height.",
        prescription: "Move to a brighter location or add supplemental lighting immediately.",
        impact: ObservationImpact::stress(15.0),
    },
];

/// The built-in patterns
pub fn observation_patterns() -> Vec<ObservationPattern> {
    BASE_PATTERNS.iter().map(ObservationPattern::from).collect()
}

/// Built-in patterns plus one per known pest and disease of `species`
pub fn extended_observations(species: Option<&Species>) -> Vec<ObservationPattern> {
    let mut patterns = observation_patterns();
    let Some(species) = species else {
        return patterns;
    };

    for (index, pest) in species.common_pests.iter().enumerate() {
        patterns.push(ObservationPattern {
            id: format!("obs_pest_spec_{}", index),
            category: DiagnosticCategory::Pests,
            label: format!("Evidence of {}", pest),
            diagnostic: format!(
                "Observable presence or damage consistent with {}, a common threat to this species.",
                pest
            ),
            prescription: format!(
                "Consult the Grimoire for specific organic remedies for {}. Generally includes hand-removal or neem applications.",
                pest
            ),
            impact: ObservationImpact::stress(SPECIES_PEST_STRESS),
        });
    }

    for (index, disease) in species.common_diseases.iter().enumerate() {
        patterns.push(ObservationPattern {
            id: format!("obs_disease_spec_{}", index),
            category: DiagnosticCategory::Pests,
            label: format!("Signs of {}", disease),
            diagnostic: format!(
                "Visual symptoms align with {}. This pathogen often targets this plant family under specific humidity/temp levels.",
                disease
            ),
            prescription: "Isolate the plant if possible. Prune diseased tissue with sterilized tools. Improve air circulation."
                .to_string(),
            impact: ObservationImpact::stress(SPECIES_DISEASE_STRESS),
        });
    }

    patterns
}

/// Patterns in one category
pub fn patterns_in_category(patterns: &[ObservationPattern], category: DiagnosticCategory) -> Vec<&ObservationPattern> {
    patterns.iter().filter(|p| p.category == category).collect()
}

/// Find a pattern by id, including species-specific ones
pub fn diagnostic_by_id(id: &str, species: Option<&Species>) -> Option<ObservationPattern> {
    extended_observations(species).into_iter().find(|p| p.id == id)
}

/// Record `pattern` against `plant` on `day` and apply its impact
pub fn apply_observation(plant: &mut PlantedInstance, pattern: &ObservationPattern, day: SimDay) {
    plant.observations.push(ObservationEvent {
        id: format!("{}-obs-{}", plant.id, plant.observations.len() + 1),
        recorded_day: day,
        category: pattern.category,
        label: pattern.label.clone(),
    });

    let impact = &pattern.impact;
    if let Some(h) = impact.hydration {
        plant.hydration = clamp_level(h);
    }
    if let Some(s) = impact.stress {
        plant.stress = clamp_level(plant.stress + s);
    }
    if let Some(n) = impact.n {
        plant.nutrients.n = clamp_level(n);
    }
    if let Some(p) = impact.p {
        plant.nutrients.p = clamp_level(p);
    }
    if let Some(k) = impact.k {
        plant.nutrients.k = clamp_level(k);
    }

    if !plant.health.is_terminal() {
        plant.health = HealthStatus::from_stress(plant.stress);
    }

    tracing::debug!("Observation '{}' recorded on {} (day {})", pattern.id, plant.id, day);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridPosition;

    fn tomato() -> Species {
        let mut sp = Species::new("tomato", "Tomato");
        sp.common_pests = vec!["Hornworm".to_string(), "Whitefly".to_string()];
        sp.common_diseases = vec!["Early Blight".to_string()];
        sp
    }

    #[test]
    fn test_builtin_table() {
        let patterns = observation_patterns();
        assert_eq!(patterns.len(), 10);
        for category in [
            DiagnosticCategory::Moisture,
            DiagnosticCategory::Fertility,
            DiagnosticCategory::Pests,
            DiagnosticCategory::Nutrient,
            DiagnosticCategory::Growth,
        ] {
            assert_eq!(patterns_in_category(&patterns, category).len(), 2);
        }
    }

    #[test]
    fn test_species_patterns_are_appended() {
        let sp = tomato();
        let patterns = extended_observations(Some(&sp));
        assert_eq!(patterns.len(), 13);
        assert_eq!(patterns_in_category(&patterns, DiagnosticCategory::Pests).len(), 5);

        let blight = diagnostic_by_id("obs_disease_spec_0", Some(&sp)).unwrap();
        assert_eq!(blight.label, "Signs of Early Blight");
        assert_eq!(blight.impact.stress, Some(30.0));

        assert!(diagnostic_by_id("obs_pest_spec_1", None).is_none());
        assert_eq!(diagnostic_by_id("obs_pest_spec_1", Some(&sp)).unwrap().label, "Evidence of Whitefly");
    }

    #[test]
    fn test_apply_moisture_observation() {
        let mut plant = PlantedInstance::new("p1", "tomato", GridPosition::new(0, 0), 1);
        plant.stress = 60.0;
        let droop = diagnostic_by_id("obs_moisture_droop", None).unwrap();

        apply_observation(&mut plant, &droop, 4);

        assert_eq!(plant.hydration, 10.0);
        assert_eq!(plant.stress, 90.0);
        assert_eq!(plant.health, HealthStatus::Dying);
        assert_eq!(plant.observations.len(), 1);
        assert_eq!(plant.observations[0].recorded_day, 4);
        assert_eq!(plant.observations[0].category, DiagnosticCategory::Moisture);
    }

    #[test]
    fn test_apply_clamps_and_sets_nutrients() {
        let mut plant = PlantedInstance::new("p1", "tomato", GridPosition::new(0, 0), 1);
        plant.stress = 95.0;
        let nettles = diagnostic_by_id("obs_fertility_nettles", None).unwrap();
        let aphids = diagnostic_by_id("obs_pest_aphids", None).unwrap();

        apply_observation(&mut plant, &nettles, 2);
        apply_observation(&mut plant, &aphids, 3);

        assert_eq!(plant.nutrients.n, 85.0);
        assert_eq!(plant.nutrients.p, 70.0);
        assert_eq!(plant.nutrients.k, 50.0);
        assert_eq!(plant.stress, 100.0);
        assert_eq!(plant.pest_observation_count(), 1);
        assert_eq!(plant.observations[1].id, "p1-obs-2");
    }
}
