//! Outcome Forecaster
//!
//! Predicts harvest timing, yield probability and quality for one planted
//! instance from its current levels, its neighbours' synergy and its
//! observation history.
//!
//! Yield probability starts at 100 and each risk deducts from it:
//!
//! | Condition              | Change         | Risk factor                               |
//! |------------------------|----------------|-------------------------------------------|
//! | stress > 20            | -stress x 0.5  | High current stress (N%)                  |
//! | hydration < 40         | -15            | Chronic dehydration detected              |
//! | hydration > 90         | -10            | Risk of root suffocation (Overwatering)   |
//! | synergy > 5            | +10            |                                           |
//! | synergy < -5           | -15            | Antagonistic plant proximity              |
//! | N pest observations    | -5 x N         | Historical pathogen pressure (N events)   |
//!
//! The total is clamped to 0-100 before picking a quality tier.

use crate::catalog::Catalog;
use crate::model::{GridPosition, PlantedInstance, Species};
use crate::reasoning::RelationshipIndex;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const BASE_YIELD: f64 = 100.0;

/// Growth slows by 25% under heavy stress
const STRESS_DELAY: f64 = 1.25;
/// Growth slows by 15% when dry
const DRY_DELAY: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    Premium,
    Standard,
    Poor,
    Failure,
}

impl QualityTier {
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p > 85.0 => QualityTier::Premium,
            p if p > 40.0 => QualityTier::Standard,
            p if p > 10.0 => QualityTier::Poor,
            _ => QualityTier::Failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Total growth days, stretched by the growth modifier
    pub predicted_harvest_day: u32,
    /// 0-100
    pub yield_probability: u32,
    pub quality: QualityTier,
    pub risk_factors: Vec<String>,
}

impl ForecastResult {
    /// Neutral answer when the species or its stages are unknown
    pub fn insufficient_data() -> Self {
        Self {
            predicted_harvest_day: 0,
            yield_probability: 50,
            quality: QualityTier::Standard,
            risk_factors: vec!["Insufficient species data for prediction".to_string()],
        }
    }
}

/// Growth-time multiplier; stress takes precedence over dryness
pub fn growth_modifier(stress: f64, hydration: f64) -> f64 {
    if stress > 50.0 {
        STRESS_DELAY
    } else if hydration < 30.0 {
        DRY_DELAY
    } else {
        1.0
    }
}

/// Forecast one plant
pub fn forecast_outcome(
    plant: &PlantedInstance,
    species: Option<&Species>,
    synergy_score: i32,
) -> ForecastResult {
    let species = match species {
        Some(sp) if !sp.stages.is_empty() => sp,
        _ => return ForecastResult::insufficient_data(),
    };

    let stress = plant.stress;
    let hydration = plant.hydration;
    let mut probability = BASE_YIELD;
    let mut risks = Vec::new();

    if stress > 20.0 {
        probability -= stress * 0.5;
        risks.push(format!("High current stress ({}%)", stress.round()));
    }

    if hydration < 40.0 {
        probability -= 15.0;
        risks.push("Chronic dehydration detected".to_string());
    } else if hydration > 90.0 {
        probability -= 10.0;
        risks.push("Risk of root suffocation (Overwatering)".to_string());
    }

    if synergy_score > 5 {
        probability += 10.0;
    } else if synergy_score < -5 {
        probability -= 15.0;
        risks.push("Antagonistic plant proximity".to_string());
    }

    let pest_events = plant.pest_observation_count();
    if pest_events > 0 {
        probability -= pest_events as f64 * 5.0;
        risks.push(format!("Historical pathogen pressure ({} events)", pest_events));
    }

    let probability = probability.clamp(0.0, 100.0);
    let total_days = species.total_growth_days() as f64;

    ForecastResult {
        predicted_harvest_day: (total_days * growth_modifier(stress, hydration)).round() as u32,
        yield_probability: probability.round() as u32,
        quality: QualityTier::from_probability(probability),
        risk_factors: risks,
    }
}

/// Forecast every plant in a bed in parallel
///
/// Synergy for each plant comes from the species in its four orthogonal
/// neighbour slots. Results are in the same order as `instances`.
pub fn forecast_bed(
    instances: &[PlantedInstance],
    catalog: &Catalog,
    relationships: &RelationshipIndex,
) -> Vec<ForecastResult> {
    let occupancy: FxHashMap<GridPosition, &str> = instances
        .iter()
        .map(|p| (p.position, p.species_id.as_str()))
        .collect();

    instances
        .par_iter()
        .map(|plant| {
            let neighbors: SmallVec<[&str; 4]> = plant
                .position
                .orthogonal_neighbors()
                .into_iter()
                .filter_map(|pos| occupancy.get(&pos).copied())
                .collect();
            let synergy = relationships.score(&plant.species_id, neighbors.as_slice());
            forecast_outcome(plant, catalog.species(&plant.species_id), synergy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiagnosticCategory, GrowthStage, ObservationEvent};

    fn species() -> Species {
        Species::new("tomato", "Tomato").with_stages(vec![
            GrowthStage::new("germination", 10),
            GrowthStage::new("vegetative", 30),
            GrowthStage::new("fruiting", 40),
        ])
    }

    fn plant(hydration: f64, stress: f64) -> PlantedInstance {
        let mut p = PlantedInstance::new("p", "tomato", GridPosition::new(0, 0), 1);
        p.hydration = hydration;
        p.stress = stress;
        p
    }

    fn pest_event(i: usize) -> ObservationEvent {
        ObservationEvent {
            id: format!("obs-{}", i),
            recorded_day: 2,
            category: DiagnosticCategory::Pests,
            label: "Aphids".to_string(),
        }
    }

    #[test]
    fn test_healthy_plant_is_premium() {
        let result = forecast_outcome(&plant(70.0, 0.0), Some(&species()), 0);
        assert_eq!(result.yield_probability, 100);
        assert_eq!(result.quality, QualityTier::Premium);
        assert_eq!(result.predicted_harvest_day, 80);
        assert!(result.risk_factors.is_empty());
    }

    #[test]
    fn test_stressed_and_dry() {
        // 100 - 45 - 15 = 40, which is not above the Standard threshold
        let result = forecast_outcome(&plant(10.0, 90.0), Some(&species()), 0);
        assert_eq!(result.yield_probability, 40);
        assert_eq!(result.quality, QualityTier::Poor);
        assert_eq!(result.risk_factors[0], "High current stress (90%)");
        assert_eq!(result.risk_factors[1], "Chronic dehydration detected");
        // stress wins over dryness: 80 * 1.25
        assert_eq!(result.predicted_harvest_day, 100);
    }

    #[test]
    fn test_clamps_to_zero_and_fails() {
        let mut p = plant(10.0, 90.0);
        p.observations = (0..10).map(pest_event).collect();

        let result = forecast_outcome(&p, Some(&species()), -6);
        assert_eq!(result.yield_probability, 0);
        assert_eq!(result.quality, QualityTier::Failure);
        assert!(result.risk_factors.contains(&"Antagonistic plant proximity".to_string()));
        assert!(result.risk_factors.contains(&"Historical pathogen pressure (10 events)".to_string()));
    }

    #[test]
    fn test_overwatering_and_synergy_bonus() {
        let result = forecast_outcome(&plant(95.0, 0.0), Some(&species()), 6);
        assert_eq!(result.yield_probability, 100);
        assert_eq!(result.risk_factors, vec!["Risk of root suffocation (Overwatering)".to_string()]);

        let result = forecast_outcome(&plant(95.0, 30.0), Some(&species()), 0);
        // 100 - 15 - 10
        assert_eq!(result.yield_probability, 75);
        assert_eq!(result.quality, QualityTier::Standard);
    }

    #[test]
    fn test_synergy_boundaries_are_neutral() {
        let base = forecast_outcome(&plant(70.0, 0.0), Some(&species()), 0);
        let at_plus_five = forecast_outcome(&plant(70.0, 30.0), Some(&species()), 5);
        let at_minus_five = forecast_outcome(&plant(70.0, 30.0), Some(&species()), -5);

        assert_eq!(base.yield_probability, 100);
        // 100 - 15 with no synergy adjustment either way
        assert_eq!(at_plus_five.yield_probability, 85);
        assert_eq!(at_minus_five.yield_probability, 85);
        assert!(!at_minus_five.risk_factors.contains(&"Antagonistic plant proximity".to_string()));

        let at_minus_six = forecast_outcome(&plant(70.0, 30.0), Some(&species()), -6);
        assert_eq!(at_minus_six.yield_probability, 70);
    }

    #[test]
    fn test_bed_forecast_at_grid_extremes() {
        let catalog = Catalog::new(vec![species()], Vec::new());
        let mut edge = plant(70.0, 0.0);
        edge.position = GridPosition::new(i32::MAX, i32::MIN);
        let mut inner = plant(70.0, 0.0);
        inner.id = "q".to_string();
        inner.position = GridPosition::new(i32::MAX - 1, i32::MIN);

        let results = forecast_bed(&[edge, inner], &catalog, &RelationshipIndex::default());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.yield_probability == 100));
    }

    #[test]
    fn test_dry_delay() {
        let result = forecast_outcome(&plant(20.0, 10.0), Some(&species()), 0);
        assert_eq!(result.predicted_harvest_day, 92);
    }

    #[test]
    fn test_missing_species_falls_back() {
        assert_eq!(forecast_outcome(&plant(50.0, 0.0), None, 0), ForecastResult::insufficient_data());

        let bare = Species::new("tomato", "Tomato");
        let result = forecast_outcome(&plant(50.0, 0.0), Some(&bare), 0);
        assert_eq!(result.yield_probability, 50);
        assert_eq!(result.quality, QualityTier::Standard);
        assert_eq!(result.risk_factors.len(), 1);
    }

    #[test]
    fn test_quality_tiers() {
        assert_eq!(QualityTier::from_probability(86.0), QualityTier::Premium);
        assert_eq!(QualityTier::from_probability(85.0), QualityTier::Standard);
        assert_eq!(QualityTier::from_probability(41.0), QualityTier::Standard);
        assert_eq!(QualityTier::from_probability(11.0), QualityTier::Poor);
        assert_eq!(QualityTier::from_probability(10.0), QualityTier::Failure);
    }
}
