//! Planted instance state
//!
//! A `PlantedInstance` is created when a seed goes into a bed slot, mutated
//! once per simulated day by the stepper and by observations, and dropped
//! when the plant is harvested or removed.

use super::{clamp_level, ObservationEvent, DiagnosticCategory, SimDay};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stress above which a plant is Dying
pub const DYING_STRESS: f64 = 80.0;
/// Stress above which a plant is Stressed
pub const STRESSED_STRESS: f64 = 50.0;
/// Stress above which a plant is Wilting
pub const WILTING_STRESS: f64 = 20.0;

/// Health status shown on a plant card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Thriving,
    Wilting,
    Stressed,
    Dying,
    Dead,
    #[serde(rename = "Pest Infestation")]
    PestInfestation,
    Overwatered,
    Harvested,
}

impl HealthStatus {
    /// Classify a stress level (monotonic thresholds)
    pub fn from_stress(stress: f64) -> Self {
        match stress {
            s if s > DYING_STRESS => HealthStatus::Dying,
            s if s > STRESSED_STRESS => HealthStatus::Stressed,
            s if s > WILTING_STRESS => HealthStatus::Wilting,
            _ => HealthStatus::Thriving,
        }
    }

    /// Dead and Harvested plants no longer respond to the simulation
    pub fn is_terminal(&self) -> bool {
        matches!(self, HealthStatus::Dead | HealthStatus::Harvested)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Thriving => "Thriving",
            HealthStatus::Wilting => "Wilting",
            HealthStatus::Stressed => "Stressed",
            HealthStatus::Dying => "Dying",
            HealthStatus::Dead => "Dead",
            HealthStatus::PestInfestation => "Pest Infestation",
            HealthStatus::Overwatered => "Overwatered",
            HealthStatus::Harvested => "Harvested",
        }
    }
}

/// Grid slot within a bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    #[serde(rename = "gridX")]
    pub x: i32,
    #[serde(rename = "gridY")]
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours in east, west, south, north order
    ///
    /// Slots that would fall outside the `i32` range are left out.
    pub fn orthogonal_neighbors(&self) -> SmallVec<[GridPosition; 4]> {
        [
            self.x.checked_add(1).map(|x| GridPosition::new(x, self.y)),
            self.x.checked_sub(1).map(|x| GridPosition::new(x, self.y)),
            self.y.checked_add(1).map(|y| GridPosition::new(self.x, y)),
            self.y.checked_sub(1).map(|y| GridPosition::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Soil nutrient levels (0-100 each)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl Default for Nutrients {
    fn default() -> Self {
        Self { n: 50.0, p: 50.0, k: 50.0 }
    }
}

/// Simulation state of one plant in a bed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantedInstance {
    pub id: String,
    #[serde(default)]
    pub bed_id: String,
    #[serde(rename = "catalogId")]
    pub species_id: String,
    #[serde(flatten)]
    pub position: GridPosition,
    #[serde(rename = "plantedDate")]
    pub planted_day: SimDay,
    pub hydration: f64,
    #[serde(rename = "stressLevel")]
    pub stress: f64,
    #[serde(default)]
    pub nutrients: Nutrients,
    #[serde(rename = "healthStatus")]
    pub health: HealthStatus,
    #[serde(default)]
    pub observations: Vec<ObservationEvent>,
}

impl PlantedInstance {
    /// Fresh planting: fully hydrated, unstressed, balanced nutrients
    pub fn new(
        id: impl Into<String>,
        species_id: impl Into<String>,
        position: GridPosition,
        planted_day: SimDay,
    ) -> Self {
        Self {
            id: id.into(),
            bed_id: String::new(),
            species_id: species_id.into(),
            position,
            planted_day,
            hydration: 100.0,
            stress: 0.0,
            nutrients: Nutrients::default(),
            health: HealthStatus::Healthy,
            observations: Vec::new(),
        }
    }

    /// Set hydration and stress (clamped) and re-derive health
    pub fn set_levels(&mut self, hydration: f64, stress: f64) {
        self.hydration = clamp_level(hydration);
        self.stress = clamp_level(stress);
        self.health = HealthStatus::from_stress(self.stress);
    }

    /// Number of recorded pest/pathogen observations
    pub fn pest_observation_count(&self) -> usize {
        self.observations
            .iter()
            .filter(|o| o.category == DiagnosticCategory::Pests)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_thresholds() {
        assert_eq!(HealthStatus::from_stress(0.0), HealthStatus::Thriving);
        assert_eq!(HealthStatus::from_stress(20.0), HealthStatus::Thriving);
        assert_eq!(HealthStatus::from_stress(20.5), HealthStatus::Wilting);
        assert_eq!(HealthStatus::from_stress(50.0), HealthStatus::Wilting);
        assert_eq!(HealthStatus::from_stress(51.0), HealthStatus::Stressed);
        assert_eq!(HealthStatus::from_stress(80.0), HealthStatus::Stressed);
        assert_eq!(HealthStatus::from_stress(81.0), HealthStatus::Dying);
        assert_eq!(HealthStatus::from_stress(100.0), HealthStatus::Dying);
    }

    #[test]
    fn test_neighbors_in_order() {
        let neighbors = GridPosition::new(3, 7).orthogonal_neighbors();
        assert_eq!(
            neighbors.as_slice(),
            &[
                GridPosition::new(4, 7),
                GridPosition::new(2, 7),
                GridPosition::new(3, 8),
                GridPosition::new(3, 6),
            ]
        );
    }

    #[test]
    fn test_neighbors_at_i32_extremes() {
        let east_edge = GridPosition::new(i32::MAX, 0).orthogonal_neighbors();
        assert_eq!(east_edge.len(), 3);
        assert!(!east_edge.iter().any(|p| p.x == i32::MIN));

        let corner = GridPosition::new(i32::MIN, i32::MIN).orthogonal_neighbors();
        assert_eq!(
            corner.as_slice(),
            &[GridPosition::new(i32::MIN + 1, i32::MIN), GridPosition::new(i32::MIN, i32::MIN + 1)]
        );
    }

    #[test]
    fn test_set_levels_clamps() {
        let mut plant = PlantedInstance::new("p1", "tomato", GridPosition::new(0, 0), 1);
        plant.set_levels(130.0, -4.0);
        assert_eq!(plant.hydration, 100.0);
        assert_eq!(plant.stress, 0.0);
        assert_eq!(plant.health, HealthStatus::Thriving);
    }

    #[test]
    fn test_planted_json_shape() {
        let json = r#"{
            "id": "plant-basil-1-2-3",
            "bedId": "main-garden",
            "catalogId": "basil",
            "gridX": 1,
            "gridY": 2,
            "plantedDate": 3,
            "hydration": 70,
            "stressLevel": 10,
            "healthStatus": "Pest Infestation"
        }"#;

        let plant: PlantedInstance = serde_json::from_str(json).unwrap();
        assert_eq!(plant.position, GridPosition::new(1, 2));
        assert_eq!(plant.health, HealthStatus::PestInfestation);
        assert_eq!(plant.nutrients, Nutrients::default());
        assert!(plant.observations.is_empty());
    }
}
