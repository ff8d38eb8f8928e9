//! Garden Simulation Core
//!
//! Deterministic plant-garden simulation and companion reasoning.
//!
//! Module layout:
//! - `model/`: species records, planted instances, observation events
//! - `catalog.rs`: species catalog loading (JSON seed files)
//! - `config.rs`: per-session settings (hemisphere, current day)
//! - `simulation/`: daily hydration/stress stepper and timeline preview
//! - `reasoning/`: companion scoring, seasonal sowing rules, explanations
//! - `forecast.rs`: harvest and yield forecasting
//! - `lifecycle.rs`: growth stage from elapsed time
//! - `diagnostics.rs`: observation catalog and its effect on a plant
//! - `garden.rs`: bounded planting grid with its own day clock

pub mod model;
pub mod error;
pub mod catalog;
pub mod config;
pub mod simulation;
pub mod reasoning;
pub mod forecast;
pub mod lifecycle;
pub mod diagnostics;
pub mod garden;

// Re-export commonly used types
pub use model::{
    GridPosition, GrowthStage, HealthStatus, PlantedInstance, Relationship, RelationshipKind,
    Season, SimDay, Species, FIRST_DAY,
};
pub use error::GardenError;
pub use catalog::Catalog;
pub use config::GardenSettings;
pub use simulation::{advance_day, advance_day_par, project, rewind_day, Projection};
pub use reasoning::{companion_score, is_sowing_season, Hemisphere, Location, RelationshipIndex};
pub use forecast::{forecast_bed, forecast_outcome, ForecastResult, QualityTier};
pub use lifecycle::{completed_stages, current_stage};
pub use diagnostics::{apply_observation, observation_patterns, ObservationPattern};
pub use garden::GardenBed;
