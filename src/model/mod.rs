//! Plain data types shared by every simulation and reasoning module
//!
//! - `species.rs`: read-only catalog records (stages, seasons, relationships)
//! - `planted.rs`: mutable per-plant simulation state
//! - `observation.rs`: user-recorded symptom events

pub mod species;
pub mod planted;
pub mod observation;

pub use species::{GrowthStage, Relationship, RelationshipKind, Season, Species};
pub use planted::{GridPosition, HealthStatus, Nutrients, PlantedInstance};
pub use observation::{DiagnosticCategory, ObservationEvent};

/// Integer simulation day. Day 1 is the first day of a session.
pub type SimDay = u32;

/// Lowest day the session clock can hold
pub const FIRST_DAY: SimDay = 1;

/// Clamp a 0-100 level (hydration, stress, nutrients)
pub fn clamp_level(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
