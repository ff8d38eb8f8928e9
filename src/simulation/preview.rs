//! Scrub preview
//!
//! Projects a plant's hydration and stress a number of days ahead without
//! touching its state. This is a display curve (hydration decays by 15%
//! per day, compounding), not a replay of the stepper.

use crate::model::{clamp_level, PlantedInstance};

/// Fraction of hydration kept per projected day
const DAILY_RETENTION: f64 = 0.85;
/// Projected hydration below which the preview adds stress
const PREVIEW_DRY_THRESHOLD: f64 = 20.0;
/// Stress added per projected day once dry
const PREVIEW_STRESS_PER_DAY: f64 = 5.0;

/// Projected levels after `days`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub hydration: f64,
    pub stress: f64,
}

/// Project `plant` forward by `days` days
pub fn project(plant: &PlantedInstance, days: u32) -> Projection {
    let exponent = i32::try_from(days).unwrap_or(i32::MAX);
    let decayed = plant.hydration * DAILY_RETENTION.powi(exponent);

    let extra_stress = if days > 0 && decayed < PREVIEW_DRY_THRESHOLD {
        days as f64 * PREVIEW_STRESS_PER_DAY
    } else {
        0.0
    };

    Projection {
        hydration: clamp_level(decayed.round()),
        stress: clamp_level((plant.stress + extra_stress).round()),
    }
}
