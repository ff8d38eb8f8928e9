//! Day-Advance Stepper
//!
//! Moves every planted instance forward (or back) one simulated day.
//! The session clock is passed in and returned; there is no global day.
//!
//! Advance, per instance:
//! 1. hydration drops by 15 (floored at 0)
//! 2. below 20 hydration stress rises by 20; above 80 it falls by 5
//! 3. health is re-derived from stress
//!
//! Rewind adds the 15 hydration back and undoes the stress change by
//! looking at the restored hydration. Near the 0/100 clamps this guess can
//! pick the wrong branch, so advance followed by rewind is not always the
//! identity. The approximation is kept as-is.
//!
//! Dead and Harvested plants are frozen: neither direction touches them.

use crate::model::{clamp_level, HealthStatus, PlantedInstance, SimDay, FIRST_DAY};
use rayon::prelude::*;

/// Hydration lost per simulated day
pub const DAILY_HYDRATION_LOSS: f64 = 15.0;
/// Below this hydration a plant gains stress
pub const DRY_THRESHOLD: f64 = 20.0;
/// Above this hydration a plant recovers from stress
pub const SATURATED_THRESHOLD: f64 = 80.0;
/// Stress gained per day while dry
pub const DRY_STRESS_GAIN: f64 = 20.0;
/// Stress recovered per day while well watered
pub const WET_STRESS_RECOVERY: f64 = 5.0;

/// Advance one instance by a day
pub fn advance_instance(plant: &mut PlantedInstance) {
    if plant.health.is_terminal() {
        return;
    }

    let hydration = clamp_level(plant.hydration - DAILY_HYDRATION_LOSS);
    let stress = if hydration < DRY_THRESHOLD {
        clamp_level(plant.stress + DRY_STRESS_GAIN)
    } else if hydration > SATURATED_THRESHOLD {
        clamp_level(plant.stress - WET_STRESS_RECOVERY)
    } else {
        plant.stress
    };

    plant.hydration = hydration;
    plant.stress = stress;
    plant.health = HealthStatus::from_stress(stress);
}

/// Rewind one instance by a day (approximate inverse of [`advance_instance`])
pub fn rewind_instance(plant: &mut PlantedInstance) {
    if plant.health.is_terminal() {
        return;
    }

    let hydration = clamp_level(plant.hydration + DAILY_HYDRATION_LOSS);
    let before = hydration - DAILY_HYDRATION_LOSS;
    let stress = if before < DRY_THRESHOLD {
        clamp_level(plant.stress - DRY_STRESS_GAIN)
    } else if before > SATURATED_THRESHOLD {
        clamp_level(plant.stress + WET_STRESS_RECOVERY)
    } else {
        plant.stress
    };

    plant.hydration = hydration;
    plant.stress = stress;
    plant.health = HealthStatus::from_stress(stress);
}

/// Advance all instances by one day and return the new day
pub fn advance_day(instances: &mut [PlantedInstance], current_day: SimDay) -> SimDay {
    for plant in instances.iter_mut() {
        advance_instance(plant);
    }

    let next_day = current_day.saturating_add(1);
    tracing::debug!("Advanced to day {} ({} plants)", next_day, instances.len());
    next_day
}

/// Parallel [`advance_day`] for large beds
///
/// Each instance is independent, so the result is identical to the
/// sequential version.
pub fn advance_day_par(instances: &mut [PlantedInstance], current_day: SimDay) -> SimDay {
    instances.par_iter_mut().for_each(advance_instance);

    let next_day = current_day.saturating_add(1);
    tracing::debug!("Advanced to day {} ({} plants, parallel)", next_day, instances.len());
    next_day
}

/// Rewind all instances by one day and return the new day
///
/// At day 1 (or below) nothing changes and day 1 is returned.
pub fn rewind_day(instances: &mut [PlantedInstance], current_day: SimDay) -> SimDay {
    if current_day <= FIRST_DAY {
        tracing::debug!("Rewind ignored: already at day {}", FIRST_DAY);
        return FIRST_DAY;
    }

    for plant in instances.iter_mut() {
        rewind_instance(plant);
    }

    let previous_day = current_day - 1;
    tracing::debug!("Rewound to day {} ({} plants)", previous_day, instances.len());
    previous_day
}
