//! Lifecycle Stage Calculator
//!
//! A plant's stage is read off elapsed time rather than driven by events:
//! walk the species' ordered stages accumulating their durations and stop
//! at the first one that has not finished yet. Once every stage has run,
//! the plant stays in the last one.

use crate::model::{GrowthStage, SimDay};
use chrono::{DateTime, Utc};

/// Stage reported when a species has no stages
pub const DEFAULT_STAGE_ID: &str = "seed";

/// Whole days between planting and `now`, never negative
pub fn days_elapsed(planted_day: SimDay, now: SimDay) -> u32 {
    now.saturating_sub(planted_day)
}

/// Whole days between two instants (floored), never negative
pub fn days_elapsed_since(planted_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - planted_at).num_days();
    days.clamp(0, u32::MAX as i64) as u32
}

/// Stage id for a plant that has grown for `elapsed` days
pub fn stage_after(stages: &[GrowthStage], elapsed: u32) -> &str {
    let mut accumulated: u32 = 0;
    for stage in stages {
        accumulated = accumulated.saturating_add(stage.duration_days);
        if elapsed < accumulated {
            return &stage.id;
        }
    }

    stages.last().map(|s| s.id.as_str()).unwrap_or(DEFAULT_STAGE_ID)
}

/// Stage ids fully completed after `elapsed` days
pub fn stages_completed_after(stages: &[GrowthStage], elapsed: u32) -> Vec<&str> {
    let mut accumulated: u32 = 0;
    let mut completed = Vec::new();
    for stage in stages {
        accumulated = accumulated.saturating_add(stage.duration_days);
        if elapsed >= accumulated {
            completed.push(stage.id.as_str());
        }
    }
    completed
}

/// Current stage on simulation day `now`
pub fn current_stage(planted_day: SimDay, stages: &[GrowthStage], now: SimDay) -> &str {
    stage_after(stages, days_elapsed(planted_day, now))
}

/// Completed stages on simulation day `now`
pub fn completed_stages(planted_day: SimDay, stages: &[GrowthStage], now: SimDay) -> Vec<&str> {
    stages_completed_after(stages, days_elapsed(planted_day, now))
}

/// Current stage at wall-clock instant `now`
pub fn current_stage_at(planted_at: DateTime<Utc>, stages: &[GrowthStage], now: DateTime<Utc>) -> &str {
    stage_after(stages, days_elapsed_since(planted_at, now))
}

/// Completed stages at wall-clock instant `now`
pub fn completed_stages_at(
    planted_at: DateTime<Utc>,
    stages: &[GrowthStage],
    now: DateTime<Utc>,
) -> Vec<&str> {
    stages_completed_after(stages, days_elapsed_since(planted_at, now))
}

/// Stage record (not just the id) on simulation day `now`
pub fn current_stage_record(planted_day: SimDay, stages: &[GrowthStage], now: SimDay) -> Option<&GrowthStage> {
    let id = current_stage(planted_day, stages, now);
    stages.iter().find(|s| s.id == id)
}
