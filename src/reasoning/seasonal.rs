//! Seasonal Eligibility Checker
//!
//! Resolves a month to a season with a fixed Northern-hemisphere table;
//! the Southern hemisphere reads the table six months ahead.

use crate::model::{Season, Species};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month (0 = January) to season, Northern hemisphere
static MONTH_SEASONS: [Season; 12] = [
    Season::Winter, // Jan
    Season::Winter, // Feb
    Season::Spring, // Mar
    Season::Spring, // Apr
    Season::Spring, // May
    Season::Summer, // Jun
    Season::Summer, // Jul
    Season::Summer, // Aug
    Season::Autumn, // Sep
    Season::Autumn, // Oct
    Season::Autumn, // Nov
    Season::Winter, // Dec
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

/// Where the garden is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub hemisphere: Hemisphere,
}

impl Location {
    pub fn new(hemisphere: Hemisphere) -> Self {
        Self { hemisphere }
    }
}

/// Outcome of a sowing-window check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SowingEligibility {
    pub eligible: bool,
    pub season: Season,
    pub reason: String,
}

/// Season for a 0-based month index; indices past 11 wrap around
pub fn season_for_month(hemisphere: Hemisphere, month0: u32) -> Season {
    let shift = match hemisphere {
        Hemisphere::North => 0,
        Hemisphere::South => 6,
    };
    MONTH_SEASONS[((month0 % 12 + shift) % 12) as usize]
}

/// Can `species` be sown in `month0` (0 = January) at `location`?
pub fn is_sowing_season(species: &Species, location: &Location, month0: u32) -> SowingEligibility {
    let season = season_for_month(location.hemisphere, month0);

    if species.sowing_season.contains(&season) {
        return SowingEligibility {
            eligible: true,
            season,
            reason: format!("Currently in the {} sowing window.", season),
        };
    }

    let reason = if species.sowing_season.is_empty() {
        "No sowing window is recorded for this plant.".to_string()
    } else {
        let allowed: Vec<&str> = species.sowing_season.iter().map(|s| s.name()).collect();
        format!("Too early or late. This plant prefers {}.", allowed.join(" or "))
    };

    SowingEligibility { eligible: false, season, reason }
}

/// [`is_sowing_season`] for a calendar date
pub fn is_sowing_season_on(species: &Species, location: &Location, date: NaiveDate) -> SowingEligibility {
    is_sowing_season(species, location, date.month0())
}
