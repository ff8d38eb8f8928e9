//! Species catalog records
//!
//! Field names follow the catalog JSON (`sowingSeason`, `durationDays`, ...)
//! so a seed file deserializes straight into these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four sowing seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn all() -> &'static [Season] {
        &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One growth stage in a species' ordered lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub duration_days: u32,
    /// Days between waterings while in this stage
    #[serde(default)]
    pub water_frequency_days: u32,
}

impl GrowthStage {
    pub fn new(id: impl Into<String>, duration_days: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            duration_days,
            water_frequency_days: 0,
        }
    }
}

/// Read-only species record, loaded once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub stages: Vec<GrowthStage>,
    #[serde(default)]
    pub sowing_season: Vec<Season>,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub antagonists: Vec<String>,
    #[serde(default, rename = "common_pests")]
    pub common_pests: Vec<String>,
    #[serde(default, rename = "common_diseases")]
    pub common_diseases: Vec<String>,
    /// Confidence in this record (0.0-1.0)
    #[serde(default, rename = "confidence_score")]
    pub confidence_score: f64,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Species {
    /// Minimal record with no stages, seasons or neighbours
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scientific_name: None,
            stages: Vec::new(),
            sowing_season: Vec::new(),
            companions: Vec::new(),
            antagonists: Vec::new(),
            common_pests: Vec::new(),
            common_diseases: Vec::new(),
            confidence_score: 0.0,
            sources: Vec::new(),
        }
    }

    pub fn with_stages(mut self, stages: Vec<GrowthStage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_sowing_seasons(mut self, seasons: &[Season]) -> Self {
        self.sowing_season = seasons.to_vec();
        self
    }

    /// Sum of all stage durations
    pub fn total_growth_days(&self) -> u32 {
        self.stages.iter().map(|s| s.duration_days).sum()
    }
}

/// Kind of companion relationship between two species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Beneficial,
    Antagonistic,
    Neutral,
}

impl RelationshipKind {
    /// Contribution of one neighbour to a companion score
    pub fn weight(&self) -> i32 {
        match self {
            RelationshipKind::Beneficial => 1,
            RelationshipKind::Antagonistic => -1,
            RelationshipKind::Neutral => 0,
        }
    }
}

/// Unordered species pair with a relationship kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "source_plant_id")]
    pub species_a: String,
    #[serde(rename = "target_plant_id")]
    pub species_b: String,
    #[serde(rename = "relationship")]
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(a: impl Into<String>, b: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            species_a: a.into(),
            species_b: b.into(),
            kind,
        }
    }

    /// True if this relationship links `x` and `y` in either order
    pub fn links(&self, x: &str, y: &str) -> bool {
        (self.species_a == x && self.species_b == y) || (self.species_a == y && self.species_b == x)
    }
}
