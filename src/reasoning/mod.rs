//! Companion and seasonal reasoning
//!
//! - `companion.rs`: signed neighbour score from a relationship table
//! - `seasonal.rs`: month/hemisphere to season, sowing eligibility
//! - `confidence.rs`: confidence score tiers
//! - `explanation.rs`: explainable payloads for reasoning outcomes

pub mod companion;
pub mod seasonal;
pub mod confidence;
pub mod explanation;

pub use companion::{companion_score, derive_relationships, RelationshipIndex};
pub use seasonal::{is_sowing_season, is_sowing_season_on, season_for_month, Hemisphere, Location, SowingEligibility};
pub use confidence::ConfidenceLevel;
pub use explanation::{explain_sowing, ExplanationPayload};
