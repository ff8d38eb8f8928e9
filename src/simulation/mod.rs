//! Simulation over planted instances
//!
//! - `stepper.rs`: advance/rewind one simulated day
//! - `preview.rs`: non-mutating N-day projection for the timeline scrubber

pub mod stepper;
pub mod preview;

pub use stepper::{advance_day, advance_day_par, advance_instance, rewind_day, rewind_instance};
pub use preview::{project, Projection};
