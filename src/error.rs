//! Garden bed errors
//!
//! The simulation and reasoning functions never fail; only operations on a
//! [`GardenBed`](crate::garden::GardenBed) can reject their input.

use crate::model::GridPosition;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("slot ({}, {}) is outside the {width}x{height} bed", .position.x, .position.y)]
    OutOfBounds {
        position: GridPosition,
        width: u32,
        height: u32,
    },

    #[error("slot ({}, {}) is already occupied by {occupant}", .position.x, .position.y)]
    SlotOccupied {
        position: GridPosition,
        occupant: String,
    },

    #[error("no planted instance with id '{0}'")]
    UnknownPlant(String),

    #[error("species '{0}' is not in the catalog")]
    UnknownSpecies(String),
}
