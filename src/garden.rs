//! Garden Bed
//!
//! An in-memory rectangular bed of planting slots with its own session
//! clock. Planting checks bounds and occupancy; the day controls drive
//! the stepper over every plant in the bed.

use crate::catalog::Catalog;
use crate::error::GardenError;
use crate::forecast::{forecast_outcome, ForecastResult};
use crate::model::{GridPosition, PlantedInstance, SimDay, FIRST_DAY};
use crate::reasoning::RelationshipIndex;
use crate::simulation::{advance_day, rewind_day};
use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub struct GardenBed {
    id: String,
    width: u32,
    height: u32,
    current_day: SimDay,
    plants: Vec<PlantedInstance>,
}

impl GardenBed {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self::starting_on(id, width, height, FIRST_DAY)
    }

    /// Empty bed whose clock starts on `day` (at least day 1)
    pub fn starting_on(id: impl Into<String>, width: u32, height: u32, day: SimDay) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            current_day: day.max(FIRST_DAY),
            plants: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_day(&self) -> SimDay {
        self.current_day
    }

    pub fn plants(&self) -> &[PlantedInstance] {
        &self.plants
    }

    pub fn plants_mut(&mut self) -> &mut [PlantedInstance] {
        &mut self.plants
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn plant_at(&self, position: GridPosition) -> Option<&PlantedInstance> {
        self.plants.iter().find(|p| p.position == position)
    }

    pub fn plant(&self, id: &str) -> Option<&PlantedInstance> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn plant_mut(&mut self, id: &str) -> Option<&mut PlantedInstance> {
        self.plants.iter_mut().find(|p| p.id == id)
    }

    /// Plant a seed of `species_id` at `position` on the current day
    ///
    /// Returns the new plant's id.
    pub fn plant_seed(&mut self, species_id: &str, position: GridPosition) -> Result<String, GardenError> {
        if !self.contains(position) {
            return Err(GardenError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }

        if let Some(occupant) = self.plant_at(position) {
            return Err(GardenError::SlotOccupied {
                position,
                occupant: occupant.id.clone(),
            });
        }

        let id = format!(
            "plant-{}-{}-{}-{}",
            species_id, position.x, position.y, self.current_day
        );
        let mut plant = PlantedInstance::new(id.clone(), species_id, position, self.current_day);
        plant.bed_id = self.id.clone();
        self.plants.push(plant);

        tracing::debug!("Planted {} at ({}, {}) on day {}", species_id, position.x, position.y, self.current_day);
        Ok(id)
    }

    /// [`plant_seed`](Self::plant_seed), rejecting species missing from `catalog`
    pub fn plant_from_catalog(
        &mut self,
        catalog: &Catalog,
        species_id: &str,
        position: GridPosition,
    ) -> Result<String, GardenError> {
        if !catalog.contains(species_id) {
            return Err(GardenError::UnknownSpecies(species_id.to_string()));
        }
        self.plant_seed(species_id, position)
    }

    /// Remove a plant (harvested or pulled up)
    pub fn remove(&mut self, id: &str) -> Result<PlantedInstance, GardenError> {
        let index = self
            .plants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GardenError::UnknownPlant(id.to_string()))?;
        Ok(self.plants.remove(index))
    }

    /// Species ids in the four orthogonal slots around `position`
    pub fn neighbor_species(&self, position: GridPosition) -> SmallVec<[&str; 4]> {
        position
            .orthogonal_neighbors()
            .into_iter()
            .filter_map(|pos| self.plant_at(pos))
            .map(|p| p.species_id.as_str())
            .collect()
    }

    /// Companion score for placing `species_id` at `position`
    pub fn synergy_at(&self, species_id: &str, position: GridPosition, relationships: &RelationshipIndex) -> i32 {
        let neighbors = self.neighbor_species(position);
        relationships.score(species_id, neighbors.as_slice())
    }

    /// Forecast one planted instance using its current neighbours
    pub fn forecast(&self, id: &str, catalog: &Catalog, relationships: &RelationshipIndex) -> Option<ForecastResult> {
        let plant = self.plant(id)?;
        let synergy = self.synergy_at(&plant.species_id, plant.position, relationships);
        Some(forecast_outcome(plant, catalog.species(&plant.species_id), synergy))
    }

    /// Advance the bed by one day
    pub fn advance(&mut self) -> SimDay {
        self.current_day = advance_day(&mut self.plants, self.current_day);
        self.current_day
    }

    /// Rewind the bed by one day (no-op on day 1)
    pub fn rewind(&mut self) -> SimDay {
        self.current_day = rewind_day(&mut self.plants, self.current_day);
        self.current_day
    }
}
