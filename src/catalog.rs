//! Species Catalog
//!
//! Holds the read-only species records and the relationship table for a
//! session. Loaded once from a seed JSON file, which may be either a bare
//! array of species or a document with `species` and `relationships`.
//! When no relationships are given, they are derived from each species'
//! companion and antagonist lists.

use crate::model::{Relationship, Species};
use crate::reasoning::{derive_relationships, RelationshipIndex};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Species>),
    Document {
        species: Vec<Species>,
        #[serde(default)]
        relationships: Vec<Relationship>,
    },
}

/// Species by id plus the relationship table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: FxHashMap<String, Species>,
    /// Ids in load order
    order: Vec<String>,
    relationships: Vec<Relationship>,
}

impl Catalog {
    /// Build from records; later duplicates of an id are dropped
    pub fn new(species: Vec<Species>, relationships: Vec<Relationship>) -> Self {
        let mut map = FxHashMap::default();
        let mut order = Vec::with_capacity(species.len());

        for sp in species {
            if map.contains_key(&sp.id) {
                tracing::warn!("Duplicate species '{}' in catalog, keeping first", sp.id);
                continue;
            }
            order.push(sp.id.clone());
            map.insert(sp.id.clone(), sp);
        }

        let mut catalog = Self { species: map, order, relationships };
        if catalog.relationships.is_empty() {
            catalog.relationships = derive_relationships(catalog.iter());
        }
        catalog
    }

    /// Parse catalog JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .with_context(|| "Failed to parse catalog JSON")?;

        Ok(match file {
            CatalogFile::List(species) => Self::new(species, Vec::new()),
            CatalogFile::Document { species, relationships } => Self::new(species, relationships),
        })
    }

    /// Load catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let catalog = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded catalog {:?}: {} species, {} relationships",
            path,
            catalog.len(),
            catalog.relationships.len()
        );
        Ok(catalog)
    }

    pub fn species(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.species.contains_key(id)
    }

    /// Species in load order
    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.order.iter().filter_map(|id| self.species.get(id))
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn relationship_index(&self) -> RelationshipIndex {
        RelationshipIndex::new(&self.relationships)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
