//! Companion Scorer
//!
//! Scores a target species against its neighbours: +1 for each beneficial
//! relationship, -1 for each antagonistic one, 0 otherwise. Pairs are
//! unordered, and when the table lists a pair more than once the first
//! entry wins.

use crate::model::{Relationship, RelationshipKind, Species};
use rustc_hash::FxHashMap;

/// Companion score by scanning the relationship table
pub fn companion_score<S: AsRef<str>>(
    target_id: &str,
    neighbor_ids: &[S],
    relationships: &[Relationship],
) -> i32 {
    neighbor_ids
        .iter()
        .filter_map(|neighbor| {
            relationships
                .iter()
                .find(|rel| rel.links(target_id, neighbor.as_ref()))
        })
        .map(|rel| rel.kind.weight())
        .sum()
}

/// Hashed relationship lookup, keyed on the unordered species pair
///
/// Gives the same answers as [`companion_score`] without a table scan per
/// neighbour.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    pairs: FxHashMap<(String, String), RelationshipKind>,
}

impl RelationshipIndex {
    pub fn new(relationships: &[Relationship]) -> Self {
        let mut pairs = FxHashMap::default();
        for rel in relationships {
            pairs
                .entry(pair_key(&rel.species_a, &rel.species_b))
                .or_insert(rel.kind);
        }
        Self { pairs }
    }

    /// Build from each species' companion and antagonist lists
    ///
    /// A species listed as both companion and antagonist keeps whichever
    /// was seen first (companions are read before antagonists).
    pub fn from_species<'a>(species: impl IntoIterator<Item = &'a Species>) -> Self {
        Self::new(&derive_relationships(species))
    }

    pub fn kind(&self, a: &str, b: &str) -> Option<RelationshipKind> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    pub fn score<S: AsRef<str>>(&self, target_id: &str, neighbor_ids: &[S]) -> i32 {
        neighbor_ids
            .iter()
            .filter_map(|n| self.kind(target_id, n.as_ref()))
            .map(|k| k.weight())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Relationship table implied by species companion/antagonist lists
pub fn derive_relationships<'a>(species: impl IntoIterator<Item = &'a Species>) -> Vec<Relationship> {
    let mut relationships = Vec::new();
    for sp in species {
        for companion in &sp.companions {
            relationships.push(Relationship::new(&sp.id, companion, RelationshipKind::Beneficial));
        }
        for antagonist in &sp.antagonists {
            relationships.push(Relationship::new(&sp.id, antagonist, RelationshipKind::Antagonistic));
        }
    }
    relationships
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
