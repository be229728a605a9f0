//! The in-memory athlete store.
//!
//! [`AthleteStore`] is the exclusive owner of the tracked population.
//! Callers read through it freely, but every derived field on an
//! [`Athlete`] is mutated only by the transition rule engine or the
//! scenario engine -- the mutation surface is crate-private.
//!
//! There is no deletion API: athletes enter at session start from seed
//! data and leave only when the store itself is discarded.

use std::collections::BTreeMap;

use fastbreak_types::{Athlete, AthleteId};

/// In-memory collection of tracked athletes keyed by id.
///
/// Iteration order is id order (time-ordered UUID v7), which keeps every
/// population-wide aggregation deterministic.
#[derive(Debug, Clone, Default)]
pub struct AthleteStore {
    /// The population, keyed by athlete id.
    athletes: BTreeMap<AthleteId, Athlete>,
}

impl AthleteStore {
    /// Create a new empty store.
    pub const fn new() -> Self {
        Self {
            athletes: BTreeMap::new(),
        }
    }

    /// Seed an athlete into the store, returning their id.
    ///
    /// Seeding happens at session start; ids are freshly generated so
    /// collisions do not occur in practice.
    pub fn seed(&mut self, athlete: Athlete) -> AthleteId {
        let id = athlete.id;
        self.athletes.insert(id, athlete);
        id
    }

    /// Look up an athlete by id.
    pub fn get(&self, id: AthleteId) -> Option<&Athlete> {
        self.athletes.get(&id)
    }

    /// Whether an athlete with this id is tracked.
    pub fn contains(&self, id: AthleteId) -> bool {
        self.athletes.contains_key(&id)
    }

    /// Number of tracked athletes.
    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }

    /// Iterate the population in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.values()
    }

    /// All athlete ids, in id order.
    pub fn ids(&self) -> Vec<AthleteId> {
        self.athletes.keys().copied().collect()
    }

    /// Replace one athlete with their computed next state.
    ///
    /// Crate-private: only the transition rule engine commits here.
    pub(crate) fn commit(&mut self, athlete: Athlete) {
        self.athletes.insert(athlete.id, athlete);
    }

    /// Clone the full population for batch computation.
    ///
    /// The scenario engine computes the entire next population on the
    /// clone, then swaps it in with [`swap_population`] so callers never
    /// observe a half-applied batch.
    ///
    /// [`swap_population`]: AthleteStore::swap_population
    pub(crate) fn clone_population(&self) -> BTreeMap<AthleteId, Athlete> {
        self.athletes.clone()
    }

    /// Swap in a fully computed next population.
    pub(crate) fn swap_population(&mut self, next: BTreeMap<AthleteId, Athlete>) {
        self.athletes = next;
    }
}

#[cfg(test)]
mod tests {
    use fastbreak_types::Stage;

    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = AthleteStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn seed_then_get() {
        let mut store = AthleteStore::new();
        let id = store.seed(Athlete::new("Jo Vance", Stage::Academy));
        assert!(store.contains(id));
        assert_eq!(store.get(id).map(|a| a.name.as_str()), Some("Jo Vance"));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = AthleteStore::new();
        assert!(store.get(AthleteId::new()).is_none());
        assert!(!store.contains(AthleteId::new()));
    }

    #[test]
    fn iteration_is_id_ordered() {
        let mut store = AthleteStore::new();
        let first = store.seed(Athlete::new("A", Stage::Academy));
        let second = store.seed(Athlete::new("B", Stage::EuroPro));
        let ids = store.ids();
        // UUID v7 is time-ordered, so seed order and id order agree.
        assert_eq!(ids, vec![first, second]);
        let names: Vec<&str> = store.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn swap_population_replaces_wholesale() {
        let mut store = AthleteStore::new();
        let id = store.seed(Athlete::new("Jo Vance", Stage::Academy));

        let mut next = store.clone_population();
        if let Some(athlete) = next.get_mut(&id) {
            athlete.stage = Stage::CollegeUni;
        }
        store.swap_population(next);

        assert_eq!(store.get(id).map(|a| a.stage), Some(Stage::CollegeUni));
        assert_eq!(store.len(), 1);
    }
}
