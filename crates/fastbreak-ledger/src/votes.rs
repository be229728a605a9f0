//! Additive sentiment counters per athlete.
//!
//! Votes are purely additive: no voter identity is tracked, no
//! deduplication happens, and repeated calls from the same caller
//! accumulate without bound. The product behaves this way deliberately;
//! identity-based deduplication would be a product decision, not a bug
//! fix to slip in here.

use std::collections::BTreeMap;

use fastbreak_types::{AthleteId, VoteCounters, VoteKind};

/// Per-athlete vote counters.
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    /// Counters per athlete, created on first vote.
    counters: BTreeMap<AthleteId, VoteCounters>,
}

impl VoteTally {
    /// Create a new empty tally.
    pub const fn new() -> Self {
        Self {
            counters: BTreeMap::new(),
        }
    }

    /// Record one vote and return the athlete's updated counters.
    ///
    /// Counters are created on demand; the increment saturates rather
    /// than wraps.
    pub fn vote(&mut self, athlete_id: AthleteId, kind: VoteKind) -> VoteCounters {
        let counters = self
            .counters
            .entry(athlete_id)
            .or_insert_with(|| VoteCounters::zero(athlete_id));
        counters.increment(kind);
        *counters
    }

    /// Current counters for an athlete; zeroed if nobody has voted yet.
    pub fn counters_for(&self, athlete_id: AthleteId) -> VoteCounters {
        self.counters
            .get(&athlete_id)
            .copied()
            .unwrap_or_else(|| VoteCounters::zero(athlete_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvoted_athlete_has_zero_counters() {
        let tally = VoteTally::new();
        let athlete = AthleteId::new();
        let counters = tally.counters_for(athlete);
        assert_eq!((counters.up, counters.down, counters.flag), (0, 0, 0));
    }

    #[test]
    fn repeated_votes_accumulate_without_dedup() {
        let mut tally = VoteTally::new();
        let athlete = AthleteId::new();

        let _ = tally.vote(athlete, VoteKind::Up);
        let _ = tally.vote(athlete, VoteKind::Up);
        let counters = tally.vote(athlete, VoteKind::Up);

        assert_eq!(counters.up, 3);
        assert_eq!(counters.down, 0);
    }

    #[test]
    fn kinds_count_independently() {
        let mut tally = VoteTally::new();
        let athlete = AthleteId::new();

        let _ = tally.vote(athlete, VoteKind::Up);
        let _ = tally.vote(athlete, VoteKind::Down);
        let counters = tally.vote(athlete, VoteKind::Flag);

        assert_eq!((counters.up, counters.down, counters.flag), (1, 1, 1));
    }

    #[test]
    fn athletes_are_tallied_separately() {
        let mut tally = VoteTally::new();
        let first = AthleteId::new();
        let second = AthleteId::new();

        let _ = tally.vote(first, VoteKind::Up);
        let _ = tally.vote(second, VoteKind::Flag);

        assert_eq!(tally.counters_for(first).up, 1);
        assert_eq!(tally.counters_for(first).flag, 0);
        assert_eq!(tally.counters_for(second).flag, 1);
    }
}
