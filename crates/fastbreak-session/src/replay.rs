//! Audit trail replay.
//!
//! Rebuilds a population by re-running an audit trail against seed
//! data. Transitions go back through the live rule engine; scenario
//! batches re-apply the recorded patch to exactly the recorded ids,
//! without re-evaluating eligibility. Starting from the same seed and
//! the same trail, replay therefore converges on the same population
//! the live session holds.

use fastbreak_engine::{propose_transition, replay_batch, AthleteStore, AuditLog};
use fastbreak_types::{Athlete, AuditEntry};

use crate::error::SessionError;

/// Rebuild a population from seed athletes and an audit trail.
///
/// Entries are applied in order. The scratch audit log produced while
/// re-running transitions is discarded; only the rebuilt store is
/// returned.
///
/// # Errors
///
/// Returns [`SessionError::Engine`] when an entry references an athlete
/// missing from the seed data or a scenario name no longer in the
/// catalog.
pub fn replay<I>(seed: I, entries: &[AuditEntry]) -> Result<AthleteStore, SessionError>
where
    I: IntoIterator<Item = Athlete>,
{
    let mut store = AthleteStore::new();
    for athlete in seed {
        let _ = store.seed(athlete);
    }

    let mut scratch = AuditLog::new();
    for entry in entries {
        match entry {
            AuditEntry::Transition(record) => {
                let _ = propose_transition(
                    &mut store,
                    &mut scratch,
                    record.athlete_id,
                    record.to_stage,
                )?;
            }
            AuditEntry::ScenarioBatch(record) => replay_batch(&mut store, record)?,
        }
    }

    Ok(store)
}
