//! The append-only audit log.
//!
//! Every mutation of the population -- each individual transition and
//! each scenario batch -- appends exactly one entry here. Sequence
//! numbers are assigned by the log itself, start at 1, and are strictly
//! increasing and gapless across both entry kinds, so exported trails
//! replay deterministically.
//!
//! # Design
//!
//! - **Append-only**: entries are never modified or deleted.
//! - **One entry per user-visible event**: a scenario batch is one entry
//!   regardless of how many athletes it touched.
//! - **Log-assigned ordering**: `seq` is a counter, not a wall clock.

use fastbreak_types::{
    AthleteId, AuditEntry, RiskLevel, ScenarioBatchRecord, Stage, TransitionRecord,
};

/// Append-only, strictly ordered record of every population mutation.
#[derive(Debug, Clone)]
pub struct AuditLog {
    /// All entries, in sequence order.
    entries: Vec<AuditEntry>,
    /// The sequence number the next entry will receive.
    next_seq: u64,
}

impl AuditLog {
    /// Create a new empty log. The first entry will receive `seq` 1.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }

    /// Number of entries in the log. Only ever grows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in sequence order. Read-only and replay-safe.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The sequence number of the most recent entry, if any.
    pub fn last_seq(&self) -> Option<u64> {
        self.entries.last().map(AuditEntry::seq)
    }

    /// Claim the next sequence number.
    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = seq.saturating_add(1);
        seq
    }

    /// Append a transition record with the next sequence number.
    ///
    /// Crate-private: only the transition rule engine appends here, and
    /// only after the next-state athlete is fully computed.
    pub(crate) fn append_transition(
        &mut self,
        athlete_id: AthleteId,
        from_stage: Stage,
        to_stage: Stage,
        resulting_risk: RiskLevel,
        advisory_snapshot: String,
    ) -> TransitionRecord {
        let record = TransitionRecord {
            seq: self.take_seq(),
            athlete_id,
            from_stage,
            to_stage,
            resulting_risk,
            advisory_snapshot,
        };
        self.entries.push(AuditEntry::Transition(record.clone()));
        record
    }

    /// Append a scenario batch record with the next sequence number.
    ///
    /// One record per batch, even when `affected` is empty.
    pub(crate) fn append_scenario_batch(
        &mut self,
        scenario_name: &str,
        affected: Vec<AthleteId>,
    ) -> ScenarioBatchRecord {
        let record = ScenarioBatchRecord {
            seq: self.take_seq(),
            scenario_name: scenario_name.to_owned(),
            affected,
        };
        self.entries
            .push(AuditEntry::ScenarioBatch(record.clone()));
        record
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = AuditLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.last_seq(), None);
    }

    #[test]
    fn sequence_starts_at_one() {
        let mut log = AuditLog::new();
        let record = log.append_transition(
            AthleteId::new(),
            Stage::Academy,
            Stage::CollegeUni,
            RiskLevel::Low,
            String::new(),
        );
        assert_eq!(record.seq, 1);
        assert_eq!(log.last_seq(), Some(1));
    }

    #[test]
    fn sequence_is_gapless_across_entry_kinds() {
        let mut log = AuditLog::new();
        let id = AthleteId::new();

        let first = log.append_transition(
            id,
            Stage::Academy,
            Stage::CollegeUni,
            RiskLevel::Low,
            String::new(),
        );
        let second = log.append_scenario_batch("Global Visa Change", vec![id]);
        let third = log.append_transition(
            id,
            Stage::CollegeUni,
            Stage::DomesticPro,
            RiskLevel::Low,
            String::new(),
        );

        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_eq!(third.seq, 3);

        let seqs: Vec<u64> = log.entries().iter().map(AuditEntry::seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn batch_record_keeps_empty_affected_list() {
        let mut log = AuditLog::new();
        let record = log.append_scenario_batch("Transfer Window Slam", Vec::new());
        assert!(record.affected.is_empty());
        assert_eq!(log.len(), 1);
    }
}
