//! The [`Session`] facade.
//!
//! One session per dashboard sitting: it owns the athlete store, the
//! audit log, the workflow ledger, and the vote tally, and routes every
//! UI operation to the right engine. Stage and scenario names cross
//! this boundary as strings; ids and stages are typed everywhere below.

use chrono::{DateTime, Utc};
use fastbreak_engine::{
    apply_scenario, propose_transition, summarize, AppliedTransition, AthleteStore, AuditLog,
    EngineError, StageGraph,
};
use fastbreak_ledger::{NoteOutcome, VoteTally, WorkflowLedger};
use fastbreak_types::{
    ActionItem, Athlete, AthleteId, AuditEntry, BatchReport, BoardSummary, VoteCounters, VoteKind,
};

use crate::error::SessionError;
use crate::replay;

/// A single-sitting session over one tracked population.
///
/// The session keeps a snapshot of every athlete as seeded, so the
/// current population can always be rebuilt from the snapshot plus the
/// audit trail.
#[derive(Debug, Default)]
pub struct Session {
    /// The live population.
    store: AthleteStore,
    /// Append-only record of every population mutation.
    audit: AuditLog,
    /// Per-athlete action items, notes, and comments.
    workflow: WorkflowLedger,
    /// Per-athlete sentiment counters.
    votes: VoteTally,
    /// Athletes exactly as they were seeded, for replay.
    seed_snapshot: Vec<Athlete>,
}

impl Session {
    /// Create a new empty session.
    pub const fn new() -> Self {
        Self {
            store: AthleteStore::new(),
            audit: AuditLog::new(),
            workflow: WorkflowLedger::new(),
            votes: VoteTally::new(),
            seed_snapshot: Vec::new(),
        }
    }

    /// Create a session pre-populated with seed athletes.
    pub fn with_seed(athletes: impl IntoIterator<Item = Athlete>) -> Self {
        let mut session = Self::new();
        for athlete in athletes {
            let _ = session.seed(athlete);
        }
        session
    }

    // -----------------------------------------------------------------------
    // Population
    // -----------------------------------------------------------------------

    /// Add an athlete to the tracked population, returning their id.
    pub fn seed(&mut self, athlete: Athlete) -> AthleteId {
        self.seed_snapshot.push(athlete.clone());
        self.store.seed(athlete)
    }

    /// Look up an athlete's current state.
    pub fn athlete(&self, id: AthleteId) -> Option<&Athlete> {
        self.store.get(id)
    }

    /// Read access to the live population.
    pub const fn store(&self) -> &AthleteStore {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Engine operations
    // -----------------------------------------------------------------------

    /// Move an athlete to the stage named by a dashboard label.
    ///
    /// The label is resolved against the stage graph first; the move
    /// itself is always permitted and risk-annotated by the rule
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] for an unknown label or an
    /// untracked athlete id; nothing changes in that case.
    pub fn propose_transition(
        &mut self,
        athlete_id: AthleteId,
        target_label: &str,
    ) -> Result<AppliedTransition, SessionError> {
        let target = StageGraph::resolve(target_label)?;
        Ok(propose_transition(
            &mut self.store,
            &mut self.audit,
            athlete_id,
            target,
        )?)
    }

    /// Apply a named shock scenario across the whole population.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] for a name outside the catalog;
    /// nothing changes in that case.
    pub fn apply_scenario(&mut self, name: &str) -> Result<BatchReport, SessionError> {
        Ok(apply_scenario(&mut self.store, &mut self.audit, name)?)
    }

    /// Compose the boardroom summary for the current population.
    pub fn summarize(&self) -> BoardSummary {
        summarize(&self.store)
    }

    // -----------------------------------------------------------------------
    // Workflow operations
    // -----------------------------------------------------------------------

    /// Open a new action item for a tracked athlete.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when the athlete is not
    /// tracked.
    pub fn add_action(
        &mut self,
        athlete_id: AthleteId,
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<ActionItem, SessionError> {
        self.require_athlete(athlete_id)?;
        Ok(self
            .workflow
            .add_action(athlete_id, description, assignee, deadline))
    }

    /// Resolve the action item at `index` in an athlete's list.
    ///
    /// Resolving an already-resolved item is an idempotent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] for an untracked athlete and
    /// [`SessionError::Ledger`] for an out-of-range index.
    pub fn resolve_action(
        &mut self,
        athlete_id: AthleteId,
        index: usize,
    ) -> Result<ActionItem, SessionError> {
        self.require_athlete(athlete_id)?;
        Ok(self.workflow.resolve_action(athlete_id, index)?)
    }

    /// Record a note for a tracked athlete. Blank text is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when the athlete is not
    /// tracked.
    pub fn add_note(
        &mut self,
        athlete_id: AthleteId,
        text: &str,
    ) -> Result<NoteOutcome, SessionError> {
        self.require_athlete(athlete_id)?;
        Ok(self.workflow.add_note(athlete_id, text))
    }

    /// Record a comment for a tracked athlete. Blank text is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when the athlete is not
    /// tracked.
    pub fn add_comment(
        &mut self,
        athlete_id: AthleteId,
        text: &str,
    ) -> Result<NoteOutcome, SessionError> {
        self.require_athlete(athlete_id)?;
        Ok(self.workflow.add_comment(athlete_id, text))
    }

    /// Record one sentiment vote and return the updated counters.
    ///
    /// Votes are purely additive and never fail: no voter identity, no
    /// deduplication, no athlete check.
    pub fn vote(&mut self, athlete_id: AthleteId, kind: VoteKind) -> VoteCounters {
        self.votes.vote(athlete_id, kind)
    }

    /// Read access to the workflow ledger.
    pub const fn workflow(&self) -> &WorkflowLedger {
        &self.workflow
    }

    /// Read access to the vote tally.
    pub const fn votes(&self) -> &VoteTally {
        &self.votes
    }

    // -----------------------------------------------------------------------
    // Audit
    // -----------------------------------------------------------------------

    /// The full audit trail, in sequence order.
    pub fn audit_log(&self) -> &[AuditEntry] {
        self.audit.entries()
    }

    /// Rebuild the population from the seed snapshot and the audit
    /// trail.
    ///
    /// The result always equals the live population; this is the
    /// round-trip guarantee exports rely on.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if the trail no longer matches
    /// the catalog (it cannot for trails produced by this session).
    pub fn replayed_population(&self) -> Result<AthleteStore, SessionError> {
        replay::replay(self.seed_snapshot.iter().cloned(), self.audit.entries())
    }

    fn require_athlete(&self, athlete_id: AthleteId) -> Result<(), SessionError> {
        if self.store.contains(athlete_id) {
            Ok(())
        } else {
            Err(SessionError::Engine(EngineError::AthleteNotFound(
                athlete_id,
            )))
        }
    }
}
