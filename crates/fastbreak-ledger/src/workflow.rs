//! The per-athlete workflow ledger: action items, notes, and comments.
//!
//! These are independent per-athlete logs consulted by the advisory
//! composer and rendered in the dashboard's workflow panels. They never
//! feed back into risk derivation.
//!
//! # Invariants
//!
//! - Action items append unconditionally -- duplicates are permitted.
//! - `Open -> Resolved` is one-way; resolving an already-resolved item
//!   is an idempotent no-op, not an error.
//! - Blank note/comment text is silently ignored rather than rejected;
//!   this "ignore rather than reject" policy is part of the product
//!   behavior and must be preserved.
//! - `deadline` is descriptive data only; nothing here schedules or
//!   enforces it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fastbreak_types::{ActionItem, ActionStatus, AthleteId, NoteEntry};
use tracing::info;

use crate::error::LedgerError;

/// What happened to a note or comment submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOutcome {
    /// The text was recorded.
    Recorded,
    /// The text was blank and silently ignored.
    Ignored,
}

/// Per-athlete action items, notes, and comments.
#[derive(Debug, Clone, Default)]
pub struct WorkflowLedger {
    /// Action items per athlete, in creation order.
    actions: BTreeMap<AthleteId, Vec<ActionItem>>,
    /// Free-form notes per athlete, in creation order.
    notes: BTreeMap<AthleteId, Vec<NoteEntry>>,
    /// Discussion comments per athlete, in creation order.
    comments: BTreeMap<AthleteId, Vec<NoteEntry>>,
}

impl WorkflowLedger {
    /// Create a new empty ledger.
    pub const fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
            notes: BTreeMap::new(),
            comments: BTreeMap::new(),
        }
    }

    /// Append a new open action item for an athlete.
    ///
    /// No duplicate check is performed: submitting the same description
    /// twice yields two items.
    pub fn add_action(
        &mut self,
        athlete_id: AthleteId,
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> ActionItem {
        let item = ActionItem::new(athlete_id, description, assignee, deadline);
        info!(athlete = %athlete_id, item = %item.id, "action item added");
        self.actions.entry(athlete_id).or_default().push(item.clone());
        item
    }

    /// Resolve the action item at `index` in an athlete's list.
    ///
    /// Resolving an already-resolved item is an idempotent no-op: the
    /// item is returned as `Resolved` both times and the second call is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ActionNotFound`] when the index is out of
    /// range for the athlete (including athletes with no items at all).
    pub fn resolve_action(
        &mut self,
        athlete_id: AthleteId,
        index: usize,
    ) -> Result<ActionItem, LedgerError> {
        let item = self
            .actions
            .get_mut(&athlete_id)
            .and_then(|items| items.get_mut(index))
            .ok_or(LedgerError::ActionNotFound {
                athlete: athlete_id,
                index,
            })?;

        if item.status == ActionStatus::Open {
            item.status = ActionStatus::Resolved;
            info!(athlete = %athlete_id, item = %item.id, "action item resolved");
        }
        Ok(item.clone())
    }

    /// Append a note for an athlete. Blank text is silently ignored.
    pub fn add_note(&mut self, athlete_id: AthleteId, text: &str) -> NoteOutcome {
        Self::append_entry(&mut self.notes, athlete_id, text)
    }

    /// Append a comment for an athlete. Blank text is silently ignored.
    pub fn add_comment(&mut self, athlete_id: AthleteId, text: &str) -> NoteOutcome {
        Self::append_entry(&mut self.comments, athlete_id, text)
    }

    /// All action items for an athlete, in creation order.
    pub fn actions_for(&self, athlete_id: AthleteId) -> &[ActionItem] {
        self.actions
            .get(&athlete_id)
            .map_or(&[], Vec::as_slice)
    }

    /// All notes for an athlete, in creation order.
    pub fn notes_for(&self, athlete_id: AthleteId) -> &[NoteEntry] {
        self.notes.get(&athlete_id).map_or(&[], Vec::as_slice)
    }

    /// All comments for an athlete, in creation order.
    pub fn comments_for(&self, athlete_id: AthleteId) -> &[NoteEntry] {
        self.comments.get(&athlete_id).map_or(&[], Vec::as_slice)
    }

    /// Number of open action items for an athlete.
    pub fn open_action_count(&self, athlete_id: AthleteId) -> usize {
        self.actions_for(athlete_id)
            .iter()
            .filter(|item| item.status == ActionStatus::Open)
            .count()
    }

    fn append_entry(
        log: &mut BTreeMap<AthleteId, Vec<NoteEntry>>,
        athlete_id: AthleteId,
        text: &str,
    ) -> NoteOutcome {
        if text.trim().is_empty() {
            return NoteOutcome::Ignored;
        }
        log.entry(athlete_id).or_default().push(NoteEntry::new(text));
        NoteOutcome::Recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_is_empty() {
        let ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();
        assert!(ledger.actions_for(athlete).is_empty());
        assert!(ledger.notes_for(athlete).is_empty());
        assert!(ledger.comments_for(athlete).is_empty());
    }

    #[test]
    fn add_action_appends_open_item() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();

        let item = ledger.add_action(athlete, "Call the agent", "Coach D", None);
        assert_eq!(item.status, ActionStatus::Open);
        assert_eq!(ledger.actions_for(athlete).len(), 1);
        assert_eq!(ledger.open_action_count(athlete), 1);
    }

    #[test]
    fn duplicate_actions_are_permitted() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();

        let first = ledger.add_action(athlete, "Call the agent", "Coach D", None);
        let second = ledger.add_action(athlete, "Call the agent", "Coach D", None);

        assert_ne!(first.id, second.id);
        assert_eq!(ledger.actions_for(athlete).len(), 2);
    }

    #[test]
    fn resolve_action_marks_resolved() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();
        let _ = ledger.add_action(athlete, "Book flights", "Ops", None);

        let resolved = ledger.resolve_action(athlete, 0);
        assert_eq!(
            resolved.map(|item| item.status).ok(),
            Some(ActionStatus::Resolved)
        );
        assert_eq!(ledger.open_action_count(athlete), 0);
    }

    #[test]
    fn resolve_action_is_idempotent() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();
        let _ = ledger.add_action(athlete, "Book flights", "Ops", None);

        let first = ledger.resolve_action(athlete, 0);
        let second = ledger.resolve_action(athlete, 0);

        assert_eq!(
            first.map(|item| item.status).ok(),
            Some(ActionStatus::Resolved)
        );
        assert_eq!(
            second.map(|item| item.status).ok(),
            Some(ActionStatus::Resolved)
        );
    }

    #[test]
    fn resolve_out_of_range_index_is_an_error() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();
        let _ = ledger.add_action(athlete, "Book flights", "Ops", None);

        let result = ledger.resolve_action(athlete, 5);
        assert!(matches!(
            result,
            Err(LedgerError::ActionNotFound { index: 5, .. })
        ));
    }

    #[test]
    fn resolve_for_unknown_athlete_is_an_error() {
        let mut ledger = WorkflowLedger::new();
        let result = ledger.resolve_action(AthleteId::new(), 0);
        assert!(matches!(result, Err(LedgerError::ActionNotFound { .. })));
    }

    #[test]
    fn notes_record_non_blank_text() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();

        let outcome = ledger.add_note(athlete, "Strong showing at trials.");
        assert_eq!(outcome, NoteOutcome::Recorded);
        assert_eq!(
            ledger
                .notes_for(athlete)
                .first()
                .map(|entry| entry.text.as_str()),
            Some("Strong showing at trials.")
        );
    }

    #[test]
    fn blank_notes_are_ignored_not_rejected() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();

        assert_eq!(ledger.add_note(athlete, ""), NoteOutcome::Ignored);
        assert_eq!(ledger.add_note(athlete, "   "), NoteOutcome::Ignored);
        assert_eq!(ledger.add_comment(athlete, "\t\n"), NoteOutcome::Ignored);
        assert!(ledger.notes_for(athlete).is_empty());
        assert!(ledger.comments_for(athlete).is_empty());
    }

    #[test]
    fn notes_and_comments_are_separate_logs() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();

        let _ = ledger.add_note(athlete, "Scout note.");
        let _ = ledger.add_comment(athlete, "Board comment.");

        assert_eq!(ledger.notes_for(athlete).len(), 1);
        assert_eq!(ledger.comments_for(athlete).len(), 1);
    }

    #[test]
    fn deadline_is_stored_but_inert() {
        let mut ledger = WorkflowLedger::new();
        let athlete = AthleteId::new();
        let past = Utc::now().checked_sub_days(chrono::Days::new(30));

        let item = ledger.add_action(athlete, "Renew visa", "Ops", past);
        // A long-past deadline changes nothing: the item stays open
        // until someone resolves it.
        assert_eq!(item.status, ActionStatus::Open);
        assert_eq!(ledger.open_action_count(athlete), 1);
    }
}
