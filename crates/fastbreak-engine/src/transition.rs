//! The transition rule engine.
//!
//! Moves between stages are always permitted -- this engine annotates
//! risk, it never blocks. Rules are an explicit ordered list of named
//! `(predicate, transform)` pairs evaluated first-match-wins, so the
//! "why this outcome" of any transition is auditable and each rule is
//! independently testable.
//!
//! # Invariants
//!
//! - A transition either fully applies (next-state athlete committed and
//!   exactly one audit record appended) or returns an error with nothing
//!   changed.
//! - Risk level, badges, and advisory text are written only here and in
//!   the scenario engine.

use fastbreak_types::{Athlete, AthleteId, RiskBadge, RiskLevel, Stage, TransitionRecord};
use tracing::{debug, info};

use crate::audit::AuditLog;
use crate::error::EngineError;
use crate::store::AthleteStore;

// ---------------------------------------------------------------------------
// Advisory texts (rendered verbatim in the dashboard)
// ---------------------------------------------------------------------------

/// Advisory produced when an academy athlete jumps straight to a pro
/// league or out of the pipeline.
pub const DIRECT_JUMP_ADVISORY: &str = "Direct jump increases risk!";

/// Advisory produced for a well-prepared college-to-pro progression.
pub const SMOOTH_PROGRESSION_ADVISORY: &str = "Smooth progression. Low risk.";

/// Pro-readiness rating at or above which a college-to-pro move counts
/// as prepared.
pub const PRO_READY_THRESHOLD: u8 = 7;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A single named transition rule.
///
/// The predicate reads the athlete's state *before* the move plus the
/// target stage; the transform runs on the next-state athlete after the
/// stage has been set.
pub struct TransitionRule {
    /// Stable rule name, recorded in logs.
    pub name: &'static str,
    /// Does this rule govern the proposed move?
    matches: fn(&Athlete, Stage) -> bool,
    /// Field patch applied when the rule matches.
    transform: fn(&mut Athlete),
}

impl core::fmt::Debug for TransitionRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn academy_direct_jump_matches(athlete: &Athlete, target: Stage) -> bool {
    athlete.stage == Stage::Academy
        && matches!(
            target,
            Stage::EuroPro | Stage::NbaInternational | Stage::DropoutOther
        )
}

fn academy_direct_jump_transform(athlete: &mut Athlete) {
    athlete.risk_level = RiskLevel::High;
    athlete.risk_badges.insert(RiskBadge::Dropout);
    athlete.advisory_text = String::from(DIRECT_JUMP_ADVISORY);
}

fn college_smooth_progression_matches(athlete: &Athlete, target: Stage) -> bool {
    athlete.stage == Stage::CollegeUni
        && matches!(target, Stage::DomesticPro | Stage::EuroPro)
        && athlete.pro_readiness >= PRO_READY_THRESHOLD
}

fn college_smooth_progression_transform(athlete: &mut Athlete) {
    athlete.risk_level = RiskLevel::Low;
    athlete.risk_badges.remove(&RiskBadge::Dropout);
    athlete.advisory_text = String::from(SMOOTH_PROGRESSION_ADVISORY);
}

fn stage_move_only_matches(_athlete: &Athlete, _target: Stage) -> bool {
    true
}

fn stage_move_only_transform(_athlete: &mut Athlete) {}

/// The ordered rule table. First match wins; the final catch-all leaves
/// every field except the stage untouched.
pub const RULES: &[TransitionRule] = &[
    TransitionRule {
        name: "academy-direct-jump",
        matches: academy_direct_jump_matches,
        transform: academy_direct_jump_transform,
    },
    TransitionRule {
        name: "college-smooth-progression",
        matches: college_smooth_progression_matches,
        transform: college_smooth_progression_transform,
    },
    TransitionRule {
        name: "stage-move-only",
        matches: stage_move_only_matches,
        transform: stage_move_only_transform,
    },
];

impl TransitionRule {
    /// Whether this rule governs the proposed move.
    pub fn governs(&self, athlete: &Athlete, target: Stage) -> bool {
        (self.matches)(athlete, target)
    }

    /// Apply this rule's field patch to a next-state athlete.
    pub fn apply(&self, athlete: &mut Athlete) {
        (self.transform)(athlete);
    }
}

/// Find the first rule governing a proposed move.
///
/// Always succeeds because the rule table ends in a catch-all.
fn first_matching_rule(athlete: &Athlete, target: Stage) -> &'static TransitionRule {
    const FALLBACK: TransitionRule = TransitionRule {
        name: "stage-move-only",
        matches: stage_move_only_matches,
        transform: stage_move_only_transform,
    };
    RULES
        .iter()
        .find(|rule| rule.governs(athlete, target))
        .unwrap_or(&FALLBACK)
}

// ---------------------------------------------------------------------------
// Applying a transition
// ---------------------------------------------------------------------------

/// The result of a successfully applied transition.
#[derive(Debug, Clone)]
pub struct AppliedTransition {
    /// The athlete's committed next state.
    pub athlete: Athlete,
    /// The audit record appended for this move.
    pub record: TransitionRecord,
}

/// Propose and apply a stage transition for one athlete.
///
/// The move is always permitted. The next-state athlete is computed
/// first (stage set, then the first matching rule's patch applied); only
/// then is exactly one [`TransitionRecord`] appended and the store
/// updated, so callers never observe a partial application.
///
/// # Errors
///
/// Returns [`EngineError::AthleteNotFound`] if the id is not tracked;
/// the store and audit log are untouched in that case.
pub fn propose_transition(
    store: &mut AthleteStore,
    audit: &mut AuditLog,
    athlete_id: AthleteId,
    target: Stage,
) -> Result<AppliedTransition, EngineError> {
    let current = store
        .get(athlete_id)
        .ok_or(EngineError::AthleteNotFound(athlete_id))?;

    let from_stage = current.stage;
    let rule = first_matching_rule(current, target);

    let mut next = current.clone();
    next.stage = target;
    rule.apply(&mut next);

    debug!(
        athlete = %athlete_id,
        rule = rule.name,
        from = %from_stage,
        to = %target,
        "transition rule matched"
    );

    let record = audit.append_transition(
        athlete_id,
        from_stage,
        target,
        next.risk_level,
        next.advisory_text.clone(),
    );
    store.commit(next.clone());

    info!(
        athlete = %athlete_id,
        seq = record.seq,
        from = %from_stage,
        to = %target,
        risk = ?next.risk_level,
        "transition applied"
    );

    Ok(AppliedTransition {
        athlete: next,
        record,
    })
}
