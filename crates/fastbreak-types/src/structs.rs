//! Core entity structs for the Fastbreak pipeline engine.
//!
//! Covers the athlete record, audit records, workflow items, vote
//! counters, and the boardroom summary. Every derived field on
//! [`Athlete`] is written only by the engine crates -- callers hold
//! these types as data, never as mutation surfaces.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    ActionStatus, MarketSegment, MarketState, RiskBadge, RiskLevel, Stage, VoteKind,
};
use crate::ids::{ActionItemId, AthleteId};

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Maximum valuation score (scores are 0 to 100).
pub const MAX_VALUATION: u8 = 100;

/// Maximum pro-readiness rating (ratings are 0 to 10).
pub const MAX_PRO_READINESS: u8 = 10;

// ---------------------------------------------------------------------------
// Athlete
// ---------------------------------------------------------------------------

/// An athlete tracked through the career pipeline.
///
/// Exclusively owned by the athlete store. `risk_level`, `risk_badges`,
/// `advisory_text`, and `market_state` are rule-derived: the transition
/// rule engine and scenario engine are the only writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Athlete {
    /// Stable identity.
    pub id: AthleteId,
    /// Display name.
    pub name: String,
    /// Current pipeline stage.
    pub stage: Stage,
    /// Rule-derived severity classification.
    pub risk_level: RiskLevel,
    /// Rule-derived risk tags.
    pub risk_badges: BTreeSet<RiskBadge>,
    /// Current transfer-market state.
    pub market_state: MarketState,
    /// Scouting valuation, 0 to 100.
    pub valuation_score: u8,
    /// Number of standing offers.
    pub offer_count: u32,
    /// Interest per market segment.
    pub interest_breakdown: BTreeMap<MarketSegment, u32>,
    /// Latest rule-generated advisory text. Empty when no rule has fired.
    pub advisory_text: String,
    /// Coach-assessed readiness for professional play, 0 to 10.
    pub pro_readiness: u8,
    /// Public-relations exposure rating. Values above 2 surface in the
    /// boardroom summary.
    pub pr_risk: u8,
}

impl Athlete {
    /// Create an athlete at the given stage with neutral derived state.
    ///
    /// Risk is `Low` with no badges, the market is `Open`, and the
    /// advisory text is empty until a rule fires.
    pub fn new(name: impl Into<String>, stage: Stage) -> Self {
        Self {
            id: AthleteId::new(),
            name: name.into(),
            stage,
            risk_level: RiskLevel::Low,
            risk_badges: BTreeSet::new(),
            market_state: MarketState::Open,
            valuation_score: 0,
            offer_count: 0,
            interest_breakdown: BTreeMap::new(),
            advisory_text: String::new(),
            pro_readiness: 0,
            pr_risk: 0,
        }
    }

    /// Set the valuation score, clamped to the 0--100 range.
    #[must_use]
    pub fn with_valuation(mut self, score: u8) -> Self {
        self.valuation_score = score.min(MAX_VALUATION);
        self
    }

    /// Set the pro-readiness rating, clamped to the 0--10 range.
    #[must_use]
    pub fn with_pro_readiness(mut self, rating: u8) -> Self {
        self.pro_readiness = rating.min(MAX_PRO_READINESS);
        self
    }

    /// Set the standing offer count.
    #[must_use]
    pub const fn with_offers(mut self, offers: u32) -> Self {
        self.offer_count = offers;
        self
    }

    /// Set the market state.
    #[must_use]
    pub const fn with_market_state(mut self, state: MarketState) -> Self {
        self.market_state = state;
        self
    }

    /// Set the public-relations exposure rating.
    #[must_use]
    pub const fn with_pr_risk(mut self, rating: u8) -> Self {
        self.pr_risk = rating;
        self
    }

    /// Record interest from a market segment.
    #[must_use]
    pub fn with_interest(mut self, segment: MarketSegment, count: u32) -> Self {
        self.interest_breakdown.insert(segment, count);
        self
    }

    /// Whether the athlete currently carries the given badge.
    pub fn has_badge(&self, badge: RiskBadge) -> bool {
        self.risk_badges.contains(&badge)
    }
}

// ---------------------------------------------------------------------------
// Audit records
// ---------------------------------------------------------------------------

/// Immutable audit record of a single stage transition.
///
/// `seq` is assigned by the audit log, not a wall clock, so replay is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TransitionRecord {
    /// Log-assigned sequence number, strictly increasing.
    pub seq: u64,
    /// The athlete that moved.
    pub athlete_id: AthleteId,
    /// Stage before the move.
    pub from_stage: Stage,
    /// Stage after the move.
    pub to_stage: Stage,
    /// Risk level after rule evaluation.
    pub resulting_risk: RiskLevel,
    /// Advisory text as produced by the matching rule.
    pub advisory_snapshot: String,
}

/// Immutable audit record of one scenario batch.
///
/// A single record represents the entire bulk mutation regardless of how
/// many athletes matched -- the audit trail stays proportional to
/// user-visible events, not to population size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScenarioBatchRecord {
    /// Log-assigned sequence number, strictly increasing.
    pub seq: u64,
    /// Name of the scenario that was applied.
    pub scenario_name: String,
    /// Every athlete the scenario mutated. May be empty.
    pub affected: Vec<AthleteId>,
}

/// An entry in the append-only audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AuditEntry {
    /// A single athlete moved between stages.
    Transition(TransitionRecord),
    /// A named scenario mutated a batch of athletes.
    ScenarioBatch(ScenarioBatchRecord),
}

impl AuditEntry {
    /// The log-assigned sequence number of this entry.
    pub const fn seq(&self) -> u64 {
        match self {
            Self::Transition(record) => record.seq,
            Self::ScenarioBatch(record) => record.seq,
        }
    }
}

/// Caller-facing report of an applied scenario batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BatchReport {
    /// Name of the applied scenario.
    pub scenario_name: String,
    /// Sequence number of the batch audit record.
    pub seq: u64,
    /// Ids of every mutated athlete, in store order.
    pub affected: Vec<AthleteId>,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// A per-athlete workflow action item.
///
/// Duplicates are permitted by design -- the ledger appends
/// unconditionally. `deadline` is descriptive data only and is never
/// read by any scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionItem {
    /// Stable identity of this item.
    pub id: ActionItemId,
    /// The athlete this item concerns.
    pub athlete_id: AthleteId,
    /// What needs doing.
    pub description: String,
    /// Who owns it.
    pub assignee: String,
    /// Optional target date. Informational only.
    pub deadline: Option<DateTime<Utc>>,
    /// Open or resolved. One-way transition.
    pub status: ActionStatus,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl ActionItem {
    /// Create a new open action item timestamped now.
    pub fn new(
        athlete_id: AthleteId,
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: ActionItemId::new(),
            athlete_id,
            description: description.into(),
            assignee: assignee.into(),
            deadline,
            status: ActionStatus::Open,
            created_at: Utc::now(),
        }
    }
}

/// A timestamped note or comment attached to an athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NoteEntry {
    /// The note text. Never blank; blank submissions are ignored upstream.
    pub text: String,
    /// When the note was recorded.
    pub at: DateTime<Utc>,
}

impl NoteEntry {
    /// Create a note timestamped now.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// Additive sentiment counters for one athlete.
///
/// No voter identity is tracked and no deduplication happens; repeated
/// calls accumulate without bound. This mirrors the product behavior
/// deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VoteCounters {
    /// The athlete these counters belong to.
    pub athlete_id: AthleteId,
    /// Up votes.
    pub up: u64,
    /// Down votes.
    pub down: u64,
    /// Review flags.
    pub flag: u64,
}

impl VoteCounters {
    /// Zeroed counters for an athlete.
    pub const fn zero(athlete_id: AthleteId) -> Self {
        Self {
            athlete_id,
            up: 0,
            down: 0,
            flag: 0,
        }
    }

    /// Increment one counter. Saturates rather than wraps.
    pub const fn increment(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Up => self.up = self.up.saturating_add(1),
            VoteKind::Down => self.down = self.down.saturating_add(1),
            VoteKind::Flag => self.flag = self.flag.saturating_add(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Boardroom summary
// ---------------------------------------------------------------------------

/// The athlete holding the highest valuation in the population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TopValuation {
    /// The athlete's id.
    pub athlete_id: AthleteId,
    /// The athlete's name.
    pub name: String,
    /// Their valuation score.
    pub score: u8,
}

/// Fixed-order boardroom aggregation over the whole population.
///
/// Consumers (exports, dashboard panels) render the lines positionally,
/// so field order here is part of the contract. An empty population
/// yields empty lists and zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BoardSummary {
    /// Line 1: how many athletes carry `High` risk.
    pub high_risk_count: usize,
    /// Line 1: their names, in store order.
    pub high_risk_names: Vec<String>,
    /// Line 2: sum of standing offers across the population.
    pub total_offers: u64,
    /// Line 2: the single highest-valued athlete, if any.
    pub top_valuation: Option<TopValuation>,
    /// Line 3: names of athletes whose market is closing.
    pub closing_names: Vec<String>,
    /// Line 4: names of athletes carrying the `Visa` badge.
    pub visa_names: Vec<String>,
    /// Line 5: names carrying the `Dropout` or `Family` badge.
    pub welfare_names: Vec<String>,
    /// Line 6: names with public-relations exposure above 2.
    pub pr_exposure_names: Vec<String>,
}
