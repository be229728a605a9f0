//! The scenario engine: named bulk "shock" events.
//!
//! A scenario carries an eligibility predicate over one athlete and a
//! pure field patch. Applying a scenario evaluates the predicate over
//! the whole population, computes the **full** next population in one
//! pass, and only then swaps the store's contents -- callers never
//! observe a state where some eligible athletes are updated and others
//! are not.
//!
//! Exactly one [`ScenarioBatchRecord`] is appended per application,
//! listing every affected id, even when zero athletes matched.
//!
//! [`ScenarioBatchRecord`]: fastbreak_types::ScenarioBatchRecord

use fastbreak_types::{
    Athlete, BatchReport, MarketState, RiskBadge, RiskLevel, ScenarioBatchRecord, Stage,
};
use tracing::info;

use crate::audit::AuditLog;
use crate::error::EngineError;
use crate::store::AthleteStore;

// ---------------------------------------------------------------------------
// Advisory texts
// ---------------------------------------------------------------------------

/// Advisory set by the visa shock scenario.
pub const VISA_SHOCK_ADVISORY: &str = "Visa regime changed. Review eligibility.";

/// Advisory set by the transfer window scenario.
pub const WINDOW_SLAM_ADVISORY: &str = "Transfer window closing early. Decide now.";

/// Advisory set by the academic audit scenario.
pub const ACADEMIC_AUDIT_ADVISORY: &str = "Eligibility under review.";

/// Advisory set by the agency fee dispute scenario.
pub const FEE_DISPUTE_ADVISORY: &str = "Offers frozen pending fee resolution.";

// ---------------------------------------------------------------------------
// Scenario definitions
// ---------------------------------------------------------------------------

/// A named population-wide shock event.
#[derive(Clone, Copy)]
pub struct Scenario {
    name: &'static str,
    eligible: fn(&Athlete) -> bool,
    patch: fn(&mut Athlete),
}

impl Scenario {
    /// The catalog name callers use to apply this scenario.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether an athlete is eligible for this scenario's patch.
    pub fn is_eligible(&self, athlete: &Athlete) -> bool {
        (self.eligible)(athlete)
    }

    /// Apply this scenario's field patch to one athlete.
    ///
    /// Pure with respect to the rest of the population; the engine and
    /// replay both call this on exactly the eligible/recorded athletes.
    pub fn apply_patch(&self, athlete: &mut Athlete) {
        (self.patch)(athlete);
    }
}

impl core::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn visa_shock_eligible(athlete: &Athlete) -> bool {
    matches!(athlete.stage, Stage::EuroPro | Stage::NbaInternational)
}

fn visa_shock_patch(athlete: &mut Athlete) {
    athlete.risk_level = RiskLevel::High;
    athlete.risk_badges.insert(RiskBadge::Visa);
    athlete.advisory_text = String::from(VISA_SHOCK_ADVISORY);
}

fn window_slam_eligible(athlete: &Athlete) -> bool {
    athlete.market_state == MarketState::Open
}

fn window_slam_patch(athlete: &mut Athlete) {
    athlete.market_state = MarketState::Closing;
    athlete.advisory_text = String::from(WINDOW_SLAM_ADVISORY);
}

fn academic_audit_eligible(athlete: &Athlete) -> bool {
    athlete.stage == Stage::CollegeUni
        && athlete.pro_readiness < crate::transition::PRO_READY_THRESHOLD
}

fn academic_audit_patch(athlete: &mut Athlete) {
    athlete.risk_level = RiskLevel::Medium;
    athlete.risk_badges.insert(RiskBadge::Academic);
    athlete.advisory_text = String::from(ACADEMIC_AUDIT_ADVISORY);
}

fn fee_dispute_eligible(athlete: &Athlete) -> bool {
    athlete.offer_count >= 2
}

fn fee_dispute_patch(athlete: &mut Athlete) {
    athlete.risk_level = RiskLevel::Medium;
    athlete.risk_badges.insert(RiskBadge::Contract);
    athlete.advisory_text = String::from(FEE_DISPUTE_ADVISORY);
}

/// The scenario catalog. Names are the exact strings the dashboard's
/// shock buttons send.
pub const CATALOG: &[Scenario] = &[
    Scenario {
        name: "Global Visa Change",
        eligible: visa_shock_eligible,
        patch: visa_shock_patch,
    },
    Scenario {
        name: "Transfer Window Slam",
        eligible: window_slam_eligible,
        patch: window_slam_patch,
    },
    Scenario {
        name: "Academic Eligibility Audit",
        eligible: academic_audit_eligible,
        patch: academic_audit_patch,
    },
    Scenario {
        name: "Agency Fee Dispute",
        eligible: fee_dispute_eligible,
        patch: fee_dispute_patch,
    },
];

/// Look up a scenario by its exact catalog name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|scenario| scenario.name == name)
}

// ---------------------------------------------------------------------------
// Applying a scenario
// ---------------------------------------------------------------------------

/// Apply a named scenario across the whole population as one atomic batch.
///
/// The full next population is computed before the store is touched, and
/// exactly one batch record is appended regardless of how many athletes
/// matched (even zero).
///
/// # Errors
///
/// Returns [`EngineError::UnknownScenario`] for a name outside the
/// catalog; the store and audit log are untouched in that case.
pub fn apply_scenario(
    store: &mut AthleteStore,
    audit: &mut AuditLog,
    name: &str,
) -> Result<BatchReport, EngineError> {
    let scenario = find(name).ok_or_else(|| EngineError::UnknownScenario(name.to_owned()))?;

    let mut next = store.clone_population();
    let mut affected = Vec::new();
    for (id, athlete) in &mut next {
        if scenario.is_eligible(athlete) {
            scenario.apply_patch(athlete);
            affected.push(*id);
        }
    }

    let record = audit.append_scenario_batch(scenario.name(), affected.clone());
    store.swap_population(next);

    info!(
        scenario = scenario.name(),
        seq = record.seq,
        affected = affected.len(),
        "scenario batch applied"
    );

    Ok(BatchReport {
        scenario_name: record.scenario_name,
        seq: record.seq,
        affected,
    })
}

/// Re-apply a recorded scenario batch to exactly the recorded ids.
///
/// Used by audit replay. The eligibility predicate is deliberately not
/// re-evaluated: replay follows history, so it cannot diverge from the
/// original application even if eligibility would evaluate differently
/// mid-replay.
///
/// # Errors
///
/// Returns [`EngineError::UnknownScenario`] if the recorded name is no
/// longer in the catalog, or [`EngineError::AthleteNotFound`] if a
/// recorded id is missing from the store. Nothing is mutated on error.
pub fn replay_batch(
    store: &mut AthleteStore,
    record: &ScenarioBatchRecord,
) -> Result<(), EngineError> {
    let scenario = find(&record.scenario_name)
        .ok_or_else(|| EngineError::UnknownScenario(record.scenario_name.clone()))?;

    let mut next = store.clone_population();
    for id in &record.affected {
        let athlete = next
            .get_mut(id)
            .ok_or(EngineError::AthleteNotFound(*id))?;
        scenario.apply_patch(athlete);
    }
    store.swap_population(next);

    Ok(())
}
