//! Stage-transition and risk-scoring engine for the Fastbreak club
//! platform.
//!
//! This crate owns the domain rules the dashboard views consume: how an
//! athlete's move between pipeline stages derives risk, how named
//! "shock" scenarios mutate the whole population atomically, and how
//! every mutation lands in the append-only audit log.
//!
//! # Modules
//!
//! - [`store`] -- the in-memory athlete population
//! - [`stages`] -- the stage graph: membership and jump classification
//! - [`transition`] -- ordered first-match-wins transition rules
//! - [`scenario`] -- the named shock-scenario catalog and batch engine
//! - [`audit`] -- the append-only, gapless-sequence audit log
//! - [`advisory`] -- the fixed-order boardroom summary composer
//! - [`error`] -- the crate error taxonomy
//!
//! # Invariants
//!
//! - Risk level, badges, and advisory text are rule-derived; nothing
//!   outside this crate writes them.
//! - No operation leaves the store partially mutated: errors happen
//!   before any mutation, batches swap in whole.
//! - The audit log only grows, one entry per user-visible event.

pub mod advisory;
pub mod audit;
pub mod error;
pub mod scenario;
pub mod stages;
pub mod store;
pub mod transition;

pub use advisory::{summarize, PR_EXPOSURE_THRESHOLD};
pub use audit::AuditLog;
pub use error::EngineError;
pub use scenario::{apply_scenario, replay_batch, Scenario, CATALOG};
pub use stages::{StageGraph, TransitionKind};
pub use store::AthleteStore;
pub use transition::{propose_transition, AppliedTransition, TransitionRule, RULES};
