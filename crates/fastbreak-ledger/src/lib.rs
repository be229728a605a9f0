//! Per-athlete workflow ledger and vote tally for the Fastbreak club
//! platform.
//!
//! These logs live beside the pipeline engine: action items, notes,
//! comments, and sentiment counters are independent per-athlete records
//! consulted by the boardroom summary and rendered in the dashboard.
//! They never feed back into risk derivation.
//!
//! # Modules
//!
//! - [`workflow`] -- action items, notes, and comments
//! - [`votes`] -- additive sentiment counters
//! - [`error`] -- the crate error taxonomy

pub mod error;
pub mod votes;
pub mod workflow;

pub use error::LedgerError;
pub use votes::VoteTally;
pub use workflow::{NoteOutcome, WorkflowLedger};
