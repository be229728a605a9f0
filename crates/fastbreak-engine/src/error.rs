//! Error types for the `fastbreak-engine` crate.
//!
//! All fallible operations in this crate return [`EngineError`] through
//! the standard [`Result`] type alias. Soft conditions -- a transition
//! that merely raises risk, a scenario matching zero athletes -- are not
//! errors; the engine annotates, it never blocks.

use fastbreak_types::AthleteId;

/// Errors that can occur during pipeline engine operations.
///
/// Every error is local and recoverable by the caller, and no operation
/// leaves the store partially mutated on error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An athlete was not found in the store.
    #[error("athlete not found: {0}")]
    AthleteNotFound(AthleteId),

    /// A stage label is not a member of the stage graph.
    #[error("unknown stage: {0:?}")]
    UnknownStage(String),

    /// A scenario name is not in the catalog.
    #[error("unknown scenario: {0:?}")]
    UnknownScenario(String),
}
