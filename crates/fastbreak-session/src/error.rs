//! Error types for the `fastbreak-session` crate.

use fastbreak_engine::EngineError;
use fastbreak_ledger::LedgerError;

/// Errors surfaced at the session boundary.
///
/// Both sources are local and recoverable; no operation leaves the
/// session partially mutated on error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An engine operation failed (unknown athlete, stage, or scenario).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A workflow ledger operation failed (unknown action index).
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
