//! Error types for the `fastbreak-ledger` crate.
//!
//! Only genuinely unresolvable lookups are errors. The ledger's soft
//! conditions -- blank note text, double-resolving an action, repeated
//! votes -- are no-ops or accumulations by design, never failures.

use fastbreak_types::AthleteId;

/// Errors that can occur during workflow ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// No action item exists at this index for this athlete.
    #[error("no action item at index {index} for athlete {athlete}")]
    ActionNotFound {
        /// The athlete whose list was addressed.
        athlete: AthleteId,
        /// The out-of-range index.
        index: usize,
    },
}
