//! The synchronous session boundary for the Fastbreak club platform.
//!
//! A [`Session`] owns one tracked population, its audit log, and the
//! per-athlete workflow ledgers, and exposes every dashboard operation
//! as a plain method call. Labels arrive as strings from the UI and are
//! resolved here; everything below this crate works in typed stages.
//!
//! # Invariants
//!
//! - All state lives in the session; dropping it discards everything.
//! - Errors are local and recoverable -- a failed call leaves the
//!   session exactly as it was.
//! - The audit trail held by the session is sufficient to rebuild the
//!   live population from the seed data (see [`replay`]).

pub mod error;
pub mod replay;
pub mod session;

pub use error::SessionError;
pub use replay::replay;
pub use session::Session;
