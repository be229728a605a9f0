//! Shared type definitions for the Fastbreak club platform.
//!
//! This crate is the single source of truth for all types used across the
//! Fastbreak workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the club dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for identifiers
//! - [`enums`] -- Pipeline stages, risk classifications, market and vote enums
//! - [`structs`] -- Athlete record, audit records, workflow items, summary

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ActionStatus, MarketSegment, MarketState, RiskBadge, RiskLevel, Stage, VoteKind,
};
pub use ids::{ActionItemId, AthleteId};
pub use structs::{
    ActionItem, Athlete, AuditEntry, BatchReport, BoardSummary, NoteEntry, ScenarioBatchRecord,
    TopValuation, TransitionRecord, VoteCounters, MAX_PRO_READINESS, MAX_VALUATION,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::AthleteId::export_all();
        let _ = crate::ids::ActionItemId::export_all();

        // Enums
        let _ = crate::enums::Stage::export_all();
        let _ = crate::enums::RiskLevel::export_all();
        let _ = crate::enums::RiskBadge::export_all();
        let _ = crate::enums::MarketState::export_all();
        let _ = crate::enums::MarketSegment::export_all();
        let _ = crate::enums::ActionStatus::export_all();
        let _ = crate::enums::VoteKind::export_all();

        // Structs
        let _ = crate::structs::Athlete::export_all();
        let _ = crate::structs::TransitionRecord::export_all();
        let _ = crate::structs::ScenarioBatchRecord::export_all();
        let _ = crate::structs::AuditEntry::export_all();
        let _ = crate::structs::BatchReport::export_all();
        let _ = crate::structs::ActionItem::export_all();
        let _ = crate::structs::NoteEntry::export_all();
        let _ = crate::structs::VoteCounters::export_all();
        let _ = crate::structs::TopValuation::export_all();
        let _ = crate::structs::BoardSummary::export_all();
    }
}
