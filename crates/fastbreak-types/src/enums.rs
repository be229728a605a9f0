//! Enumeration types for the Fastbreak pipeline engine.
//!
//! `Stage` carries the display labels used throughout the club dashboard
//! ("College/Uni", "NBA/International", ...) and parses them back. Every
//! other enum is a closed classification derived or validated by the
//! engine, never free-form text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

/// A named phase in an athlete's career pipeline.
///
/// The stage set is fixed. There are no enforced edges between stages --
/// any stage is reachable from any other. The graph exists to validate
/// membership and to classify moves as expected progressions or jumps,
/// never to gate movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Club academy development program.
    Academy,
    /// College or university competition.
    CollegeUni,
    /// Domestic professional league.
    DomesticPro,
    /// European professional league.
    EuroPro,
    /// NBA or other top international league.
    NbaInternational,
    /// Left the pipeline (dropout, injury retirement, other).
    DropoutOther,
}

impl Stage {
    /// All stages, in forward progression order with `DropoutOther` last.
    pub const ALL: [Self; 6] = [
        Self::Academy,
        Self::CollegeUni,
        Self::DomesticPro,
        Self::EuroPro,
        Self::NbaInternational,
        Self::DropoutOther,
    ];

    /// Dashboard display label for this stage.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Academy => "Academy",
            Self::CollegeUni => "College/Uni",
            Self::DomesticPro => "Domestic Pro",
            Self::EuroPro => "Euro Pro",
            Self::NbaInternational => "NBA/International",
            Self::DropoutOther => "Dropout/Other",
        }
    }

    /// Parse a dashboard label into a stage.
    ///
    /// Matching is case-insensitive and accepts the short aliases the
    /// dashboard's drag targets use ("college", "nba", "dropout").
    /// Returns `None` for labels outside the stage set.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "academy" => Some(Self::Academy),
            "college/uni" | "college" | "uni" => Some(Self::CollegeUni),
            "domestic pro" | "domestic" => Some(Self::DomesticPro),
            "euro pro" | "euro" => Some(Self::EuroPro),
            "nba/international" | "nba" | "international" => Some(Self::NbaInternational),
            "dropout/other" | "dropout" | "other" => Some(Self::DropoutOther),
            _ => None,
        }
    }

    /// Position on the expected forward progression, if the stage is on it.
    ///
    /// `DropoutOther` is off the progression and returns `None`.
    pub const fn progression_index(self) -> Option<u8> {
        match self {
            Self::Academy => Some(0),
            Self::CollegeUni => Some(1),
            Self::DomesticPro => Some(2),
            Self::EuroPro => Some(3),
            Self::NbaInternational => Some(4),
            Self::DropoutOther => None,
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Risk classification
// ---------------------------------------------------------------------------

/// Coarse severity classification derived from transition rules.
///
/// Never set directly by a caller; only the transition rule engine and
/// scenario engine write it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum RiskLevel {
    /// No elevated concern.
    #[default]
    Low,
    /// Worth board attention.
    Medium,
    /// Requires immediate intervention.
    High,
}

/// A rule-derived risk tag attached to an athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RiskBadge {
    /// Work-permit or visa exposure.
    Visa,
    /// Elevated dropout likelihood.
    Dropout,
    /// Family situation affecting availability.
    Family,
    /// Contract or agency dispute.
    Contract,
    /// Academic eligibility concern.
    Academic,
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// Where an athlete's transfer market currently stands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum MarketState {
    /// Offers can be made and accepted.
    #[default]
    Open,
    /// Window is closing; decisions are urgent.
    Closing,
    /// No further offers this window.
    Closed,
}

/// A segment of the market expressing interest in an athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MarketSegment {
    /// Clubs in the domestic professional league.
    DomesticClubs,
    /// European professional clubs.
    EuroClubs,
    /// NCAA and other college programs.
    NcaaPrograms,
    /// NBA scouting departments.
    NbaScouts,
    /// Player agencies.
    Agencies,
}

// ---------------------------------------------------------------------------
// Workflow and votes
// ---------------------------------------------------------------------------

/// Lifecycle status of a workflow action item.
///
/// The only transition is `Open` to `Resolved`; a resolved item never
/// reverts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum ActionStatus {
    /// Awaiting resolution.
    #[default]
    Open,
    /// Done; terminal.
    Resolved,
}

/// Sentiment vote kinds recorded against an athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum VoteKind {
    /// Positive sentiment.
    Up,
    /// Negative sentiment.
    Down,
    /// Flag for review.
    Flag,
}
