//! The pipeline stage graph.
//!
//! A fixed node set with no enforced edges: any stage is reachable from
//! any other. The graph exists to validate membership (dashboard labels
//! arrive as strings) and to classify moves as expected progressions or
//! jumps -- it never gates movement. Blocking is explicitly not this
//! engine's job; the transition rules annotate risk instead.

use fastbreak_types::Stage;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Transition classification
// ---------------------------------------------------------------------------

/// How a move between two stages relates to the expected career path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// One step forward along the progression
    /// Academy -> College/Uni -> Domestic Pro -> Euro Pro -> NBA/International.
    Expected,
    /// Anything else: a skip, a regression, a self-move, or any move
    /// involving Dropout/Other.
    Jump,
}

// ---------------------------------------------------------------------------
// StageGraph
// ---------------------------------------------------------------------------

/// The fixed set of pipeline stages and their progression order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageGraph;

impl StageGraph {
    /// All member stages, in progression order.
    pub const MEMBERS: [Stage; 6] = Stage::ALL;

    /// Resolve a dashboard label into a member stage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownStage`] when the label is not a
    /// member of the graph.
    pub fn resolve(label: &str) -> Result<Stage, EngineError> {
        Stage::parse(label).ok_or_else(|| EngineError::UnknownStage(label.to_owned()))
    }

    /// Classify a move between two member stages.
    ///
    /// Only the single forward step along the progression counts as
    /// [`TransitionKind::Expected`]; everything else is a
    /// [`TransitionKind::Jump`].
    pub const fn classify(from: Stage, to: Stage) -> TransitionKind {
        match (from.progression_index(), to.progression_index()) {
            (Some(f), Some(t)) if t == f.saturating_add(1) => TransitionKind::Expected,
            _ => TransitionKind::Jump,
        }
    }
}
