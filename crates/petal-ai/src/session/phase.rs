//! Per-turn lifecycle.

use std::fmt;

/// Where the current turn is.
///
/// `Idle -> AwaitingInput -> PayloadBuilt -> Streaming -> Committed`, with
/// `Failed` reachable from `PayloadBuilt` and `Streaming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Fresh session, nothing shown yet.
    #[default]
    Idle,
    AwaitingInput,
    PayloadBuilt,
    Streaming,
    Committed,
    Failed,
}

impl TurnPhase {
    /// Whether no turn is in flight.
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            TurnPhase::Idle | TurnPhase::AwaitingInput | TurnPhase::Committed | TurnPhase::Failed
        )
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::Idle => "idle",
            TurnPhase::AwaitingInput => "awaiting-input",
            TurnPhase::PayloadBuilt => "payload-built",
            TurnPhase::Streaming => "streaming",
            TurnPhase::Committed => "committed",
            TurnPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}
