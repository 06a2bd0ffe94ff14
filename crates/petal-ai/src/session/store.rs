//! SessionStore struct and log access.

use petal_common::SessionId;
use tracing::debug;

use crate::Turn;

use super::phase::TurnPhase;

/// The conversation log and model selection for one session.
#[derive(Debug)]
pub struct SessionStore {
    id: SessionId,
    /// Hosted model id, fixed for the session.
    model: String,
    /// Ordered conversation log.
    log: Vec<Turn>,
    phase: TurnPhase,
}

impl SessionStore {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            model: model.into(),
            log: Vec::new(),
            phase: TurnPhase::Idle,
        }
    }

    /// Append a turn at the end of the log.
    pub fn append(&mut self, turn: Turn) {
        self.log.push(turn);
    }

    /// The full ordered log.
    pub fn all(&self) -> &[Turn] {
        &self.log
    }

    pub fn last(&self) -> Option<&Turn> {
        self.log.last()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Mark the session ready for the next user submission.
    pub fn await_input(&mut self) {
        if self.phase.is_settled() {
            self.set_phase(TurnPhase::AwaitingInput);
        }
    }

    pub(super) fn set_phase(&mut self, phase: TurnPhase) {
        debug!(session = %self.id.short(), from = %self.phase, to = %phase, "turn phase");
        self.phase = phase;
    }
}
