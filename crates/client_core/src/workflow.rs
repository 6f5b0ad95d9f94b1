//! The estimate-then-compare state machine.
//!
//! [`Workflow`] is synchronous: callers take the request a `begin_*` call
//! hands back, perform the round trip however they like, and feed the result
//! to the matching `finish_*` call. This lets the async
//! [`EstimationSession`](crate::session::EstimationSession) and the
//! event-driven desktop GUI share one set of transitions.

use shared::{
    domain::{ComparisonChoice, EstimationOutcome, ScoredExperience},
    protocol::{CompareRequest, EstimateRequest},
};
use tracing::{debug, error, info, warn};

use crate::error::WorkflowError;

/// A settled estimate together with the latest comparison made against it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeldResult {
    pub outcome: EstimationOutcome,
    pub comparison: Option<ScoredExperience>,
}

impl HeldResult {
    fn into_state(self) -> WorkflowState {
        match self.comparison {
            Some(comparison) => WorkflowState::Compared {
                outcome: self.outcome,
                comparison,
            },
            None => WorkflowState::Estimated(self.outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Estimating {
        text: String,
        /// Restored if the estimate fails.
        fallback: Option<HeldResult>,
    },
    Estimated(EstimationOutcome),
    Comparing {
        outcome: EstimationOutcome,
        choice: ComparisonChoice,
        /// Restored if the comparison fails.
        previous: Option<ScoredExperience>,
    },
    Compared {
        outcome: EstimationOutcome,
        comparison: ScoredExperience,
    },
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Estimating { .. } => "estimating",
            WorkflowState::Estimated(_) => "estimated",
            WorkflowState::Comparing { .. } => "comparing",
            WorkflowState::Compared { .. } => "compared",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            WorkflowState::Estimating { .. } | WorkflowState::Comparing { .. }
        )
    }

    /// The estimate framing the view. While a new estimate is in flight this
    /// is the one it would fall back to.
    pub fn outcome(&self) -> Option<&EstimationOutcome> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::Estimating { fallback, .. } => fallback.as_ref().map(|held| &held.outcome),
            WorkflowState::Estimated(outcome)
            | WorkflowState::Comparing { outcome, .. }
            | WorkflowState::Compared { outcome, .. } => Some(outcome),
        }
    }

    pub fn comparison(&self) -> Option<&ScoredExperience> {
        match self {
            WorkflowState::Idle | WorkflowState::Estimated(_) => None,
            WorkflowState::Estimating { fallback, .. } => {
                fallback.as_ref().and_then(|held| held.comparison.as_ref())
            }
            WorkflowState::Comparing { previous, .. } => previous.as_ref(),
            WorkflowState::Compared { comparison, .. } => Some(comparison),
        }
    }

    fn into_held(self) -> Option<HeldResult> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::Estimating { fallback, .. } => fallback,
            WorkflowState::Estimated(outcome) => Some(HeldResult {
                outcome,
                comparison: None,
            }),
            WorkflowState::Comparing {
                outcome, previous, ..
            } => Some(HeldResult {
                outcome,
                comparison: previous,
            }),
            WorkflowState::Compared {
                outcome,
                comparison,
            } => Some(HeldResult {
                outcome,
                comparison: Some(comparison),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct Workflow {
    state: WorkflowState,
    last_error: Option<WorkflowError>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn last_error(&self) -> Option<WorkflowError> {
        self.last_error
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// True when a comparison would be accepted right now.
    pub fn can_compare(&self) -> bool {
        matches!(
            self.state,
            WorkflowState::Estimated(_) | WorkflowState::Compared { .. }
        )
    }

    /// Enters `Estimating` and returns the request to send. The text is
    /// forwarded as typed, empty included.
    pub fn begin_estimate(&mut self, text: impl Into<String>) -> Result<EstimateRequest, WorkflowError> {
        if self.is_busy() {
            warn!(state = self.state.name(), "estimate refused: request already in flight");
            return Err(WorkflowError::Busy);
        }

        let text = text.into();
        let fallback = std::mem::take(&mut self.state).into_held();
        self.last_error = None;
        self.state = WorkflowState::Estimating {
            text: text.clone(),
            fallback,
        };
        Ok(EstimateRequest { text })
    }

    pub fn finish_estimate(&mut self, result: anyhow::Result<EstimationOutcome>) {
        match std::mem::take(&mut self.state) {
            WorkflowState::Estimating { fallback, .. } => match result {
                Ok(outcome) => {
                    info!(
                        experience_id = outcome.subject.id.0,
                        relative_difficulty = outcome.subject.relative_difficulty,
                        corpus_size = outcome.corpus_size,
                        "estimate received"
                    );
                    self.state = WorkflowState::Estimated(outcome);
                }
                Err(err) => {
                    error!("estimate request failed: {err:#}");
                    self.state = fallback.map(HeldResult::into_state).unwrap_or_default();
                    self.last_error = Some(WorkflowError::EstimationFailed);
                }
            },
            other => {
                warn!(state = other.name(), "ignoring estimate completion with no estimate in flight");
                self.state = other;
            }
        }
    }

    /// Enters `Comparing` and returns the request to send, or `None` without
    /// touching any state when no settled estimate is held.
    pub fn begin_comparison(&mut self, choice: ComparisonChoice) -> Option<CompareRequest> {
        let (outcome, previous) = match std::mem::take(&mut self.state) {
            WorkflowState::Estimated(outcome) => (outcome, None),
            WorkflowState::Compared {
                outcome,
                comparison,
            } => (outcome, Some(comparison)),
            other => {
                debug!(state = other.name(), "comparison ignored: no settled estimate");
                self.state = other;
                return None;
            }
        };

        self.last_error = None;
        let request = CompareRequest::new(outcome.subject.id, choice);
        self.state = WorkflowState::Comparing {
            outcome,
            choice,
            previous,
        };
        Some(request)
    }

    pub fn finish_comparison(&mut self, result: anyhow::Result<ScoredExperience>) {
        match std::mem::take(&mut self.state) {
            WorkflowState::Comparing {
                outcome, previous, ..
            } => match result {
                Ok(comparison) => {
                    if comparison.id != outcome.subject.id {
                        warn!(
                            expected = outcome.subject.id.0,
                            received = comparison.id.0,
                            "comparison result refers to a different experience"
                        );
                    }
                    info!(
                        experience_id = comparison.id.0,
                        relative_difficulty = comparison.relative_difficulty,
                        "comparison applied"
                    );
                    self.state = WorkflowState::Compared {
                        outcome,
                        comparison,
                    };
                }
                Err(err) => {
                    error!("compare request failed: {err:#}");
                    self.state = HeldResult {
                        outcome,
                        comparison: previous,
                    }
                    .into_state();
                    self.last_error = Some(WorkflowError::ComparisonFailed);
                }
            },
            other => {
                warn!(state = other.name(), "ignoring comparison completion with no comparison in flight");
                self.state = other;
            }
        }
    }

    /// Drops everything held and returns to `Idle`.
    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        if self.is_busy() {
            return Err(WorkflowError::Busy);
        }
        self.state = WorkflowState::Idle;
        self.last_error = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
