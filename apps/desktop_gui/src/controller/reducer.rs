//! Applies backend events to the workflow owned by the UI thread.

use client_core::Workflow;

use crate::controller::events::UiEvent;

pub fn apply_ui_event(workflow: &mut Workflow, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::EstimateFinished(result) => workflow.finish_estimate(result),
        UiEvent::ComparisonFinished(result) => workflow.finish_comparison(result),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use client_core::{WorkflowError, WorkflowState};
    use shared::domain::{AdjacentPair, EstimationOutcome, ExperienceId, ScoredExperience};

    use super::*;

    fn outcome() -> EstimationOutcome {
        EstimationOutcome {
            subject: ScoredExperience {
                id: ExperienceId(7),
                text: "ran a marathon".to_string(),
                difficulty_score: 62.5,
                relative_difficulty: 71.0,
            },
            neighbors: AdjacentPair::default(),
            corpus_size: 1,
        }
    }

    #[test]
    fn info_events_only_touch_status() {
        let mut workflow = Workflow::new();
        let mut status = String::new();
        apply_ui_event(
            &mut workflow,
            &mut status,
            UiEvent::Info("Backend worker ready".to_string()),
        );
        assert_eq!(status, "Backend worker ready");
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[test]
    fn estimate_events_settle_the_workflow() {
        let mut workflow = Workflow::new();
        let mut status = String::new();

        workflow.begin_estimate("ran a marathon").expect("idle");
        apply_ui_event(
            &mut workflow,
            &mut status,
            UiEvent::EstimateFinished(Err(anyhow!("connection reset"))),
        );
        assert_eq!(workflow.last_error(), Some(WorkflowError::EstimationFailed));
        assert!(!workflow.is_busy());

        workflow.begin_estimate("ran a marathon").expect("retry");
        apply_ui_event(
            &mut workflow,
            &mut status,
            UiEvent::EstimateFinished(Ok(outcome())),
        );
        assert_eq!(workflow.state(), &WorkflowState::Estimated(outcome()));
        assert!(workflow.last_error().is_none());
    }
}
