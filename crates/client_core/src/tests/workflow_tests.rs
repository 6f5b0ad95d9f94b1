use super::*;
use anyhow::anyhow;
use shared::domain::{AdjacentPair, ExperienceId};

fn experience(id: i64, score: f64, percentile: f64) -> ScoredExperience {
    ScoredExperience {
        id: ExperienceId(id),
        text: format!("experience {id}"),
        difficulty_score: score,
        relative_difficulty: percentile,
    }
}

fn outcome(subject_id: i64) -> EstimationOutcome {
    EstimationOutcome {
        subject: experience(subject_id, 62.5, 71.0),
        neighbors: AdjacentPair {
            lower: Some(experience(3, 40.0, 60.0)),
            higher: Some(experience(9, 80.0, 85.0)),
        },
        corpus_size: 50,
    }
}

fn estimated(subject_id: i64) -> Workflow {
    let mut workflow = Workflow::new();
    workflow.begin_estimate("text").expect("begin estimate");
    workflow.finish_estimate(Ok(outcome(subject_id)));
    workflow
}

fn compared(subject_id: i64) -> Workflow {
    let mut workflow = estimated(subject_id);
    workflow
        .begin_comparison(ComparisonChoice::Between)
        .expect("begin comparison");
    workflow.finish_comparison(Ok(experience(subject_id, 64.0, 73.5)));
    workflow
}

#[test]
fn comparison_from_idle_is_a_silent_no_op() {
    let mut workflow = Workflow::new();
    assert!(workflow.begin_comparison(ComparisonChoice::Harder).is_none());
    assert_eq!(workflow.state(), &WorkflowState::Idle);
    assert!(workflow.last_error().is_none());
}

#[test]
fn comparison_while_estimating_is_ignored() {
    let mut workflow = Workflow::new();
    workflow.begin_estimate("text").expect("begin estimate");
    assert!(workflow.begin_comparison(ComparisonChoice::Easier).is_none());
    assert_eq!(workflow.state().name(), "estimating");
}

#[test]
fn comparison_no_op_keeps_previous_error() {
    let mut workflow = Workflow::new();
    workflow.begin_estimate("text").expect("begin estimate");
    workflow.finish_estimate(Err(anyhow!("boom")));

    assert!(workflow.begin_comparison(ComparisonChoice::Harder).is_none());
    assert_eq!(workflow.last_error(), Some(WorkflowError::EstimationFailed));
}

#[test]
fn estimate_failure_from_idle_returns_to_idle_with_error() {
    let mut workflow = Workflow::new();
    let request = workflow
        .begin_estimate("I debugged a race condition for three days")
        .expect("begin estimate");
    assert_eq!(request.text, "I debugged a race condition for three days");
    assert!(workflow.is_busy());

    workflow.finish_estimate(Err(anyhow!("network unreachable")));

    assert_eq!(workflow.state(), &WorkflowState::Idle);
    assert_eq!(workflow.last_error(), Some(WorkflowError::EstimationFailed));
    assert!(!workflow.is_busy());

    workflow.begin_estimate("retry").expect("retry allowed");
    assert!(workflow.last_error().is_none());
}

#[test]
fn empty_text_is_forwarded_unchanged() {
    let mut workflow = Workflow::new();
    let request = workflow.begin_estimate("").expect("begin estimate");
    assert_eq!(request.text, "");
}

#[test]
fn second_estimate_is_refused_while_busy() {
    let mut workflow = Workflow::new();
    workflow.begin_estimate("first").expect("begin estimate");

    assert_eq!(workflow.begin_estimate("second"), Err(WorkflowError::Busy));
    assert_eq!(
        workflow.state(),
        &WorkflowState::Estimating {
            text: "first".to_string(),
            fallback: None,
        }
    );
}

#[test]
fn successful_estimate_clears_previous_comparison() {
    let mut workflow = compared(7);
    assert_eq!(workflow.state().name(), "compared");

    workflow.begin_estimate("another").expect("new estimate allowed");
    workflow.finish_estimate(Ok(outcome(12)));

    assert_eq!(workflow.state(), &WorkflowState::Estimated(outcome(12)));
    assert!(workflow.state().comparison().is_none());
}

#[test]
fn estimate_failure_from_compared_restores_prior_context() {
    let mut workflow = compared(7);
    let before = workflow.state().clone();

    workflow.begin_estimate("another").expect("new estimate allowed");
    assert_eq!(workflow.state().outcome(), Some(&outcome(7)));
    workflow.finish_estimate(Err(anyhow!("503 service unavailable")));

    assert_eq!(workflow.state(), &before);
    assert_eq!(workflow.last_error(), Some(WorkflowError::EstimationFailed));
}

#[test]
fn comparison_carries_subject_id_and_choice_flags() {
    for choice in ComparisonChoice::ALL {
        let mut workflow = estimated(7);
        let request = workflow.begin_comparison(choice).expect("estimate held");
        assert_eq!(request.experience_id, ExperienceId(7));
        assert_eq!(
            (
                request.is_more_difficult_than_lower,
                request.is_less_difficult_than_higher
            ),
            choice.flags()
        );
        assert!(matches!(
            workflow.state(),
            WorkflowState::Comparing { choice: held, .. } if *held == choice
        ));
    }
}

#[test]
fn recomparison_overwrites_previous_result() {
    let mut workflow = compared(7);
    workflow
        .begin_comparison(ComparisonChoice::Harder)
        .expect("compared state accepts another comparison");
    workflow.finish_comparison(Ok(experience(7, 70.0, 80.0)));

    assert_eq!(
        workflow.state(),
        &WorkflowState::Compared {
            outcome: outcome(7),
            comparison: experience(7, 70.0, 80.0),
        }
    );
}

#[test]
fn comparison_failure_keeps_previous_comparison() {
    let mut workflow = compared(7);
    workflow
        .begin_comparison(ComparisonChoice::Easier)
        .expect("begin comparison");
    workflow.finish_comparison(Err(anyhow!("malformed body")));

    assert_eq!(
        workflow.state(),
        &WorkflowState::Compared {
            outcome: outcome(7),
            comparison: experience(7, 64.0, 73.5),
        }
    );
    assert_eq!(workflow.last_error(), Some(WorkflowError::ComparisonFailed));
}

#[test]
fn first_comparison_failure_returns_to_estimated() {
    let mut workflow = estimated(7);
    workflow
        .begin_comparison(ComparisonChoice::NeitherOrTie)
        .expect("begin comparison");
    workflow.finish_comparison(Err(anyhow!("timeout")));

    assert_eq!(workflow.state(), &WorkflowState::Estimated(outcome(7)));
    assert_eq!(workflow.last_error(), Some(WorkflowError::ComparisonFailed));
    assert!(workflow.can_compare());
}

#[test]
fn stray_completions_are_ignored() {
    let mut workflow = estimated(7);
    workflow.finish_comparison(Ok(experience(7, 1.0, 1.0)));
    workflow.finish_estimate(Ok(outcome(99)));

    assert_eq!(workflow.state(), &WorkflowState::Estimated(outcome(7)));
}

#[test]
fn reset_is_refused_while_busy() {
    let mut workflow = estimated(7);
    workflow
        .begin_comparison(ComparisonChoice::Harder)
        .expect("begin comparison");
    assert_eq!(workflow.reset(), Err(WorkflowError::Busy));

    workflow.finish_comparison(Ok(experience(7, 64.0, 73.5)));
    workflow.reset().expect("settled workflow resets");
    assert_eq!(workflow.state(), &WorkflowState::Idle);
}
