//! Events sent from the backend worker back to the UI thread.

use shared::domain::{EstimationOutcome, ScoredExperience};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    EstimateFinished(anyhow::Result<EstimationOutcome>),
    ComparisonFinished(anyhow::Result<ScoredExperience>),
}
