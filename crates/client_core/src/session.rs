use std::sync::Arc;

use shared::domain::ComparisonChoice;

use crate::{
    error::WorkflowError, projection::WorkflowView, transport::EstimatorBackend,
    workflow::Workflow,
};

/// Drives a [`Workflow`] through an [`EstimatorBackend`], one request at a time.
pub struct EstimationSession {
    backend: Arc<dyn EstimatorBackend>,
    workflow: Workflow,
}

impl EstimationSession {
    pub fn new(backend: Arc<dyn EstimatorBackend>) -> Self {
        Self {
            backend,
            workflow: Workflow::new(),
        }
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn view(&self) -> WorkflowView {
        WorkflowView::project(&self.workflow)
    }

    /// Estimates `text`. On failure the workflow is already back in a usable
    /// state; the returned error is the same one held as `last_error`.
    pub async fn submit_estimate(&mut self, text: &str) -> Result<(), WorkflowError> {
        let request = self.workflow.begin_estimate(text)?;
        let result = self.backend.estimate(request).await;
        self.workflow.finish_estimate(result);
        self.outcome()
    }

    /// Submits a judgment against the held estimate. Returns `Ok(false)`
    /// without contacting the backend when there is nothing to compare.
    pub async fn submit_comparison(
        &mut self,
        choice: ComparisonChoice,
    ) -> Result<bool, WorkflowError> {
        let Some(request) = self.workflow.begin_comparison(choice) else {
            return Ok(false);
        };
        let result = self.backend.compare(request).await;
        self.workflow.finish_comparison(result);
        self.outcome().map(|()| true)
    }

    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.workflow.reset()
    }

    fn outcome(&self) -> Result<(), WorkflowError> {
        match self.workflow.last_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
